use crate::classifier::Classification;
use crate::ruleset::RuleSet;
use crate::types::RiskLevel;

/// Upper bound of every composed score.
pub const MAX_SCORE: i32 = 100;

/// Compose the weighted partial scores into a total.
///
/// Clamped at the upper bound only: every term is non-negative by rule set
/// validation, so a lower clamp would be dead code.
pub fn compose_score(rules: &RuleSet, classification: &Classification) -> i32 {
    let sum = rules.country_risk_scores.for_tier(classification.country_tier)
        + rules.purpose_risk_scores.for_tier(classification.purpose_tier)
        + rules
            .customer_type_scores
            .for_tier(classification.customer_tier)
        + classification.amount_score
        + classification.structuring_score;
    sum.min(MAX_SCORE)
}

/// Map a composed score onto a risk level using the rule set's cut points.
/// Inclusive on the lower band.
pub fn score_to_level(rules: &RuleSet, score: i32) -> RiskLevel {
    let cuts = &rules.risk_score_thresholds;
    if score <= cuts.low_max {
        RiskLevel::Low
    } else if score <= cuts.medium_max {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

//! The configurable rule set governing all scoring weights and thresholds.
//!
//! A `RuleSet` is versioned as a whole: it is built, validated, and swapped
//! as one value, never mutated field by field. The hard-coded defaults in
//! `RuleSet::default()` are the reference configuration the manager resets to.

use std::collections::BTreeSet;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RemitComplianceError;
use crate::types::{Money, RiskTier};
use crate::RemitComplianceResult;

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Per-tier score weights for one risk dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWeights {
    pub high: i32,
    pub medium: i32,
    pub low: i32,
}

impl TierWeights {
    pub fn for_tier(&self, tier: RiskTier) -> i32 {
        match tier {
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
        }
    }
}

/// Amount thresholds in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountThresholds {
    pub high_risk_origin_threshold: Money,
    pub general_high_threshold: Money,
    pub moderate_threshold: Money,
}

/// Partial scores added by the amount and structuring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountPenalties {
    /// Amount over the origin threshold AND origin in the high-risk set.
    pub stacked_origin: i32,
    /// Amount over the general high threshold, regardless of origin.
    pub general_high: i32,
    /// Amount over the moderate threshold but not the general high one.
    pub moderate: i32,
    /// Structuring signals present. Roughly one risk level.
    pub structuring_bonus: i32,
}

/// Score-to-level cut points. Inclusive on the lower band:
/// score <= low_max is Low, score <= medium_max is Medium, else High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub low_max: i32,
    pub medium_max: i32,
}

/// Full compliance rule configuration.
///
/// Country membership is matched exactly; purpose membership is matched
/// ASCII-case-insensitively. Tier precedence is high > medium > low, so an
/// identifier accidentally present in two sets resolves to the riskier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub high_risk_countries: BTreeSet<String>,
    pub medium_risk_countries: BTreeSet<String>,
    pub low_risk_countries: BTreeSet<String>,
    pub high_risk_purposes: BTreeSet<String>,
    pub medium_risk_purposes: BTreeSet<String>,
    pub low_risk_purposes: BTreeSet<String>,
    pub country_risk_scores: TierWeights,
    pub purpose_risk_scores: TierWeights,
    pub customer_type_scores: TierWeights,
    pub amount_thresholds: AmountThresholds,
    pub amount_penalties: AmountPenalties,
    pub risk_score_thresholds: ScoreThresholds,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn string_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            high_risk_countries: string_set(&[
                "Cayman Islands",
                "Nigeria",
                "Syria",
                "Iran",
                "North Korea",
            ]),
            medium_risk_countries: string_set(&["Vietnam", "Indonesia", "India"]),
            low_risk_countries: string_set(&[
                "Singapore",
                "United Kingdom",
                "Philippines",
                "United States",
            ]),
            high_risk_purposes: string_set(&["investment", "gambling", "crypto trading"]),
            medium_risk_purposes: string_set(&["trade finance", "remittance"]),
            low_risk_purposes: string_set(&["payroll", "services"]),
            country_risk_scores: TierWeights {
                high: 35,
                medium: 18,
                low: 5,
            },
            purpose_risk_scores: TierWeights {
                high: 28,
                medium: 15,
                low: 3,
            },
            customer_type_scores: TierWeights {
                high: 40,
                medium: 15,
                low: 5,
            },
            amount_thresholds: AmountThresholds {
                high_risk_origin_threshold: dec!(10_000),
                general_high_threshold: dec!(25_000),
                moderate_threshold: dec!(15_000),
            },
            amount_penalties: AmountPenalties {
                stacked_origin: 40,
                general_high: 40,
                moderate: 15,
                structuring_bonus: 15,
            },
            risk_score_thresholds: ScoreThresholds {
                low_max: 30,
                medium_max: 70,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Lookups and validation
// ---------------------------------------------------------------------------

impl RuleSet {
    /// Tier of an origin country, or None when the country is in no set.
    pub fn country_tier(&self, country: &str) -> Option<RiskTier> {
        if self.high_risk_countries.contains(country) {
            Some(RiskTier::High)
        } else if self.medium_risk_countries.contains(country) {
            Some(RiskTier::Medium)
        } else if self.low_risk_countries.contains(country) {
            Some(RiskTier::Low)
        } else {
            None
        }
    }

    /// Tier of a transaction purpose, matched case-insensitively, or None
    /// when the purpose is in no set.
    pub fn purpose_tier(&self, purpose: &str) -> Option<RiskTier> {
        let p = purpose.trim();
        let matches = |set: &BTreeSet<String>| set.iter().any(|entry| entry.eq_ignore_ascii_case(p));
        if matches(&self.high_risk_purposes) {
            Some(RiskTier::High)
        } else if matches(&self.medium_risk_purposes) {
            Some(RiskTier::Medium)
        } else if matches(&self.low_risk_purposes) {
            Some(RiskTier::Low)
        } else {
            None
        }
    }

    /// Structural well-formedness check.
    ///
    /// Required keys are enforced at deserialization; this validates the
    /// numeric invariants: weights, penalties, and thresholds non-negative,
    /// and low_max < medium_max <= 100.
    pub fn validate(&self) -> RemitComplianceResult<()> {
        let weight_tables = [
            ("country_risk_scores", &self.country_risk_scores),
            ("purpose_risk_scores", &self.purpose_risk_scores),
            ("customer_type_scores", &self.customer_type_scores),
        ];
        for (name, weights) in weight_tables {
            if weights.high < 0 || weights.medium < 0 || weights.low < 0 {
                return invalid(format!("{} must be non-negative", name));
            }
        }

        let t = &self.amount_thresholds;
        if t.high_risk_origin_threshold.is_sign_negative()
            || t.general_high_threshold.is_sign_negative()
            || t.moderate_threshold.is_sign_negative()
        {
            return invalid("amount_thresholds must be non-negative".to_string());
        }

        let p = &self.amount_penalties;
        if p.stacked_origin < 0 || p.general_high < 0 || p.moderate < 0 || p.structuring_bonus < 0 {
            return invalid("amount_penalties must be non-negative".to_string());
        }

        let cuts = &self.risk_score_thresholds;
        if cuts.low_max < 0 {
            return invalid("risk_score_thresholds.low_max must be non-negative".to_string());
        }
        if cuts.low_max >= cuts.medium_max {
            return invalid(format!(
                "risk_score_thresholds.low_max ({}) must be below medium_max ({})",
                cuts.low_max, cuts.medium_max
            ));
        }
        if cuts.medium_max > 100 {
            return invalid(format!(
                "risk_score_thresholds.medium_max ({}) must not exceed 100",
                cuts.medium_max
            ));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> RemitComplianceResult<()> {
    Err(RemitComplianceError::InvalidRuleSet { reason })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_validate() {
        RuleSet::default().validate().unwrap();
    }

    #[test]
    fn test_country_tier_membership() {
        let rules = RuleSet::default();
        assert_eq!(rules.country_tier("Nigeria"), Some(RiskTier::High));
        assert_eq!(rules.country_tier("Vietnam"), Some(RiskTier::Medium));
        assert_eq!(rules.country_tier("Singapore"), Some(RiskTier::Low));
        assert_eq!(rules.country_tier("Atlantis"), None);
    }

    #[test]
    fn test_country_tier_is_case_sensitive() {
        let rules = RuleSet::default();
        assert_eq!(rules.country_tier("nigeria"), None);
    }

    #[test]
    fn test_purpose_tier_case_insensitive() {
        let rules = RuleSet::default();
        assert_eq!(rules.purpose_tier("Investment"), Some(RiskTier::High));
        assert_eq!(rules.purpose_tier("TRADE FINANCE"), Some(RiskTier::Medium));
        assert_eq!(rules.purpose_tier("  services "), Some(RiskTier::Low));
        assert_eq!(rules.purpose_tier("consulting"), None);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut rules = RuleSet::default();
        rules.purpose_risk_scores.medium = -1;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut rules = RuleSet::default();
        rules.amount_thresholds.moderate_threshold = dec!(-1);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let mut rules = RuleSet::default();
        rules.amount_penalties.structuring_bonus = -5;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_inverted_cut_points_rejected() {
        let mut rules = RuleSet::default();
        rules.risk_score_thresholds.low_max = 70;
        rules.risk_score_thresholds.medium_max = 30;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_equal_cut_points_rejected() {
        let mut rules = RuleSet::default();
        rules.risk_score_thresholds.low_max = 50;
        rules.risk_score_thresholds.medium_max = 50;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_medium_max_above_100_rejected() {
        let mut rules = RuleSet::default();
        rules.risk_score_thresholds.medium_max = 120;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let rules = RuleSet::default();
        let json = serde_json::to_string(&rules).unwrap();
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, back);
    }

    #[test]
    fn test_missing_key_rejected_at_deserialization() {
        let mut value = serde_json::to_value(RuleSet::default()).unwrap();
        value.as_object_mut().unwrap().remove("risk_score_thresholds");
        assert!(serde_json::from_value::<RuleSet>(value).is_err());
    }
}

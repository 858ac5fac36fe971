//! Advisory AI analysis attached to an assessment when an external provider
//! is available. Strictly best-effort: the deterministic rule-based fields
//! are never altered, and a provider failure never fails the review.

use serde::{Deserialize, Serialize};

use crate::review::Assessment;
use crate::types::Transaction;
use crate::RemitComplianceResult;

/// Provider confidence in its own analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// A provider-suggested score, advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAdjustment {
    pub suggested_score: i32,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsights {
    pub enhanced_rationale: String,
    pub additional_red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_adjustment: Option<SuggestedAdjustment>,
    pub confidence_level: Confidence,
}

/// Seam for the external analysis step. Implementations typically call a
/// language model; the engine depends only on this contract.
pub trait InsightProvider {
    fn analyze(
        &self,
        transaction: &Transaction,
        assessment: &Assessment,
    ) -> RemitComplianceResult<AiInsights>;
}

/// Attach provider insights to an assessment when the provider succeeds.
/// On any provider error the assessment is returned untouched.
pub fn enhance(
    mut assessment: Assessment,
    transaction: &Transaction,
    provider: &dyn InsightProvider,
) -> Assessment {
    if let Ok(insights) = provider.analyze(transaction, &assessment) {
        assessment.ai_insights = Some(insights);
    }
    assessment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemitComplianceError;
    use crate::review::review_transaction;
    use crate::ruleset::RuleSet;
    use crate::types::CustomerType;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    struct FixedProvider;

    impl InsightProvider for FixedProvider {
        fn analyze(
            &self,
            _transaction: &Transaction,
            _assessment: &Assessment,
        ) -> RemitComplianceResult<AiInsights> {
            Ok(AiInsights {
                enhanced_rationale: "Pattern consistent with trade settlement.".to_string(),
                additional_red_flags: vec!["Round-number amount".to_string()],
                recommendations: vec!["Request invoice copies".to_string()],
                risk_adjustment: None,
                confidence_level: Confidence::Medium,
            })
        }
    }

    struct FailingProvider;

    impl InsightProvider for FailingProvider {
        fn analyze(
            &self,
            _transaction: &Transaction,
            _assessment: &Assessment,
        ) -> RemitComplianceResult<AiInsights> {
            Err(RemitComplianceError::InsightProviderFailure(
                "upstream timeout".to_string(),
            ))
        }
    }

    fn sample() -> (Transaction, Assessment) {
        let tx = Transaction {
            amount_usd: dec!(18_000),
            origin_country: "Vietnam".to_string(),
            destination_country: "Singapore".to_string(),
            purpose: "trade finance".to_string(),
            customer_type: CustomerType::Medium,
            has_structuring_signals: false,
        };
        let assessment = review_transaction(&tx, &RuleSet::default()).unwrap();
        (tx, assessment)
    }

    #[test]
    fn test_enhance_attaches_insights() {
        let (tx, assessment) = sample();
        let enhanced = enhance(assessment, &tx, &FixedProvider);
        let insights = enhanced.ai_insights.unwrap();
        assert_eq!(insights.confidence_level, Confidence::Medium);
        assert_eq!(insights.additional_red_flags.len(), 1);
    }

    #[test]
    fn test_provider_failure_leaves_assessment_untouched() {
        let (tx, assessment) = sample();
        let before = assessment.clone();
        let after = enhance(assessment, &tx, &FailingProvider);
        assert_eq!(before, after);
        assert!(after.ai_insights.is_none());
    }

    #[test]
    fn test_review_with_insights_composes_best_effort() {
        let (tx, _) = sample();
        let rules = RuleSet::default();

        let enriched = crate::review::review_with_insights(&tx, &rules, &FixedProvider).unwrap();
        assert!(enriched.ai_insights.is_some());

        let degraded = crate::review::review_with_insights(&tx, &rules, &FailingProvider).unwrap();
        assert!(degraded.ai_insights.is_none());
    }

    #[test]
    fn test_enhance_never_touches_rule_based_fields() {
        let (tx, assessment) = sample();
        let before = assessment.clone();
        let after = enhance(assessment, &tx, &FixedProvider);
        assert_eq!(before.risk_score, after.risk_score);
        assert_eq!(before.risk_level, after.risk_level);
        assert_eq!(before.triggered_rules, after.triggered_rules);
        assert_eq!(before.rationale, after.rationale);
        assert_eq!(before.checklist_items, after.checklist_items);
    }
}

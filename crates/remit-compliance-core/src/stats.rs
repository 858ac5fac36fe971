use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::review::Assessment;
use crate::types::RiskLevel;

/// Count of assessments per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Summary statistics over a batch of assessments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentStatistics {
    pub total_assessments: usize,
    pub risk_breakdown: RiskBreakdown,
    /// Mean risk score, two decimal places. Zero for an empty batch.
    pub average_risk_score: Decimal,
}

/// Summarize a batch of assessments.
pub fn summarize(assessments: &[Assessment]) -> AssessmentStatistics {
    let mut breakdown = RiskBreakdown::default();
    let mut score_sum: i64 = 0;

    for assessment in assessments {
        match assessment.risk_level {
            RiskLevel::Low => breakdown.low += 1,
            RiskLevel::Medium => breakdown.medium += 1,
            RiskLevel::High => breakdown.high += 1,
        }
        score_sum += i64::from(assessment.risk_score);
    }

    let average_risk_score = if assessments.is_empty() {
        Decimal::ZERO
    } else {
        (Decimal::from(score_sum) / Decimal::from(assessments.len() as u64)).round_dp(2)
    };

    AssessmentStatistics {
        total_assessments: assessments.len(),
        risk_breakdown: breakdown,
        average_risk_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::review_transaction;
    use crate::ruleset::RuleSet;
    use crate::types::{CustomerType, Transaction};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn assess(amount: rust_decimal::Decimal, origin: &str, purpose: &str) -> Assessment {
        let tx = Transaction {
            amount_usd: amount,
            origin_country: origin.to_string(),
            destination_country: "United States".to_string(),
            purpose: purpose.to_string(),
            customer_type: CustomerType::Medium,
            has_structuring_signals: false,
        };
        review_transaction(&tx, &RuleSet::default()).unwrap()
    }

    #[test]
    fn test_empty_batch() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_assessments, 0);
        assert_eq!(stats.risk_breakdown, RiskBreakdown::default());
        assert_eq!(stats.average_risk_score, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_and_average() {
        let batch = vec![
            assess(dec!(1_000), "Singapore", "payroll"),   // 5 + 3 + 15 = 23, Low
            assess(dec!(18_000), "Vietnam", "trade finance"), // 63, Medium
            assess(dec!(35_000), "Nigeria", "gambling"),   // 35+28+15+40+40 = 100 clamped, High
        ];
        let stats = summarize(&batch);
        assert_eq!(stats.total_assessments, 3);
        assert_eq!(
            stats.risk_breakdown,
            RiskBreakdown {
                low: 1,
                medium: 1,
                high: 1
            }
        );
        // (23 + 63 + 100) / 3
        assert_eq!(stats.average_risk_score, dec!(62.00));
    }
}

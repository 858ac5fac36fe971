//! The per-transaction review pipeline: validate, classify, compose,
//! narrate. Pure function of (transaction, rule set); identical inputs
//! produce identical assessments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classifier;
use crate::composer;
use crate::error::RemitComplianceError;
use crate::insights::{self, AiInsights, InsightProvider};
use crate::narrative;
use crate::ruleset::RuleSet;
use crate::types::{RiskLevel, Transaction};
use crate::RemitComplianceResult;

/// Rule-based risk assessment of a single transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub triggered_rules: Vec<String>,
    pub rationale: String,
    pub checklist_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<AiInsights>,
}

fn validate(transaction: &Transaction) -> RemitComplianceResult<()> {
    if transaction.amount_usd < Decimal::ZERO {
        return Err(RemitComplianceError::InvalidInput {
            field: "amount_usd".to_string(),
            reason: "Amount must be non-negative".to_string(),
        });
    }
    if transaction.origin_country.trim().is_empty() {
        return Err(RemitComplianceError::InvalidInput {
            field: "origin_country".to_string(),
            reason: "Origin country must not be empty".to_string(),
        });
    }
    if transaction.destination_country.trim().is_empty() {
        return Err(RemitComplianceError::InvalidInput {
            field: "destination_country".to_string(),
            reason: "Destination country must not be empty".to_string(),
        });
    }
    if transaction.purpose.trim().is_empty() {
        return Err(RemitComplianceError::InvalidInput {
            field: "purpose".to_string(),
            reason: "Purpose must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Perform a compliance review of a transaction against the rule set.
pub fn review_transaction(
    transaction: &Transaction,
    rules: &RuleSet,
) -> RemitComplianceResult<Assessment> {
    validate(transaction)?;

    let classification = classifier::classify(transaction, rules);
    let risk_score = composer::compose_score(rules, &classification);
    let risk_level = composer::score_to_level(rules, risk_score);
    let rationale = narrative::build_rationale(transaction, &classification);
    let checklist_items =
        narrative::build_checklist(transaction, rules, &classification, risk_level);

    Ok(Assessment {
        risk_score,
        risk_level,
        triggered_rules: classification.triggered_rules,
        rationale,
        checklist_items,
        ai_insights: None,
    })
}

/// Review plus best-effort advisory enrichment. A provider failure degrades
/// to the plain rule-based assessment, never to an error.
pub fn review_with_insights(
    transaction: &Transaction,
    rules: &RuleSet,
    provider: &dyn InsightProvider,
) -> RemitComplianceResult<Assessment> {
    let assessment = review_transaction(transaction, rules)?;
    Ok(insights::enhance(assessment, transaction, provider))
}

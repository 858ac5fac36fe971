//! Human-readable rationale and compliance checklist generation.
//!
//! Deterministic functions of the transaction and its classification. The
//! amount clauses use fixed editorial breakpoints ($25,000 / $10,000) that
//! are deliberately independent of the configurable scoring thresholds.

use rust_decimal_macros::dec;

use crate::classifier::Classification;
use crate::ruleset::RuleSet;
use crate::types::{CustomerType, RiskLevel, RiskTier, Transaction};

/// Assemble the assessment rationale from fixed clauses.
pub fn build_rationale(transaction: &Transaction, classification: &Classification) -> String {
    let mut parts: Vec<String> = Vec::new();

    match classification.country_tier {
        RiskTier::High => parts.push(format!(
            "Origin country {} is on the high-risk list.",
            transaction.origin_country
        )),
        RiskTier::Medium => parts.push(format!(
            "Origin country {} is on the medium-risk list.",
            transaction.origin_country
        )),
        RiskTier::Low => {}
    }

    match classification.purpose_tier {
        RiskTier::High => parts.push(format!(
            "Transaction purpose '{}' is classified as high-risk.",
            transaction.purpose
        )),
        RiskTier::Medium => parts.push(format!(
            "Transaction purpose '{}' is classified as medium-risk.",
            transaction.purpose
        )),
        RiskTier::Low => {}
    }

    if transaction.amount_usd > dec!(25_000) {
        parts.push(format!(
            "Transaction amount (${}) exceeds $25,000.",
            transaction.amount_usd
        ));
    } else if transaction.amount_usd > dec!(10_000) {
        parts.push(format!(
            "Transaction amount (${}) exceeds $10,000.",
            transaction.amount_usd
        ));
    }

    if transaction.customer_type == CustomerType::High {
        parts.push("Customer classified as PEP/NGO profile (elevated risk).".to_string());
    }

    if transaction.has_structuring_signals {
        parts.push("Potential structuring behavior detected.".to_string());
    }

    if parts.is_empty() {
        "Transaction meets low-risk criteria.".to_string()
    } else {
        parts.join(" ")
    }
}

/// Build the compliance checklist for the assessed risk level.
pub fn build_checklist(
    transaction: &Transaction,
    rules: &RuleSet,
    classification: &Classification,
    risk_level: RiskLevel,
) -> Vec<String> {
    let mut checklist = vec![
        "Verify customer identity (KYC)".to_string(),
        "Confirm transaction purpose".to_string(),
        "Check sanctions lists (OFAC, UN, EU)".to_string(),
    ];

    match risk_level {
        RiskLevel::High => {
            checklist.push("Escalate to compliance officer for manual review".to_string());
            checklist.push("Verify source of funds".to_string());
            checklist.push("Perform enhanced due diligence (EDD)".to_string());
            checklist.push("Check beneficial ownership information".to_string());
            checklist.push("Document business rationale".to_string());
        }
        RiskLevel::Medium => {
            checklist.push("Perform simplified due diligence (SDD)".to_string());
            checklist.push("Verify destination country compliance".to_string());
            if transaction.amount_usd > dec!(10_000) {
                checklist.push("Document transaction rationale".to_string());
            }
        }
        RiskLevel::Low => {
            checklist.push("Standard AML checks sufficient".to_string());
        }
    }

    if !rules.low_risk_countries.contains(&transaction.origin_country) {
        checklist.push(format!(
            "Research sanctions and regulatory status of {}",
            transaction.origin_country
        ));
    }

    if classification.purpose_known && classification.purpose_tier == RiskTier::High {
        checklist.push(format!(
            "Verify legitimacy of {} activity",
            transaction.purpose
        ));
    }

    checklist
}

use serde::{Deserialize, Serialize};

use crate::ruleset::RuleSet;
use crate::types::{CustomerType, Money, RiskTier, Transaction};

// ---------------------------------------------------------------------------
// Output struct
// ---------------------------------------------------------------------------

/// Outcome of running one transaction through the rule taxonomy.
///
/// `country_known` / `purpose_known` distinguish genuine medium-tier
/// membership from the unknown-identifier fail-safe, which also defaults
/// to medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub country_tier: RiskTier,
    pub country_known: bool,
    pub purpose_tier: RiskTier,
    pub purpose_known: bool,
    pub customer_tier: RiskTier,
    pub amount_score: i32,
    pub structuring_score: i32,
    pub triggered_rules: Vec<String>,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a transaction against the rule set.
///
/// Pure: each call builds fresh state and returns it. Triggered rules are
/// recorded in evaluation order: country, purpose, customer, amount,
/// structuring.
pub fn classify(transaction: &Transaction, rules: &RuleSet) -> Classification {
    let mut triggered = Vec::new();

    let (country_tier, country_known) =
        assess_country(&transaction.origin_country, rules, &mut triggered);
    let (purpose_tier, purpose_known) =
        assess_purpose(&transaction.purpose, rules, &mut triggered);
    let customer_tier = assess_customer(transaction.customer_type, &mut triggered);
    let amount_score = assess_amount(
        transaction.amount_usd,
        &transaction.origin_country,
        rules,
        &mut triggered,
    );
    let structuring_score =
        assess_structuring(transaction.has_structuring_signals, rules, &mut triggered);

    Classification {
        country_tier,
        country_known,
        purpose_tier,
        purpose_known,
        customer_tier,
        amount_score,
        structuring_score,
        triggered_rules: triggered,
    }
}

fn assess_country(country: &str, rules: &RuleSet, triggered: &mut Vec<String>) -> (RiskTier, bool) {
    match rules.country_tier(country) {
        Some(RiskTier::High) => {
            triggered.push(format!(
                "Origin country '{}' classified as high-risk",
                country
            ));
            (RiskTier::High, true)
        }
        Some(RiskTier::Medium) => {
            triggered.push(format!(
                "Origin country '{}' classified as medium-risk",
                country
            ));
            (RiskTier::Medium, true)
        }
        Some(RiskTier::Low) => (RiskTier::Low, true),
        None => {
            // Fail-safe: unknown jurisdictions score as medium, never
            // silently as low, and the notice is always recorded.
            triggered.push(format!(
                "Origin country '{}' not in known risk database",
                country
            ));
            (RiskTier::Medium, false)
        }
    }
}

fn assess_purpose(purpose: &str, rules: &RuleSet, triggered: &mut Vec<String>) -> (RiskTier, bool) {
    match rules.purpose_tier(purpose) {
        Some(RiskTier::High) => {
            triggered.push(format!(
                "Transaction purpose '{}' classified as high-risk",
                purpose
            ));
            (RiskTier::High, true)
        }
        Some(RiskTier::Medium) => {
            triggered.push(format!(
                "Transaction purpose '{}' classified as medium-risk",
                purpose
            ));
            (RiskTier::Medium, true)
        }
        Some(RiskTier::Low) => (RiskTier::Low, true),
        None => {
            triggered.push(format!(
                "Transaction purpose '{}' not in known database",
                purpose
            ));
            (RiskTier::Medium, false)
        }
    }
}

fn assess_customer(customer_type: CustomerType, triggered: &mut Vec<String>) -> RiskTier {
    if customer_type == CustomerType::High {
        triggered.push("Customer classified as PEP/NGO (high-risk profile)".to_string());
    }
    customer_type.tier()
}

fn assess_amount(
    amount: Money,
    origin_country: &str,
    rules: &RuleSet,
    triggered: &mut Vec<String>,
) -> i32 {
    let mut score = 0;
    let thresholds = &rules.amount_thresholds;
    let penalties = &rules.amount_penalties;

    // Stacked escalation for large transfers out of flagged jurisdictions.
    // This and the general threshold below can both fire on one transfer.
    if amount > thresholds.high_risk_origin_threshold
        && rules.high_risk_countries.contains(origin_country)
    {
        triggered.push(format!(
            "Amount ${} exceeds ${} from high-risk country",
            amount, thresholds.high_risk_origin_threshold
        ));
        score += penalties.stacked_origin;
    }

    if amount > thresholds.general_high_threshold {
        triggered.push(format!(
            "Amount ${} exceeds ${} threshold",
            amount, thresholds.general_high_threshold
        ));
        score += penalties.general_high;
    } else if amount > thresholds.moderate_threshold {
        triggered.push(format!(
            "Amount ${} is above moderate threshold (${})",
            amount, thresholds.moderate_threshold
        ));
        score += penalties.moderate;
    }

    score
}

fn assess_structuring(has_signals: bool, rules: &RuleSet, triggered: &mut Vec<String>) -> i32 {
    if has_signals {
        triggered.push("Structuring signals detected (multiple small transactions)".to_string());
        rules.amount_penalties.structuring_bonus
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

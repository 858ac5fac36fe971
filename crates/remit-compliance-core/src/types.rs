use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Risk tier of a single dimension (country, purpose, or customer profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Overall risk level of an assessed transfer.
///
/// Derived solely from the composed score and the rule set's cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Customer risk profile: Low = freelancer, Medium = SMB / corporate,
/// High = PEP / NGO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Low,
    Medium,
    High,
}

impl CustomerType {
    /// Map an upstream counterparty label onto a risk profile.
    /// Unrecognized labels fall back to Medium.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "freelancer" => CustomerType::Low,
            "smb" | "corporate" => CustomerType::Medium,
            "ngo" | "pep" => CustomerType::High,
            _ => CustomerType::Medium,
        }
    }

    pub fn tier(&self) -> RiskTier {
        match self {
            CustomerType::Low => RiskTier::Low,
            CustomerType::Medium => RiskTier::Medium,
            CustomerType::High => RiskTier::High,
        }
    }
}

/// Transaction data for compliance review. Amounts are currency-normalized
/// to USD before they reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount_usd: Money,
    pub origin_country: String,
    pub destination_country: String,
    pub purpose: String,
    pub customer_type: CustomerType,
    #[serde(default)]
    pub has_structuring_signals: bool,
}

/// Any non-empty history signal reported upstream counts as a structuring
/// signal.
pub fn has_structuring_signals(history_signals: &str) -> bool {
    !history_signals.trim().is_empty()
}

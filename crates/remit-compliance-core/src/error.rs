use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemitComplianceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid rule set: {reason}")]
    InvalidRuleSet { reason: String },

    #[error("Insight provider failed: {0}")]
    InsightProviderFailure(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RemitComplianceError {
    fn from(e: serde_json::Error) -> Self {
        RemitComplianceError::SerializationError(e.to_string())
    }
}

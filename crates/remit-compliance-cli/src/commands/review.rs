use clap::Args;
use serde_json::Value;

use remit_compliance_core::review;
use remit_compliance_core::types::Transaction;

use crate::input;

/// Arguments for transaction review
#[derive(Args)]
pub struct ReviewArgs {
    /// Path to transaction JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a rule set JSON file overriding the built-in defaults
    #[arg(long)]
    pub rules: Option<String>,
}

pub fn run_review(args: ReviewArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let transaction: Transaction = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <transaction.json> or stdin required for review".into());
    };

    let manager = super::load_manager(args.rules.as_deref())?;
    let assessment = review::review_transaction(&transaction, &manager.get())?;
    Ok(serde_json::to_value(assessment)?)
}

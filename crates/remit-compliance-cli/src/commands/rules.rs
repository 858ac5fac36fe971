use clap::Args;
use serde_json::{json, Value};

use remit_compliance_core::ruleset::RuleSet;

use crate::input;

/// Arguments for rule set validation
#[derive(Args)]
pub struct CheckRulesArgs {
    /// Path to the rule set JSON file to validate
    #[arg(long)]
    pub input: String,
}

pub fn run_default_rules() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(RuleSet::default())?)
}

pub fn run_check_rules(args: CheckRulesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rules: RuleSet = input::file::read_json(&args.input)?;
    rules.validate()?;
    Ok(json!({ "valid": true, "path": args.input }))
}

use clap::Args;
use serde_json::Value;

use remit_compliance_core::review::Assessment;
use remit_compliance_core::stats;

use crate::input;

/// Arguments for batch statistics
#[derive(Args)]
pub struct StatsArgs {
    /// Path to a JSON array of stored assessments
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_stats(args: StatsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let assessments: Vec<Assessment> = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <assessments.json> or stdin required for stats".into());
    };

    let summary = stats::summarize(&assessments);
    Ok(serde_json::to_value(summary)?)
}

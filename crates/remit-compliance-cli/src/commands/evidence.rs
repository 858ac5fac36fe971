use clap::Args;
use serde_json::Value;

use remit_compliance_core::evidence::{self, DocumentJudgment};
use remit_compliance_core::review::Assessment;

use crate::input;

/// Arguments for document-evidence adjustment
#[derive(Args)]
pub struct AdjustArgs {
    /// Path to the stored assessment JSON
    #[arg(long)]
    pub assessment: String,

    /// Path to the document judgment array JSON
    #[arg(long)]
    pub judgments: String,

    /// Path to a rule set JSON file overriding the built-in defaults
    #[arg(long)]
    pub rules: Option<String>,
}

pub fn run_adjust(args: AdjustArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let assessment: Assessment = input::file::read_json(&args.assessment)?;
    let judgments: Vec<DocumentJudgment> = input::file::read_json(&args.judgments)?;

    let manager = super::load_manager(args.rules.as_deref())?;
    match evidence::adjust_assessment(&assessment, &judgments, &manager.get()) {
        Some(adjusted) => Ok(serde_json::to_value(adjusted)?),
        None => Err("no usable document judgments; the original assessment stands".into()),
    }
}

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::evidence::AdjustArgs;
use commands::review::ReviewArgs;
use commands::rules::CheckRulesArgs;
use commands::stats::StatsArgs;

/// AML/KYC compliance review for cross-border money transfers
#[derive(Parser)]
#[command(
    name = "rcr",
    version,
    about = "AML/KYC compliance review for cross-border money transfers",
    long_about = "Reviews money-transfer transactions against a configurable AML/KYC \
                  rule set, producing a risk score, risk level, triggered rules, \
                  rationale, and a due-diligence checklist. Document-evidence \
                  judgments can be folded into an existing assessment."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a transaction against the compliance rule set
    Review(ReviewArgs),
    /// Apply document-evidence judgments to an existing assessment
    Adjust(AdjustArgs),
    /// Print the built-in default rule set
    DefaultRules,
    /// Validate a rule set file without installing it
    CheckRules(CheckRulesArgs),
    /// Summarize a batch of stored assessments
    Stats(StatsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Review(args) => commands::review::run_review(args),
        Commands::Adjust(args) => commands::evidence::run_adjust(args),
        Commands::DefaultRules => commands::rules::run_default_rules(),
        Commands::CheckRules(args) => commands::rules::run_check_rules(args),
        Commands::Stats(args) => commands::stats::run_stats(args),
        Commands::Version => {
            println!("rcr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

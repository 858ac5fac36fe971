pub mod evidence;
pub mod review;
pub mod rules;
pub mod stats;

use remit_compliance_core::manager::RuleSetManager;
use remit_compliance_core::ruleset::RuleSet;

use crate::input;

/// Build a rules manager for this invocation: defaults, optionally replaced
/// by a rules file. The replace path validates the file's contents.
pub(crate) fn load_manager(
    rules_path: Option<&str>,
) -> Result<RuleSetManager, Box<dyn std::error::Error>> {
    let manager = RuleSetManager::new();
    if let Some(path) = rules_path {
        let rules: RuleSet = input::file::read_json(path)?;
        manager.replace(rules)?;
    }
    Ok(manager)
}

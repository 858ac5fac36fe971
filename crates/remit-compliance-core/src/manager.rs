//! Process-wide owner of the live rule set.
//!
//! Readers take a consistent snapshot via `get`; writers validate first and
//! then install the new rules in a single swap. An in-flight assessment can
//! never observe a half-updated configuration.

use std::sync::{Arc, RwLock};

use crate::ruleset::RuleSet;
use crate::RemitComplianceResult;

pub struct RuleSetManager {
    live: RwLock<Arc<RuleSet>>,
}

impl RuleSetManager {
    /// Start at the hard-coded default rules.
    pub fn new() -> Self {
        RuleSetManager {
            live: RwLock::new(Arc::new(RuleSet::default())),
        }
    }

    /// Start at a caller-supplied rule set, which must validate.
    pub fn with_rules(rules: RuleSet) -> RemitComplianceResult<Self> {
        rules.validate()?;
        Ok(RuleSetManager {
            live: RwLock::new(Arc::new(rules)),
        })
    }

    /// Snapshot of the current rules. The Arc is cloned under the read
    /// guard, so the caller keeps a stable view across a concurrent replace.
    pub fn get(&self) -> Arc<RuleSet> {
        match self.live.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Validate and atomically install a new rule set. On validation failure
    /// the live rules are left untouched and the error is returned.
    pub fn replace(&self, rules: RuleSet) -> RemitComplianceResult<()> {
        rules.validate()?;
        self.install(Arc::new(rules));
        Ok(())
    }

    /// Install the hard-coded defaults. Idempotent.
    pub fn reset(&self) {
        self.install(Arc::new(RuleSet::default()));
    }

    fn install(&self, next: Arc<RuleSet>) {
        match self.live.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

impl Default for RuleSetManager {
    fn default() -> Self {
        RuleSetManager::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_starts_at_defaults() {
        let manager = RuleSetManager::new();
        assert_eq!(*manager.get(), RuleSet::default());
    }

    #[test]
    fn test_replace_installs_valid_rules() {
        let manager = RuleSetManager::new();
        let mut rules = RuleSet::default();
        rules.risk_score_thresholds.low_max = 20;
        manager.replace(rules.clone()).unwrap();
        assert_eq!(*manager.get(), rules);
    }

    #[test]
    fn test_replace_rejects_invalid_and_keeps_prior() {
        let manager = RuleSetManager::new();
        let mut good = RuleSet::default();
        good.risk_score_thresholds.medium_max = 80;
        manager.replace(good.clone()).unwrap();

        let mut bad = RuleSet::default();
        bad.risk_score_thresholds.low_max = 90;
        bad.risk_score_thresholds.medium_max = 10;
        assert!(manager.replace(bad).is_err());

        assert_eq!(*manager.get(), good);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let manager = RuleSetManager::new();
        let mut rules = RuleSet::default();
        rules.risk_score_thresholds.low_max = 10;
        manager.replace(rules).unwrap();

        manager.reset();
        let first = manager.get();
        manager.reset();
        let second = manager.get();
        assert_eq!(*first, *second);
        assert_eq!(*second, RuleSet::default());
    }

    #[test]
    fn test_with_rules_validates() {
        let mut bad = RuleSet::default();
        bad.country_risk_scores.high = -1;
        assert!(RuleSetManager::with_rules(bad).is_err());
    }

    #[test]
    fn test_snapshot_is_stable_across_replace() {
        let manager = RuleSetManager::new();
        let snapshot = manager.get();

        let mut rules = RuleSet::default();
        rules.risk_score_thresholds.low_max = 5;
        manager.replace(rules).unwrap();

        // The old snapshot is unchanged; only fresh reads see the new rules.
        assert_eq!(*snapshot, RuleSet::default());
        assert_eq!(manager.get().risk_score_thresholds.low_max, 5);
    }

    #[test]
    fn test_concurrent_readers_see_whole_rule_sets() {
        use std::thread;

        let manager = Arc::new(RuleSetManager::new());

        let mut variant = RuleSet::default();
        variant.risk_score_thresholds.low_max = 25;
        variant.risk_score_thresholds.medium_max = 60;

        let writer = {
            let manager = Arc::clone(&manager);
            let variant = variant.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    if i % 2 == 0 {
                        manager.replace(variant.clone()).unwrap();
                    } else {
                        manager.reset();
                    }
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let manager = Arc::clone(&manager);
                let variant = variant.clone();
                thread::spawn(move || {
                    for _ in 0..500 {
                        let rules = manager.get();
                        // Every observed value is exactly one of the two
                        // complete rule sets, never a mixture.
                        assert!(*rules == RuleSet::default() || *rules == variant);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}

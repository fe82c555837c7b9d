//! Reconciling an on-disk lang file with the bundled default.

use crate::RosettaError;
use foundation_platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How keys that differ between the disk file and the bundled default are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReconcilePolicy {
    /// Drop keys the default no longer has, add the ones it gained.
    Strict,
    /// Keep unknown keys with a warning, add missing ones.
    #[default]
    Permissive,
}

impl ReconcilePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReconcilePolicy::Strict => "strict",
            ReconcilePolicy::Permissive => "permissive",
        }
    }

    /// Update `entries` according to `diff`, logging through `platform`.
    ///
    /// Returns the report and whether the entries need to be written back.
    pub(crate) fn apply(
        self,
        entries: &mut BTreeMap<String, String>,
        defaults: &BTreeMap<String, String>,
        diff: KeyDiff,
        file_name: &str,
        platform: &dyn Platform,
    ) -> ReconcileReport {
        let KeyDiff { stale, missing } = diff;
        let mut report = ReconcileReport::default();

        match self {
            ReconcilePolicy::Strict => {
                if stale.is_empty() && missing.is_empty() {
                    return report;
                }

                platform.info(&format!("Upgrading {} file...", file_name));
                platform.info(&format!("New keys: {}", missing.join(", ")));
                platform.info(&format!("Removed keys: {}", stale.join(", ")));

                for key in &stale {
                    entries.remove(key);
                }
                add_missing(entries, defaults, &missing);

                report.removed = stale;
                report.added = missing;
                report.persisted = true;
            }
            ReconcilePolicy::Permissive => {
                if !stale.is_empty() {
                    platform.warn(&format!(
                        "Unknown keys found in {} file: {}\nPlease remove these keys!",
                        file_name,
                        stale.join(", ")
                    ));
                }

                if !missing.is_empty() {
                    platform.warn(&format!(
                        "Adding new keys to {} file: {}",
                        file_name,
                        missing.join(", ")
                    ));
                    add_missing(entries, defaults, &missing);
                    report.persisted = true;
                }

                report.unknown = stale;
                report.added = missing;
            }
        }

        report
    }
}

fn add_missing(
    entries: &mut BTreeMap<String, String>,
    defaults: &BTreeMap<String, String>,
    missing: &[String],
) {
    for key in missing {
        if let Some(value) = defaults.get(key) {
            entries.insert(key.clone(), value.clone());
        }
    }
}

impl fmt::Display for ReconcilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReconcilePolicy {
    type Err = RosettaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ReconcilePolicy::Strict),
            "permissive" => Ok(ReconcilePolicy::Permissive),
            other => Err(RosettaError::InvalidPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for ReconcilePolicy {
    type Error = RosettaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Keys that differ between the loaded entries and the bundled default. Both lists are sorted.
///
/// The loaded side is the store after the disk file was merged in, so keys
/// left over from an earlier pass count as stale too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct KeyDiff {
    /// Loaded, absent from the default.
    pub stale: Vec<String>,
    /// In the default, not loaded.
    pub missing: Vec<String>,
}

impl KeyDiff {
    pub fn between(loaded: &BTreeMap<String, String>, defaults: &BTreeMap<String, String>) -> Self {
        let stale = loaded
            .keys()
            .filter(|key| !defaults.contains_key(*key))
            .cloned()
            .collect();
        let missing = defaults
            .keys()
            .filter(|key| !loaded.contains_key(*key))
            .cloned()
            .collect();

        Self { stale, missing }
    }
}

/// Outcome of a single reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// The disk file did not exist and was copied from the bundled default.
    pub created: bool,
    /// Keys added from the default.
    pub added: Vec<String>,
    /// Keys dropped because the default no longer has them (strict only).
    pub removed: Vec<String>,
    /// Keys kept despite being absent from the default (permissive only).
    pub unknown: Vec<String>,
    /// The disk file was rewritten.
    pub persisted: bool,
}

impl ReconcileReport {
    /// Nothing was created, added or removed.
    pub fn is_unchanged(&self) -> bool {
        !self.created && self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation_testing::MockPlatform;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_key_diff_is_sorted() {
        let disk = map(&[("z", "1"), ("a", "1"), ("m", "1")]);
        let defaults = map(&[("a", "1"), ("y", "1"), ("b", "1")]);

        let diff = KeyDiff::between(&disk, &defaults);
        assert_eq!(diff.stale, vec!["m", "z"]);
        assert_eq!(diff.missing, vec!["b", "y"]);
    }

    #[test]
    fn test_strict_apply() {
        let platform = MockPlatform::new();
        let defaults = map(&[("a", "Hello"), ("b", "World")]);
        let mut entries = map(&[("a", "Hi"), ("c", "Extra")]);
        let diff = KeyDiff::between(&entries, &defaults);

        let report =
            ReconcilePolicy::Strict.apply(&mut entries, &defaults, diff, "lang.yml", &platform);

        assert_eq!(entries, map(&[("a", "Hi"), ("b", "World")]));
        assert_eq!(report.added, vec!["b"]);
        assert_eq!(report.removed, vec!["c"]);
        assert!(report.persisted);
        assert_eq!(
            platform.infos(),
            vec!["Upgrading lang.yml file...", "New keys: b", "Removed keys: c"]
        );
        assert!(platform.warnings().is_empty());
    }

    #[test]
    fn test_permissive_apply() {
        let platform = MockPlatform::new();
        let defaults = map(&[("a", "Hello"), ("b", "World")]);
        let mut entries = map(&[("a", "Hi"), ("c", "Extra")]);
        let diff = KeyDiff::between(&entries, &defaults);

        let report = ReconcilePolicy::Permissive.apply(
            &mut entries,
            &defaults,
            diff,
            "lang.yml",
            &platform,
        );

        assert_eq!(entries, map(&[("a", "Hi"), ("b", "World"), ("c", "Extra")]));
        assert_eq!(report.unknown, vec!["c"]);
        assert!(report.removed.is_empty());
        assert!(report.persisted);
        assert_eq!(
            platform.warnings(),
            vec![
                "Unknown keys found in lang.yml file: c\nPlease remove these keys!",
                "Adding new keys to lang.yml file: b",
            ]
        );
    }

    #[test]
    fn test_permissive_stale_only_does_not_persist() {
        let platform = MockPlatform::new();
        let defaults = map(&[("a", "Hello")]);
        let mut entries = map(&[("a", "Hi"), ("c", "Extra")]);
        let diff = KeyDiff::between(&entries, &defaults);

        let report = ReconcilePolicy::Permissive.apply(
            &mut entries,
            &defaults,
            diff,
            "lang.yml",
            &platform,
        );

        assert!(!report.persisted);
        assert!(report.is_unchanged());
        assert_eq!(platform.warnings().len(), 1);
    }

    #[test]
    fn test_no_diff_is_silent() {
        let platform = MockPlatform::new();
        let defaults = map(&[("a", "Hello")]);
        let mut entries = map(&[("a", "Hi")]);

        for policy in [ReconcilePolicy::Strict, ReconcilePolicy::Permissive] {
            let diff = KeyDiff::between(&entries, &defaults);
            let report = policy.apply(&mut entries, &defaults, diff, "lang.yml", &platform);
            assert_eq!(report, ReconcileReport::default());
        }
        assert_eq!(platform.call_count(), 0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Strict".parse::<ReconcilePolicy>().unwrap(), ReconcilePolicy::Strict);
        assert_eq!(
            "permissive".parse::<ReconcilePolicy>().unwrap(),
            ReconcilePolicy::Permissive
        );
        assert!("lenient".parse::<ReconcilePolicy>().is_err());
        assert_eq!(ReconcilePolicy::default(), ReconcilePolicy::Permissive);
    }

    #[test]
    fn test_policy_deserialize_ignores_case() {
        let policy: ReconcilePolicy = serde_yaml::from_str("Strict").unwrap();
        assert_eq!(policy, ReconcilePolicy::Strict);
        let policy: ReconcilePolicy = serde_json::from_str(r#"" PERMISSIVE""#).unwrap();
        assert_eq!(policy, ReconcilePolicy::Permissive);
        assert!(serde_yaml::from_str::<ReconcilePolicy>("lenient").is_err());
    }
}

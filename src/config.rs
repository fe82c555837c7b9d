//! Foundation's own configuration.

use foundation_config::{ConfigValidator, Validate};
use foundation_rosetta::{MessageType, PrefixStyles, ReconcilePolicy};
use serde::{Deserialize, Serialize};

/// Name of the config file in Foundation's data directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Prefix for environment variables overriding `config.yml`,
/// e.g. `FOUNDATION_RECONCILE_POLICY=strict`.
pub const ENV_PREFIX: &str = "FOUNDATION";

/// Settings global to every plugin built on Foundation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundationConfig {
    /// Policy given to lang stores created through [`crate::Foundation::lang`].
    pub reconcile_policy: ReconcilePolicy,
    /// Colours of the `prefix` tag.
    pub prefix: PrefixStyles,
}

impl Validate for FoundationConfig {
    fn validate(&self) -> foundation_config::Result<()> {
        for message_type in MessageType::ALL {
            ConfigValidator::not_empty(
                self.prefix.color(message_type),
                &format!("prefix.{}", message_type),
            )?;
        }
        ConfigValidator::not_empty(&self.prefix.separator, "prefix.separator")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation_config::ConfigError;

    #[test]
    fn test_default_is_valid() {
        assert!(FoundationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_colour_is_invalid() {
        let config = FoundationConfig {
            prefix: PrefixStyles::default().with_color(MessageType::Warning, ""),
            ..FoundationConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "prefix.warning"));
    }

    #[test]
    fn test_partial_yaml() {
        let config: FoundationConfig = serde_yaml::from_str("reconcile_policy: strict\n").unwrap();
        assert_eq!(config.reconcile_policy, ReconcilePolicy::Strict);
        assert_eq!(config.prefix, PrefixStyles::default());
    }

    #[test]
    fn test_policy_name_is_case_insensitive() {
        let config: FoundationConfig = serde_yaml::from_str("reconcile_policy: Strict\n").unwrap();
        assert_eq!(config.reconcile_policy, ReconcilePolicy::Strict);
    }
}

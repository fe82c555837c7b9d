//! Configuration loading for Foundation.
//!
//! Configuration is a flat map of top-level keys to JSON values. Files are
//! loaded first (JSON, TOML, YAML or `.env` syntax, detected from the
//! extension) and `PREFIX_*` environment variables are layered on top.
//!
//! ```no_run
//! use foundation_config::ConfigManager;
//!
//! # fn main() -> foundation_config::Result<()> {
//! let config = ConfigManager::with_prefix("FOUNDATION");
//! config.load_file("plugins/Foundation/config.yml")?;
//! config.load_env();
//!
//! let policy: String = config.get_or("reconcile_policy", "permissive".to_string());
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Layered configuration store
#[derive(Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<BTreeMap<String, Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose environment overrides use `prefix`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            config: Arc::default(),
            env_prefix: Some(prefix.into()),
        }
    }

    /// Layer environment variables over the current values.
    ///
    /// Environment values are strings, so only scalar keys can be overridden
    /// this way.
    pub fn load_env(&self) {
        let env_vars = EnvLoader::new(self.env_prefix.clone()).load();

        let mut config = self.config.write();
        for (key, value) in env_vars {
            config.insert(key, Value::String(value));
        }
    }

    /// Load a configuration file, detecting its format from the extension
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = ConfigLoader::auto(path)?.load_file(path)?;
        self.load_value(data);
        Ok(())
    }

    /// Merge the top-level entries of an already parsed object
    pub fn load_value(&self, data: Value) {
        if let Value::Object(map) = data {
            let mut config = self.config.write();
            config.extend(map);
        }
    }

    /// Set a configuration value
    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        self.config.write().insert(key.to_string(), json_value);
        Ok(())
    }

    /// Get a configuration value
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let config = self.config.read();

        let value = config
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value.clone())
            .map_err(|e| ConfigError::DeserializationError(format!("{}: {}", key, e)))
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.config.read().contains_key(key)
    }

    /// All configured keys, sorted
    pub fn keys(&self) -> Vec<String> {
        self.config.read().keys().cloned().collect()
    }

    /// Copy every entry of `other` over this manager's entries
    pub fn merge(&self, other: &ConfigManager) {
        let other_config = other.config.read().clone();
        self.config.write().extend(other_config);
    }

    /// Deserialize the whole configuration into `T` and validate it
    pub fn load_validated<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        let json_value = Value::Object(
            self.config
                .read()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );

        let validated: T = serde_json::from_value(json_value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        validated.validate()?;

        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_set_and_get() {
        let manager = ConfigManager::new();
        manager.set("reconcile_policy", "strict").unwrap();

        let value: String = manager.get("reconcile_policy").unwrap();
        assert_eq!(value, "strict");
    }

    #[test]
    fn test_get_missing_key() {
        let manager = ConfigManager::new();
        assert!(matches!(
            manager.get::<String>("missing"),
            Err(ConfigError::KeyNotFound(_))
        ));

        let value: String = manager.get_or("missing", "default".to_string());
        assert_eq!(value, "default");
    }

    #[test]
    fn test_load_value_overrides_existing() {
        let manager = ConfigManager::new();
        manager.set("a", 1).unwrap();
        manager.load_value(serde_json::json!({"a": 2, "b": 3}));

        assert_eq!(manager.get::<i64>("a").unwrap(), 2);
        assert_eq!(manager.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_merge() {
        let base = ConfigManager::new();
        base.set("a", "base").unwrap();

        let overlay = ConfigManager::new();
        overlay.set("a", "overlay").unwrap();

        base.merge(&overlay);
        assert_eq!(base.get::<String>("a").unwrap(), "overlay");
    }

    #[derive(Debug, Deserialize)]
    struct Settings {
        name: String,
    }

    impl Validate for Settings {
        fn validate(&self) -> Result<()> {
            ConfigValidator::not_empty(&self.name, "name")
        }
    }

    #[test]
    fn test_load_validated() {
        let manager = ConfigManager::new();
        manager.set("name", "Foundation").unwrap();
        let settings: Settings = manager.load_validated().unwrap();
        assert_eq!(settings.name, "Foundation");

        manager.set("name", "").unwrap();
        assert!(matches!(
            manager.load_validated::<Settings>(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}

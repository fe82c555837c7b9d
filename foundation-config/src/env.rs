// Environment variable overrides

use std::collections::HashMap;
use std::env;

/// Collects `PREFIX_*` environment variables as configuration overrides.
///
/// `FOUNDATION_RECONCILE_POLICY=strict` becomes the key `reconcile_policy`.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load every matching variable, keyed by its lower-cased name without the prefix.
    pub fn load(&self) -> HashMap<String, String> {
        self.collect(env::vars())
    }

    fn collect(&self, vars: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
        let mut config = HashMap::new();

        for (key, value) in vars {
            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(rest) if rest.starts_with('_') => rest.trim_start_matches('_').to_string(),
                    _ => continue,
                },
                None => key,
            };
            if !key.is_empty() {
                config.insert(key.to_lowercase(), value);
            }
        }

        config
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_with_prefix() {
        let loader = EnvLoader::new(Some("FOUNDATION".to_string()));
        let config = loader.collect(vars(&[
            ("FOUNDATION_RECONCILE_POLICY", "strict"),
            ("FOUNDATIONAL", "ignored"),
            ("PATH", "/usr/bin"),
        ]));

        assert_eq!(config.len(), 1);
        assert_eq!(config.get("reconcile_policy"), Some(&"strict".to_string()));
    }

    #[test]
    fn test_collect_without_prefix() {
        let loader = EnvLoader::default();
        let config = loader.collect(vars(&[("HOME", "/root")]));
        assert_eq!(config.get("home"), Some(&"/root".to_string()));
    }
}

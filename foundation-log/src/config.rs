use crate::{Format, Level};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);
static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG.store(config.debug, Ordering::SeqCst);
    LEVEL.store(config.level as u8, Ordering::SeqCst);
    config
});

/// Output settings, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub color: bool,
    pub timestamps: bool,
    /// Print the target (plugin or module name) of each record.
    pub show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Pretty,
            color: false,
            timestamps: true,
            show_target: true,
        }
    }
}

impl LogConfig {
    /// Read `FOUNDATION_DEBUG`, `FOUNDATION_LOG_LEVEL`, `FOUNDATION_LOG_FORMAT`,
    /// `FOUNDATION_LOG_COLOR`, `FOUNDATION_LOG_TIMESTAMPS` and `FOUNDATION_LOG_MODULE`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset or unparsable values keep their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| {
            var(name).map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        };
        let defaults = Self::default();

        let debug = flag("FOUNDATION_DEBUG").unwrap_or(defaults.debug);
        let level = var("FOUNDATION_LOG_LEVEL")
            .and_then(|v| v.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        Self {
            debug,
            level,
            format: var("FOUNDATION_LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.format),
            color: flag("FOUNDATION_LOG_COLOR")
                .unwrap_or_else(|| var("NO_COLOR").is_none() && var("TERM").is_some()),
            timestamps: flag("FOUNDATION_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            show_target: flag("FOUNDATION_LOG_MODULE").unwrap_or(defaults.show_target),
        }
    }
}

/// Read the environment now rather than on the first record.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// The global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG.load(Ordering::Relaxed)
}

/// Whether records at `level` pass the current threshold.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LEVEL.load(Ordering::Relaxed)
}

/// Debug records also pass when debug mode is on, whatever the level.
#[inline]
pub fn enabled(level: Level) -> bool {
    is_level_enabled(level) || (level == Level::Debug && is_debug_enabled())
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

pub fn set_level(level: Level) {
    init();
    LEVEL.store(level as u8, Ordering::SeqCst);
}

pub fn set_debug(enabled: bool) {
    init();
    DEBUG.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        LEVEL.store(Level::Debug as u8, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> LogConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from(&[]);
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.format, Format::Pretty);
        assert!(!config.debug);
        assert!(!config.color);
    }

    #[test]
    fn test_debug_lowers_level() {
        let config = from(&[("FOUNDATION_DEBUG", "true")]);
        assert!(config.debug);
        assert_eq!(config.level, Level::Debug);

        let config = from(&[("FOUNDATION_DEBUG", "1"), ("FOUNDATION_LOG_LEVEL", "warn")]);
        assert_eq!(config.level, Level::Warn);
    }

    #[test]
    fn test_format_and_flags() {
        let config = from(&[
            ("FOUNDATION_LOG_FORMAT", "compact"),
            ("FOUNDATION_LOG_TIMESTAMPS", "0"),
            ("FOUNDATION_LOG_MODULE", "false"),
            ("TERM", "xterm"),
        ]);
        assert_eq!(config.format, Format::Compact);
        assert!(!config.timestamps);
        assert!(!config.show_target);
        assert!(config.color);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = from(&[("FOUNDATION_LOG_LEVEL", "loud"), ("FOUNDATION_LOG_FORMAT", "xml")]);
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.format, Format::Pretty);
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!is_level_enabled(Level::Off));
        assert!(!enabled(Level::Off));
    }
}

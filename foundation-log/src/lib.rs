//! Foundation Logging
//!
//! Logging shared by Foundation and the plugins built on top of it,
//! controlled through `FOUNDATION_*` environment variables.
//!
//! Records go to the `log` facade when the host has installed a logger, and
//! to stderr otherwise.
//!
//! # Usage
//!
//! ```rust
//! use foundation_log::{debug, info, warn};
//!
//! info!("Loaded {} lang entries", 42);
//! warn!(target: "rosetta", "Unknown keys found");
//! debug!("Only shown with FOUNDATION_DEBUG=1");
//!
//! let logger = foundation_log::Logger::new("MyPlugin");
//! logger.info("Enabled");
//! ```
//!
//! # Environment Variables
//!
//! - `FOUNDATION_DEBUG=1` - Enable debug logging
//! - `FOUNDATION_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `FOUNDATION_LOG_FORMAT=pretty|compact|json` - Set output format
//! - `FOUNDATION_LOG_COLOR=1|0` - Enable/disable colors
//! - `FOUNDATION_LOG_TIMESTAMPS=1|0`, `FOUNDATION_LOG_MODULE=1|0` - Toggle record fields

mod config;
mod level;
mod logger;
mod output;

pub use config::{
    LogConfig, config, current_level, enabled, init, is_debug_enabled, is_level_enabled,
    set_debug, set_level,
};
pub use level::{Format, Level, ParseError};
pub use logger::Logger;
pub use output::{Record, log};

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($level) {
            $crate::log($level, $target, &format!($($arg)+));
        }
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__log!($level, target: module_path!(), $($arg)+)
    };
}

/// Log at TRACE.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Trace, $($arg)+) };
}

/// Log at DEBUG.
///
/// Shown when `FOUNDATION_DEBUG=1` or `FOUNDATION_LOG_LEVEL` is `debug` or lower.
///
/// ```rust
/// use foundation_log::debug;
///
/// let path = "plugins/MyPlugin/lang.yml";
/// debug!("Reading {}", path);
/// debug!(target: "rosetta", "Merged {} entries", 12);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Debug, $($arg)+) };
}

/// Log at INFO.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Info, $($arg)+) };
}

/// Log at WARN.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Warn, $($arg)+) };
}

/// Log at ERROR.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Error, $($arg)+) };
}

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! A `tracing` subscriber honouring the same environment variables.

    use crate::{Level, config};

    /// Build a subscriber filtered at the configured level. `RUST_LOG`, when
    /// set, takes precedence.
    pub fn subscriber() -> impl tracing::Subscriber + Send + Sync {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, fmt};

        let config = config();
        let directive = match config.level {
            Level::Off => "off".to_string(),
            level => level.as_str().to_ascii_lowercase(),
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config.color).with_writer(std::io::stderr))
    }
}

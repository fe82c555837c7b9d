use crate::{Level, log};
use std::sync::Arc;

/// A cheaply cloneable logging handle bound to a target name.
///
/// Hosts hand one of these to the components that log on a plugin's behalf,
/// so every line carries the plugin's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logger {
    target: Arc<str>,
}

impl Logger {
    pub fn new(target: impl AsRef<str>) -> Self {
        Self {
            target: Arc::from(target.as_ref()),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Log `msg` at `level`, subject to the global threshold.
    pub fn log(&self, level: Level, msg: &str) {
        log(level, &self.target, msg);
    }

    pub fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }
}

impl From<&str> for Logger {
    fn from(target: &str) -> Self {
        Self::new(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target() {
        let logger = Logger::new("MyPlugin");
        assert_eq!(logger.target(), "MyPlugin");
        assert_eq!(logger.clone(), Logger::from("MyPlugin"));
    }

    #[test]
    fn test_methods_do_not_panic() {
        let logger = Logger::new("test");
        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.warn("multi\nline");
        logger.error("error");
        logger.log(Level::Off, "never shown");
    }
}

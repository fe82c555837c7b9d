use crate::{Format, Level, LogConfig, config, enabled};
use std::io::{self, Write};

/// A single log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub level: Level,
    pub target: &'a str,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, target: &'a str, message: &'a str) -> Self {
        Self {
            level,
            target,
            message,
        }
    }

    /// Write the record in `config.format`, followed by a newline.
    pub fn write_to(&self, out: &mut impl Write, config: &LogConfig) -> io::Result<()> {
        match config.format {
            Format::Pretty => self.write_pretty(out, config),
            Format::Compact => self.write_compact(out, config),
            Format::Json => self.write_json(out),
        }
    }

    fn write_pretty(&self, out: &mut impl Write, config: &LogConfig) -> io::Result<()> {
        if config.timestamps {
            write!(out, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
        }

        self.write_level(out, config)?;

        if config.show_target && !self.target.is_empty() {
            write!(out, "[{}] ", self.target)?;
        }

        // Continuation lines are indented under the header.
        let mut lines = self.message.split('\n');
        writeln!(out, "{}", lines.next().unwrap_or_default())?;
        for line in lines {
            writeln!(out, "    {}", line)?;
        }
        Ok(())
    }

    #[cfg(feature = "color")]
    fn write_level(&self, out: &mut impl Write, config: &LogConfig) -> io::Result<()> {
        if config.color {
            write!(out, "{:5} ", self.level.painted())
        } else {
            write!(out, "{:5} ", self.level)
        }
    }

    #[cfg(not(feature = "color"))]
    fn write_level(&self, out: &mut impl Write, _config: &LogConfig) -> io::Result<()> {
        write!(out, "{:5} ", self.level)
    }

    fn write_compact(&self, out: &mut impl Write, config: &LogConfig) -> io::Result<()> {
        if config.timestamps {
            write!(out, "{} ", chrono::Local::now().format("%H:%M:%S"))?;
        }
        write!(out, "{} ", &self.level.as_str()[..1])?;
        if config.show_target && !self.target.is_empty() {
            write!(out, "{}: ", self.target)?;
        }
        writeln!(out, "{}", self.message.replace('\n', " | "))
    }

    #[cfg(feature = "json")]
    fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        let entry = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "level": self.level.as_str(),
            "target": self.target,
            "message": self.message,
        });
        writeln!(out, "{}", entry)
    }

    #[cfg(not(feature = "json"))]
    fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
            chrono::Utc::now().to_rfc3339(),
            self.level.as_str(),
            self.target.escape_default(),
            self.message.escape_default(),
        )
    }
}

/// Emit a record.
///
/// When the host has installed a `log` implementation the record goes there;
/// otherwise it is written to stderr in the configured format.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !enabled(level) {
        return;
    }

    if log::max_level() != log::LevelFilter::Off {
        if let Some(level) = level.to_log() {
            log::log!(target: target, level, "{}", message);
        }
        return;
    }

    let _ = Record::new(level, target, message).write_to(&mut io::stderr().lock(), config());
}

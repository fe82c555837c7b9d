//! System message types and their prefixes.

use crate::RosettaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predefined kinds of system messages, used with the `prefix` helper to
/// pick a header and colour scheme.
///
/// Server owners can change the colours of each type, but the header
/// conveying the intent stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Informational messages, blue with the `Info` header by default.
    Info,
    /// Messages indicating success, green with the `Success` header by default.
    Success,
    /// Warning messages, yellow with the `Warning` header by default.
    Warning,
    /// Error messages, red with the `Error` header by default.
    Error,
}

impl MessageType {
    pub const ALL: [MessageType; 4] = [
        MessageType::Info,
        MessageType::Success,
        MessageType::Warning,
        MessageType::Error,
    ];

    /// The fixed header shown in the prefix.
    pub fn header(self) -> &'static str {
        match self {
            MessageType::Info => "Info",
            MessageType::Success => "Success",
            MessageType::Warning => "Warning",
            MessageType::Error => "Error",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Info => "info",
            MessageType::Success => "success",
            MessageType::Warning => "warning",
            MessageType::Error => "error",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = RosettaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(MessageType::Info),
            "success" => Ok(MessageType::Success),
            "warning" | "warn" => Ok(MessageType::Warning),
            "error" => Ok(MessageType::Error),
            _ => Err(RosettaError::InvalidMessageType(s.to_string())),
        }
    }
}

/// Colour codes used when rendering prefixes.
///
/// Colours use legacy section-sign formatting codes. A prefix renders as
/// `<colour><header><separator>`, e.g. `§9Info §8» §7`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixStyles {
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    /// Placed between the header and the message body.
    pub separator: String,
}

impl Default for PrefixStyles {
    fn default() -> Self {
        Self {
            info: "§9".to_string(),
            success: "§a".to_string(),
            warning: "§e".to_string(),
            error: "§c".to_string(),
            separator: " §8» §7".to_string(),
        }
    }
}

impl PrefixStyles {
    pub fn color(&self, message_type: MessageType) -> &str {
        match message_type {
            MessageType::Info => &self.info,
            MessageType::Success => &self.success,
            MessageType::Warning => &self.warning,
            MessageType::Error => &self.error,
        }
    }

    /// Replace the colour of one message type.
    pub fn with_color(mut self, message_type: MessageType, color: impl Into<String>) -> Self {
        let color = color.into();
        match message_type {
            MessageType::Info => self.info = color,
            MessageType::Success => self.success = color,
            MessageType::Warning => self.warning = color,
            MessageType::Error => self.error = color,
        }
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The rendered prefix for `message_type`.
    pub fn prefix(&self, message_type: MessageType) -> String {
        format!(
            "{}{}{}",
            self.color(message_type),
            message_type.header(),
            self.separator
        )
    }
}

// Mock platform for testing

use foundation_platform::{MemoryResources, Platform, Resource, ResourceLoader};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Level of a line logged through a [`MockPlatform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

/// A recorded log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

/// In-memory platform that records everything logged through it.
///
/// By default the data directory is a fresh, not yet created directory
/// inside a temporary directory that is removed when the mock is dropped.
pub struct MockPlatform {
    resources: Mutex<MemoryResources>,
    data_directory: PathBuf,
    lines: Mutex<Vec<LogLine>>,
    _temp: Option<Arc<TempDir>>,
}

impl MockPlatform {
    /// Create a mock with no resources and a temporary data directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temporary directory");
        let data_directory = temp.path().join("plugin");
        Self {
            resources: Mutex::new(MemoryResources::new()),
            data_directory,
            lines: Mutex::new(Vec::new()),
            _temp: Some(Arc::new(temp)),
        }
    }

    /// Create a mock using an existing data directory.
    pub fn in_directory(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            resources: Mutex::new(MemoryResources::new()),
            data_directory: data_directory.into(),
            lines: Mutex::new(Vec::new()),
            _temp: None,
        }
    }

    /// Bundle a resource.
    pub fn with_resource(self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        self.set_resource(name, contents);
        self
    }

    /// Add or replace a bundled resource, e.g. to simulate a plugin update.
    pub fn set_resource(&self, name: &str, contents: impl AsRef<[u8]>) {
        self.resources.lock().unwrap().insert(name, contents);
    }

    /// Remove a bundled resource.
    pub fn remove_resource(&self, name: &str) -> bool {
        self.resources.lock().unwrap().remove(name)
    }

    /// All recorded lines, oldest first.
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }

    /// Messages logged at INFO.
    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    /// Messages logged at WARN.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    /// Number of log calls made.
    pub fn call_count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn clear_logs(&self) {
        self.lines.lock().unwrap().clear();
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.level == level)
            .map(|line| line.message.clone())
            .collect()
    }

    fn record(&self, level: LogLevel, msg: &str) {
        self.lines.lock().unwrap().push(LogLine {
            level,
            message: msg.to_string(),
        });
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    fn get_resource(&self, name: &str) -> Option<Resource<'_>> {
        let resources = self.resources.lock().unwrap();
        let mut reader = resources.open(name)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).ok()?;
        Some(Box::new(Cursor::new(bytes)))
    }

    fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    fn info(&self, msg: &str) {
        self.record(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.record(LogLevel::Warn, msg);
    }
}

impl std::fmt::Debug for MockPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPlatform")
            .field("data_directory", &self.data_directory)
            .field("lines", &self.call_count())
            .finish()
    }
}

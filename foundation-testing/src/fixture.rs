// Lang file fixtures

use crate::MockPlatform;
use foundation_platform::Platform;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// A [`MockPlatform`] set up with a bundled lang file and, optionally, a
/// copy already on disk.
///
/// ```
/// use foundation_testing::LangFixture;
///
/// let fixture = LangFixture::new("a: Hello\nb: World\n")
///     .with_disk("a: Hi\nc: Extra\n");
///
/// assert!(fixture.disk_exists());
/// assert_eq!(fixture.disk_entries().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LangFixture {
    platform: Arc<MockPlatform>,
    file_name: String,
}

impl LangFixture {
    /// Bundle `default_lang` as `lang.yml`.
    pub fn new(default_lang: &str) -> Self {
        Self::named("lang.yml", default_lang)
    }

    /// Bundle `default_lang` under `file_name`, which is also the name on disk.
    pub fn named(file_name: &str, default_lang: &str) -> Self {
        Self {
            platform: Arc::new(MockPlatform::new().with_resource(file_name, default_lang)),
            file_name: file_name.to_string(),
        }
    }

    /// Write an existing lang file to the data directory.
    pub fn with_disk(self, contents: &str) -> Self {
        self.write_disk(contents);
        self
    }

    pub fn platform(&self) -> Arc<MockPlatform> {
        Arc::clone(&self.platform)
    }

    /// The platform as a trait object, ready to hand to a lang store.
    pub fn shared(&self) -> Arc<dyn Platform> {
        self.platform.clone()
    }

    pub fn disk_path(&self) -> PathBuf {
        self.platform.data_directory().join(&self.file_name)
    }

    pub fn disk_exists(&self) -> bool {
        self.disk_path().exists()
    }

    pub fn read_disk(&self) -> String {
        fs::read_to_string(self.disk_path()).expect("Failed to read lang file")
    }

    /// Bytes of the lang file on disk.
    pub fn read_disk_bytes(&self) -> Vec<u8> {
        fs::read(self.disk_path()).expect("Failed to read lang file")
    }

    /// The lang file on disk, parsed.
    pub fn disk_entries(&self) -> BTreeMap<String, String> {
        let contents = self.read_disk();
        if contents.trim().is_empty() {
            return BTreeMap::new();
        }
        serde_yaml::from_str::<Option<BTreeMap<String, String>>>(&contents)
            .expect("Lang file is not a flat string map")
            .unwrap_or_default()
    }

    pub fn write_disk(&self, contents: &str) {
        fs::create_dir_all(self.platform.data_directory()).expect("Failed to create data directory");
        fs::write(self.disk_path(), contents).expect("Failed to write lang file");
    }

    /// Replace the bundled default, as a plugin update would.
    pub fn set_default(&self, contents: &str) {
        self.platform.set_resource(&self.file_name, contents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_without_disk() {
        let fixture = LangFixture::new("a: Hello\n");
        assert!(!fixture.disk_exists());
        assert!(fixture.platform().get_resource("lang.yml").is_some());
    }

    #[test]
    fn test_fixture_with_disk() {
        let fixture = LangFixture::new("a: Hello\n").with_disk("a: Hi\n");
        assert_eq!(fixture.read_disk(), "a: Hi\n");
        assert_eq!(fixture.disk_entries().get("a").map(String::as_str), Some("Hi"));
    }

    #[test]
    fn test_empty_disk_file() {
        let fixture = LangFixture::new("a: Hello\n").with_disk("");
        assert!(fixture.disk_entries().is_empty());
    }
}

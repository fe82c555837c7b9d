//! The lang store.

use crate::engine::{HandlebarsEngine, RenderContext, TagResolver, TemplateEngine};
use crate::reconcile::{KeyDiff, ReconcilePolicy, ReconcileReport};
use crate::{PrefixStyles, Result, RosettaError};
use foundation_platform::Platform;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const LOG_TARGET: &str = "foundation_rosetta";

/// Default name of both the bundled resource and the file on disk.
pub const DEFAULT_LANG_FILE: &str = "lang.yml";

/// Where a store reads its messages from and how it reconciles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangOptions {
    /// File name inside the plugin's data directory.
    pub file_name: String,
    /// Name of the bundled default resource.
    pub resource_name: String,
    pub policy: ReconcilePolicy,
}

impl Default for LangOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_LANG_FILE.to_string(),
            resource_name: DEFAULT_LANG_FILE.to_string(),
            policy: ReconcilePolicy::default(),
        }
    }
}

/// Lifecycle of a [`RosettaLang`]. There is no way back to `Unloaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LangState {
    #[default]
    Unloaded,
    Loaded,
}

/// Handles a plugin's `lang.yml`, backed by a template engine for formatting.
///
/// The file is created from the bundled default on first load and upgraded
/// when the default gains keys. Values are template source; lookups render
/// them through the store's engine, which understands `{{prefix "info"}}`
/// out of the box.
///
/// Reloading takes `&mut self`, lookups take `&self`. Load once during
/// startup, then share the store (for instance behind an `Arc`) with
/// whatever needs to read it.
///
/// ```no_run
/// use foundation_platform::MemoryResources;
/// use foundation_rosetta::{RosettaLang, TagResolver};
///
/// let platform = foundation_platform::server(
///     "MyPlugin",
///     MemoryResources::new().with("lang.yml", "welcome: \"{{prefix \\\"info\\\"}}Hi {{player}}\"\n"),
///     "plugins/MyPlugin",
/// );
///
/// let lang = RosettaLang::load(platform)?;
/// let message = lang.get_with("welcome", &[TagResolver::single("player", "Steve")])?;
/// # Ok::<(), foundation_rosetta::RosettaError>(())
/// ```
pub struct RosettaLang {
    entries: BTreeMap<String, String>,
    platform: Arc<dyn Platform>,
    options: LangOptions,
    engine: Arc<dyn TemplateEngine>,
    state: LangState,
}

impl RosettaLang {
    /// Create an unloaded store with default options.
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self::builder(platform).build()
    }

    pub fn builder(platform: Arc<dyn Platform>) -> RosettaLangBuilder {
        RosettaLangBuilder::new(platform)
    }

    /// Create a store with default options and reload it.
    pub fn load(platform: Arc<dyn Platform>) -> Result<Self> {
        let mut lang = Self::new(platform);
        lang.reload()?;
        Ok(lang)
    }

    /// Load the lang file from disk, creating it from the bundled default if
    /// it does not exist.
    ///
    /// If the file already existed it is reconciled with the default according
    /// to the store's [`ReconcilePolicy`]. Existing values are never replaced
    /// by the default's.
    ///
    /// Changes are made on a copy and committed once every step succeeded, so
    /// a failed reload leaves the store as it was.
    ///
    /// # Errors
    ///
    /// Any I/O error, a missing bundled default, or a lang file that isn't a
    /// flat mapping of strings.
    pub fn reload(&mut self) -> Result<ReconcileReport> {
        let data_dir = self.platform.data_directory();
        if !data_dir.exists() {
            foundation_log::debug!(target: LOG_TARGET, "Creating data directory {}", data_dir.display());
            fs::create_dir_all(data_dir)?;
        }

        let path = self.file_path();
        let existed = path.exists();
        if !existed {
            foundation_log::debug!(
                target: LOG_TARGET,
                "Copying bundled {} to {}",
                self.options.resource_name,
                path.display()
            );
            fs::write(&path, self.default_bytes()?)?;
        }

        let disk = parse_entries(&fs::read_to_string(&path)?)?;
        let mut entries = self.entries.clone();
        entries.extend(disk.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut report = ReconcileReport {
            created: !existed,
            ..ReconcileReport::default()
        };

        if existed {
            let defaults = parse_entries(&self.default_text()?)?;
            let diff = KeyDiff::between(&entries, &defaults);
            report = self.options.policy.apply(
                &mut entries,
                &defaults,
                diff,
                &self.options.file_name,
                self.platform.as_ref(),
            );

            if report.persisted {
                write_entries(&path, &entries)?;
            }
        }

        foundation_log::debug!(
            target: LOG_TARGET,
            "Loaded {} entries from {}",
            entries.len(),
            path.display()
        );

        self.entries = entries;
        self.state = LangState::Loaded;
        Ok(report)
    }

    /// The raw template for `key`.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Render `key` with the store's engine.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_using(self.engine.as_ref(), key, &RenderContext::new())
    }

    /// Render `key` with extra tags, the last resolver taking priority.
    pub fn get_with(&self, key: &str, resolvers: &[TagResolver]) -> Result<Option<String>> {
        self.get_using(
            self.engine.as_ref(),
            key,
            &RenderContext::with_resolvers(resolvers),
        )
    }

    /// Render `key` for `target`, available to templates as `target`.
    pub fn get_for<T: Serialize + ?Sized>(
        &self,
        key: &str,
        target: &T,
        resolvers: &[TagResolver],
    ) -> Result<Option<String>> {
        if !self.contains(key) {
            return Ok(None);
        }
        let ctx = RenderContext::with_resolvers(resolvers).target(target)?;
        self.get_using(self.engine.as_ref(), key, &ctx)
    }

    /// Render `key` with a caller-provided engine.
    pub fn get_using(
        &self,
        engine: &dyn TemplateEngine,
        key: &str,
        ctx: &RenderContext,
    ) -> Result<Option<String>> {
        let Some(template) = self.get_raw(key) else {
            return Ok(None);
        };

        engine
            .render(template, ctx)
            .map(Some)
            .map_err(|e| RosettaError::Render {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self) -> LangState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LangState::Loaded
    }

    pub fn options(&self) -> &LangOptions {
        &self.options
    }

    pub fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }

    pub fn engine(&self) -> &Arc<dyn TemplateEngine> {
        &self.engine
    }

    /// Location of the lang file on disk.
    pub fn file_path(&self) -> PathBuf {
        self.platform
            .data_directory()
            .join(&self.options.file_name)
    }

    fn default_bytes(&self) -> Result<Vec<u8>> {
        let mut resource = self
            .platform
            .get_resource(&self.options.resource_name)
            .ok_or_else(|| RosettaError::MissingResource(self.options.resource_name.clone()))?;

        let mut bytes = Vec::new();
        resource.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn default_text(&self) -> Result<String> {
        String::from_utf8(self.default_bytes()?)
            .map_err(|e| RosettaError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl fmt::Debug for RosettaLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosettaLang")
            .field("entries", &self.entries.len())
            .field("data_directory", &self.platform.data_directory())
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RosettaLang`].
pub struct RosettaLangBuilder {
    platform: Arc<dyn Platform>,
    options: LangOptions,
    engine: Option<Arc<dyn TemplateEngine>>,
    prefix_styles: PrefixStyles,
}

impl RosettaLangBuilder {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            platform,
            options: LangOptions::default(),
            engine: None,
            prefix_styles: PrefixStyles::default(),
        }
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.options.file_name = name.into();
        self
    }

    pub fn resource_name(mut self, name: impl Into<String>) -> Self {
        self.options.resource_name = name.into();
        self
    }

    pub fn policy(mut self, policy: ReconcilePolicy) -> Self {
        self.options.policy = policy;
        self
    }

    /// Use a custom default engine. Prefix styles are ignored when set.
    pub fn engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    pub fn shared_engine(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Styles for the `prefix` helper of the default Handlebars engine.
    pub fn prefix_styles(mut self, styles: PrefixStyles) -> Self {
        self.prefix_styles = styles;
        self
    }

    pub fn options(&self) -> &LangOptions {
        &self.options
    }

    pub fn build(self) -> RosettaLang {
        let engine = match self.engine {
            Some(engine) => engine,
            None => Arc::new(HandlebarsEngine::with_prefix_styles(self.prefix_styles)),
        };

        RosettaLang {
            entries: BTreeMap::new(),
            platform: self.platform,
            options: self.options,
            engine,
            state: LangState::Unloaded,
        }
    }

    /// Build and reload in one go.
    pub fn load(self) -> Result<RosettaLang> {
        let mut lang = self.build();
        lang.reload()?;
        Ok(lang)
    }
}

/// Parse a lang file into a flat key → template map.
///
/// An empty document is an empty map. Numbers and booleans are kept as their
/// textual form and a blanked value (`key:`) is an empty message; lists and
/// mappings are rejected.
pub fn parse_entries(source: &str) -> Result<BTreeMap<String, String>> {
    if is_blank_document(source) {
        return Ok(BTreeMap::new());
    }

    let raw: Option<BTreeMap<String, Value>> = serde_yaml::from_str(source)?;
    let mut entries = BTreeMap::new();
    for (key, value) in raw.unwrap_or_default() {
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            other => {
                return Err(RosettaError::InvalidEntry {
                    key,
                    found: kind_of(&other),
                });
            }
        };
        entries.insert(key, value);
    }

    Ok(entries)
}

fn is_blank_document(source: &str) -> bool {
    source.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    foundation_log::debug!(target: LOG_TARGET, "Writing {} entries to {}", entries.len(), path.display());
    fs::write(path, serde_yaml::to_string(entries)?)?;
    Ok(())
}

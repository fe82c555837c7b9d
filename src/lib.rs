// Foundation - Tools and utilities for game server and proxy plugins
//
// Provides a host abstraction shared by server and proxy plugins, and lang
// file handling built on top of it.

//! Foundation loads its own configuration once at startup and hands
//! pre-configured lang stores to the plugins that depend on it.
//!
//! ```no_run
//! use foundation::prelude::*;
//! use foundation_platform::MemoryResources;
//!
//! // Foundation itself runs as a plugin.
//! let foundation = Foundation::load(foundation_platform::server(
//!     "Foundation",
//!     foundation::resources(),
//!     "plugins/Foundation",
//! ))?;
//!
//! // A plugin depending on Foundation.
//! let platform = foundation_platform::server(
//!     "MyPlugin",
//!     MemoryResources::new().with("lang.yml", "saved: \"{{prefix \\\"success\\\"}}Saved!\"\n"),
//!     "plugins/MyPlugin",
//! );
//! let lang = foundation.lang(platform).load()?;
//! let saved = lang.get("saved")?;
//! # Ok::<(), foundation::FoundationError>(())
//! ```

mod config;
mod error;

pub use config::{CONFIG_FILE, ENV_PREFIX, FoundationConfig};
pub use error::{FoundationError, Result};

// Re-export member crates
pub use foundation_config;
pub use foundation_log;
pub use foundation_platform;
pub use foundation_rosetta;

use foundation_config::ConfigManager;
use foundation_platform::{EmbeddedResources, Platform};
use foundation_rosetta::{PrefixStyles, RosettaError, RosettaLang, RosettaLangBuilder};
use include_dir::{Dir, include_dir};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate description.
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

static RESOURCES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Resources bundled with Foundation itself, including the default `config.yml`.
pub fn resources() -> EmbeddedResources {
    EmbeddedResources::new(&RESOURCES)
}

/// A loaded Foundation instance.
///
/// Holds the platform Foundation itself runs on and its configuration. Pass
/// it to whatever needs Foundation-wide settings instead of reaching for a
/// global.
pub struct Foundation {
    platform: Arc<dyn Platform>,
    config: FoundationConfig,
}

impl Foundation {
    /// Load Foundation's configuration from its data directory.
    ///
    /// `config.yml` is created from the bundled default if missing. Values
    /// from `FOUNDATION_*` environment variables take precedence over the file.
    pub fn load(platform: Arc<dyn Platform>) -> Result<Self> {
        let path = platform.data_directory().join(CONFIG_FILE);
        if !path.exists() {
            fs::create_dir_all(platform.data_directory())?;
            fs::write(&path, default_config(platform.as_ref())?)?;
            platform.info(&format!("Created default {}", CONFIG_FILE));
        }

        let manager = ConfigManager::with_prefix(ENV_PREFIX);
        manager.load_file(&path)?;
        manager.load_env();
        let config: FoundationConfig = manager.load_validated()?;

        foundation_log::debug!(
            target: "foundation",
            "Loaded {} (reconcile_policy = {})",
            path.display(),
            config.reconcile_policy
        );

        Ok(Self { platform, config })
    }

    /// Use an already built configuration, skipping the config file.
    pub fn with_config(platform: Arc<dyn Platform>, config: FoundationConfig) -> Self {
        Self { platform, config }
    }

    /// Platform Foundation runs on. Meant for Foundation's own files and
    /// diagnostics, not for plugins.
    pub fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }

    pub fn config(&self) -> &FoundationConfig {
        &self.config
    }

    pub fn prefix_styles(&self) -> &PrefixStyles {
        &self.config.prefix
    }

    pub fn config_path(&self) -> PathBuf {
        self.platform.data_directory().join(CONFIG_FILE)
    }

    /// A lang store builder for a dependent plugin, using the configured
    /// policy and prefix colours.
    pub fn lang(&self, plugin_platform: Arc<dyn Platform>) -> RosettaLangBuilder {
        RosettaLang::builder(plugin_platform)
            .policy(self.config.reconcile_policy)
            .prefix_styles(self.config.prefix.clone())
    }
}

impl std::fmt::Debug for Foundation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Foundation")
            .field("data_directory", &self.platform.data_directory())
            .field("config", &self.config)
            .finish()
    }
}

fn default_config(platform: &dyn Platform) -> Result<Vec<u8>> {
    if let Some(mut resource) = platform.get_resource(CONFIG_FILE) {
        let mut bytes = Vec::new();
        resource.read_to_end(&mut bytes)?;
        return Ok(bytes);
    }

    RESOURCES
        .get_file(CONFIG_FILE)
        .map(|file| file.contents().to_vec())
        .ok_or_else(|| RosettaError::MissingResource(CONFIG_FILE.to_string()).into())
}

// Prelude for common imports
pub mod prelude {
    pub use crate::{Foundation, FoundationConfig, FoundationError};
    pub use foundation_log::Logger;
    pub use foundation_platform::{Platform, ResourceLoader};
    pub use foundation_rosetta::{
        MessageType, PrefixStyles, ReconcilePolicy, RenderContext, RosettaLang, TagResolver,
        TemplateEngine,
    };
}

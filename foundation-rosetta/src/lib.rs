//! Lang files for Foundation plugins.
//!
//! A plugin ships a default `lang.yml`, a flat map of message keys to
//! template source. [`RosettaLang`] copies it to the plugin's data directory
//! on first start, keeps it up to date as new keys are added in later
//! releases, and renders messages through a [`TemplateEngine`].
//!
//! ```no_run
//! use foundation_platform::MemoryResources;
//! use foundation_rosetta::{ReconcilePolicy, RosettaLang, TagResolver};
//!
//! let platform = foundation_platform::server(
//!     "MyPlugin",
//!     MemoryResources::new().with("lang.yml", "joined: \"{{player}} joined the game\"\n"),
//!     "plugins/MyPlugin",
//! );
//!
//! let lang = RosettaLang::builder(platform)
//!     .policy(ReconcilePolicy::Strict)
//!     .load()?;
//!
//! let joined = lang.get_with("joined", &[TagResolver::single("player", "Steve")])?;
//! assert_eq!(joined.as_deref(), Some("Steve joined the game"));
//! # Ok::<(), foundation_rosetta::RosettaError>(())
//! ```
//!
//! ## Reconciliation
//!
//! When the file already exists, its keys are compared against the bundled
//! default. Missing keys are always added. Keys the default doesn't know are
//! removed under [`ReconcilePolicy::Strict`] and kept with a warning under
//! [`ReconcilePolicy::Permissive`].
//!
//! ## Prefixes
//!
//! The default engine provides `{{prefix "info"}}`, which renders the styled
//! header of a [`MessageType`]. Colours come from [`PrefixStyles`].

mod engine;
mod error;
mod helpers;
mod lang;
mod message_type;
mod reconcile;

pub use engine::{EngineError, HandlebarsEngine, RenderContext, TagResolver, TemplateEngine};
pub use error::RosettaError;
pub use helpers::{PREFIX_HELPER, PrefixHelper};
pub use lang::{
    DEFAULT_LANG_FILE, LangOptions, LangState, RosettaLang, RosettaLangBuilder, parse_entries,
};
pub use message_type::{MessageType, PrefixStyles};
pub use reconcile::{ReconcilePolicy, ReconcileReport};

/// Result type for lang operations.
pub type Result<T> = std::result::Result<T, RosettaError>;

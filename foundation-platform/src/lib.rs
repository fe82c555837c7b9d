//! Host abstraction for Foundation plugins.
//!
//! Plugins built on Foundation run on game servers and on proxies. The
//! [`Platform`] trait hides which host loaded the plugin: it exposes bundled
//! resources, the plugin's data directory and the host's logger.
//!
//! ```no_run
//! use foundation_log::Logger;
//! use foundation_platform::{DirectoryResources, MemoryResources};
//!
//! // Game server: resources bundled with the plugin, data in `plugins/MyPlugin`.
//! let server = foundation_platform::server(
//!     "MyPlugin",
//!     MemoryResources::new().with("lang.yml", "greeting: Hello!\n"),
//!     "plugins/MyPlugin",
//! );
//!
//! // Proxy: everything is injected.
//! let proxy = foundation_platform::proxy(
//!     DirectoryResources::new("resources"),
//!     Logger::new("MyPlugin"),
//!     "plugins/myplugin",
//! );
//!
//! server.info("Enabled");
//! proxy.warn("Running on a proxy");
//! ```

mod proxy;
mod resources;
mod server;

pub use proxy::ProxyPlatform;
pub use resources::{
    DirectoryResources, EmbeddedResources, MemoryResources, Resource, ResourceLoader,
};
pub use server::ServerPlatform;

use foundation_log::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Common functionality every host provides to plugins.
///
/// Implementations are pure delegation to the host; failures are whatever the
/// host's own APIs report.
pub trait Platform: Send + Sync {
    /// Get the contents of a resource bundled with the plugin.
    ///
    /// Returns `None` if the resource doesn't exist.
    fn get_resource(&self, name: &str) -> Option<Resource<'_>>;

    /// The plugin's data directory, for storing configuration and cache files.
    fn data_directory(&self) -> &Path;

    /// Log a message at the INFO level.
    fn info(&self, msg: &str);

    /// Log a message at the WARN level.
    fn warn(&self, msg: &str);
}

impl<T: Platform + ?Sized> Platform for Arc<T> {
    fn get_resource(&self, name: &str) -> Option<Resource<'_>> {
        (**self).get_resource(name)
    }

    fn data_directory(&self) -> &Path {
        (**self).data_directory()
    }

    fn info(&self, msg: &str) {
        (**self).info(msg)
    }

    fn warn(&self, msg: &str) {
        (**self).warn(msg)
    }
}

/// Create a [`Platform`] for a plugin loaded by a game server.
pub fn server(
    name: impl Into<String>,
    resources: impl ResourceLoader + 'static,
    data_folder: impl Into<PathBuf>,
) -> Arc<dyn Platform> {
    Arc::new(ServerPlatform::new(name, resources, data_folder))
}

/// Create a [`Platform`] for a plugin loaded by a proxy.
pub fn proxy(
    resources: impl ResourceLoader + 'static,
    logger: Logger,
    data_directory: impl Into<PathBuf>,
) -> Arc<dyn Platform> {
    Arc::new(ProxyPlatform::new(resources, logger, data_directory))
}

//! Game-server adapter.

use crate::{Platform, Resource, ResourceLoader};
use foundation_log::Logger;
use std::path::{Path, PathBuf};

/// [`Platform`] for a plugin loaded by a game server.
///
/// Resources come from the plugin's own bundle, the data directory is the
/// plugin's folder and log lines are tagged with the plugin name.
pub struct ServerPlatform {
    name: String,
    resources: Box<dyn ResourceLoader>,
    data_folder: PathBuf,
    logger: Logger,
}

impl ServerPlatform {
    pub fn new(
        name: impl Into<String>,
        resources: impl ResourceLoader + 'static,
        data_folder: impl Into<PathBuf>,
    ) -> Self {
        let name = name.into();
        Self {
            logger: Logger::new(&name),
            name,
            resources: Box::new(resources),
            data_folder: data_folder.into(),
        }
    }

    /// Conventional layout: `<plugins_dir>/<name>` as data folder.
    pub fn in_plugins_dir(
        name: impl Into<String>,
        resources: impl ResourceLoader + 'static,
        plugins_dir: impl AsRef<Path>,
    ) -> Self {
        let name = name.into();
        let data_folder = plugins_dir.as_ref().join(&name);
        Self::new(name, resources, data_folder)
    }

    /// The plugin's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Platform for ServerPlatform {
    fn get_resource(&self, name: &str) -> Option<Resource<'_>> {
        self.resources.open(name)
    }

    fn data_directory(&self) -> &Path {
        &self.data_folder
    }

    fn info(&self, msg: &str) {
        self.logger.info(msg);
    }

    fn warn(&self, msg: &str) {
        self.logger.warn(msg);
    }
}

impl std::fmt::Debug for ServerPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerPlatform")
            .field("name", &self.name)
            .field("data_folder", &self.data_folder)
            .finish_non_exhaustive()
    }
}

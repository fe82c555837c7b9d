//! Proxy adapter.

use crate::{Platform, Resource, ResourceLoader};
use foundation_log::Logger;
use std::path::{Path, PathBuf};

/// [`Platform`] for a plugin loaded by a proxy.
///
/// The proxy injects everything: where resources are looked up, the logger
/// and the data directory.
pub struct ProxyPlatform {
    resources: Box<dyn ResourceLoader>,
    logger: Logger,
    data_directory: PathBuf,
}

impl ProxyPlatform {
    pub fn new(
        resources: impl ResourceLoader + 'static,
        logger: Logger,
        data_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resources: Box::new(resources),
            logger,
            data_directory: data_directory.into(),
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Platform for ProxyPlatform {
    fn get_resource(&self, name: &str) -> Option<Resource<'_>> {
        self.resources.open(name)
    }

    fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    fn info(&self, msg: &str) {
        self.logger.info(msg);
    }

    fn warn(&self, msg: &str) {
        self.logger.warn(msg);
    }
}

impl std::fmt::Debug for ProxyPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyPlatform")
            .field("logger", &self.logger.target())
            .field("data_directory", &self.data_directory)
            .finish_non_exhaustive()
    }
}

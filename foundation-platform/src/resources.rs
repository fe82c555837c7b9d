//! Resource loaders.
//!
//! A resource is a read-only file shipped with a plugin, such as the default
//! `lang.yml`. Where those files live depends on how the plugin was built and
//! which host loaded it, so lookup goes through [`ResourceLoader`].

use include_dir::Dir;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A readable resource stream.
pub type Resource<'a> = Box<dyn Read + Send + 'a>;

/// Looks up bundled resources by name.
///
/// Names use `/` as separator and are relative to the loader's root.
pub trait ResourceLoader: Send + Sync {
    /// Open the resource `name`, or `None` if it doesn't exist.
    fn open(&self, name: &str) -> Option<Resource<'_>>;

    /// Whether the resource `name` exists.
    fn contains(&self, name: &str) -> bool {
        self.open(name).is_some()
    }
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Arc<T> {
    fn open(&self, name: &str) -> Option<Resource<'_>> {
        (**self).open(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Box<T> {
    fn open(&self, name: &str) -> Option<Resource<'_>> {
        (**self).open(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

/// Resources compiled into the plugin binary with [`include_dir::include_dir!`].
///
/// ```ignore
/// use include_dir::{include_dir, Dir};
/// use foundation_platform::EmbeddedResources;
///
/// static RESOURCES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources");
/// let loader = EmbeddedResources::new(&RESOURCES);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    dir: &'static Dir<'static>,
}

impl EmbeddedResources {
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

impl ResourceLoader for EmbeddedResources {
    fn open(&self, name: &str) -> Option<Resource<'_>> {
        let file = self.dir.get_file(name)?;
        Some(Box::new(file.contents()))
    }

    fn contains(&self, name: &str) -> bool {
        self.dir.get_file(name).is_some()
    }
}

/// Resources looked up beneath a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` under the root, refusing anything that would escape it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.root.join(relative))
    }
}

impl ResourceLoader for DirectoryResources {
    fn open(&self, name: &str) -> Option<Resource<'_>> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return None;
        }
        let file = File::open(path).ok()?;
        Some(Box::new(file))
    }

    fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }
}

/// Resources held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl AsRef<[u8]>) {
        self.files.insert(name.into(), Arc::from(contents.as_ref()));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, contents: impl AsRef<[u8]>) -> Self {
        self.insert(name, contents);
        self
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.files.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ResourceLoader for MemoryResources {
    fn open(&self, name: &str) -> Option<Resource<'_>> {
        let contents = self.files.get(name)?;
        Some(Box::new(Cursor::new(Arc::clone(contents))))
    }

    fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}

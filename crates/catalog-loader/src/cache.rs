//! Memoization of the load step.
//!
//! A catalog is loaded once per source and then shared. Entries are keyed by
//! the canonical path of the source and are only replaced or removed through
//! an explicit [`CatalogCache::refresh`], [`CatalogCache::invalidate`] or
//! [`CatalogCache::clear`] call. Changes to the file on disk are never picked
//! up implicitly. An entry can still be invalidated after its file has been
//! moved or deleted, using the path it was loaded through.

use crate::error::{LoadError, Result};
use crate::types::Catalog;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: HashMap<PathBuf, Arc<Catalog>>,
    /// Absolute requested path -> canonical key
    aliases: HashMap<PathBuf, PathBuf>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog for `path`, loading it on first use.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Catalog>> {
        let key = source_key(path)?;
        if let Some(catalog) = self.entries.get(&key) {
            tracing::debug!("Catalog cache hit for {:?}", key);
            return Ok(Arc::clone(catalog));
        }
        self.load_into(path, key)
    }

    /// Reload `path` unconditionally and replace its entry.
    pub fn refresh(&mut self, path: &Path) -> Result<Arc<Catalog>> {
        let key = source_key(path)?;
        tracing::info!("Refreshing catalog {:?}", key);
        self.load_into(path, key)
    }

    /// Drop the entry for `path`. Returns whether one was present.
    ///
    /// Works even when the source no longer exists on disk, as long as
    /// `path` is one the entry was loaded through.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let key = source_key(path)
            .ok()
            .or_else(|| alias_key(path).and_then(|alias| self.aliases.get(&alias).cloned()));
        let Some(key) = key else {
            return false;
        };
        self.aliases.retain(|_, k| *k != key);
        let removed = self.entries.remove(&key).is_some();
        if removed {
            tracing::debug!("Invalidated catalog {:?}", key);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.aliases.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn load_into(&mut self, path: &Path, key: PathBuf) -> Result<Arc<Catalog>> {
        let catalog = Arc::new(Catalog::load_from_file(&key)?);
        if let Some(alias) = alias_key(path) {
            self.aliases.insert(alias, key.clone());
        }
        self.aliases.insert(key.clone(), key.clone());
        self.entries.insert(key, Arc::clone(&catalog));
        Ok(catalog)
    }
}

/// Lexically absolute form of a requested path; needs no file on disk
fn alias_key(path: &Path) -> Option<PathBuf> {
    std::path::absolute(path).ok()
}

/// Identity of a source: its canonical path
fn source_key(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io(e),
    })
}

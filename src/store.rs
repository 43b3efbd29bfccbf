//! Catalog persistence: one JSON file, read and rewritten whole.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{AppResult, LoadError};
use crate::models::Catalog;

/// Owns the path of the persisted catalog file. One load at startup, one
/// full rewrite after every mutation. No atomic rename, no backup.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted catalog, or an empty one when no usable file
    /// exists. Startup must never fail because of a corrupt catalog file:
    /// a missing, unreadable, unparseable or wrong-shaped file is
    /// discarded and replaced by the default on the next save.
    pub fn load(&self) -> Catalog {
        // Stdout on purpose: this line belongs to the operator
        // conversation, not the logs.
        println!("Using JSON file: {}", self.absolute_path().display());

        match self.read() {
            Ok(catalog) => catalog,
            Err(LoadError::NotFound) => Catalog::default(),
            Err(err) => {
                tracing::warn!("Discarding unusable catalog file: {err}");
                Catalog::default()
            }
        }
    }

    fn read(&self) -> Result<Catalog, LoadError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(LoadError::NotFound),
            Err(err) => return Err(LoadError::Io(err)),
        };

        let value: serde_json::Value = serde_json::from_str(&raw).map_err(LoadError::Parse)?;
        if !value.is_object() {
            return Err(LoadError::Shape("top-level value is not an object".into()));
        }

        // Missing fields default; wrong-typed fields reject the whole file.
        serde_json::from_value(value).map_err(|err| LoadError::Shape(err.to_string()))
    }

    /// Serialize the full catalog over the previous file contents.
    /// Human-readable, 4-space indentation, UTF-8 with non-ASCII preserved.
    /// Failures propagate: a catalog that cannot be saved is fatal.
    pub fn save(&self, catalog: &Catalog) -> AppResult<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        catalog.serialize(&mut serializer)?;

        fs::write(&self.path, buf)?;
        tracing::debug!("Catalog saved to {}", self.path.display());
        Ok(())
    }

    fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

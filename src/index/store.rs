//! Persists an inverted index to a local directory.
//!
//! The index is written as a single JSON document. The file format is
//! private to this crate and only needs to round-trip with itself.

use crate::error::{Result, SearchError};
use crate::index::memory::InvertedIndex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the index file inside the index directory.
pub const INDEX_FILE: &str = "index.json";

/// A directory holding a persisted index.
#[derive(Debug, Clone)]
pub struct IndexStore {
  dir: PathBuf,
}

impl IndexStore {
  /// Opens a store rooted at `dir`. Nothing is touched until load or save.
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// The index directory.
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Path of the index file.
  pub fn index_path(&self) -> PathBuf {
    self.dir.join(INDEX_FILE)
  }

  /// Loads the persisted index, or `None` if nothing has been saved yet.
  pub fn load(&self) -> Result<Option<InvertedIndex>> {
    let path = self.index_path();
    let raw = match fs::read_to_string(&path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
      Err(source) => return Err(SearchError::Persistence { path, source }),
    };
    let index = serde_json::from_str(&raw)?;
    Ok(Some(index))
  }

  /// Writes `index`, replacing any previous copy.
  ///
  /// The data goes to a temporary file first and is renamed into place, so
  /// a crash never leaves a half-written index behind.
  pub fn save(&self, index: &InvertedIndex) -> Result<()> {
    fs::create_dir_all(&self.dir).map_err(|source| SearchError::Persistence {
      path: self.dir.clone(),
      source,
    })?;

    let path = self.index_path();
    let tmp = self.dir.join(format!("{}.tmp", INDEX_FILE));
    let json = serde_json::to_vec(index)?;
    fs::write(&tmp, json).map_err(|source| SearchError::Persistence {
      path: tmp.clone(),
      source,
    })?;
    fs::rename(&tmp, &path).map_err(|source| SearchError::Persistence {
      path: path.clone(),
      source,
    })?;

    info!(
      target: "docseek::index",
      path = %path.display(),
      "Index saved"
    );
    Ok(())
  }
}

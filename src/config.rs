//! Search configuration.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the command line front end persists the index to.
pub const DEFAULT_INDEX_DIR: &str = "indexedFiles";

/// Tunables for the search engine.
///
/// Every field has a serde default, so a configuration file only needs to
/// name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
  /// Maximum number of documents an indexed query returns.
  #[serde(default = "default_max_hits")]
  pub max_hits: usize,
  /// Score every document receives from the match-all clause.
  #[serde(default = "default_base_weight")]
  pub base_weight: f32,
  /// Term-frequency saturation. Higher values let repeated terms keep
  /// adding to the score for longer.
  #[serde(default = "default_k1")]
  pub k1: f32,
  /// Document-length normalization, from 0.0 (none) to 1.0 (full).
  #[serde(default)]
  pub b: f32,
  /// Where to persist the inverted index. `None` keeps it in memory only.
  #[serde(default)]
  pub index_dir: Option<PathBuf>,
}

fn default_max_hits() -> usize {
  3
}

fn default_base_weight() -> f32 {
  1.0
}

fn default_k1() -> f32 {
  1.2
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      max_hits: default_max_hits(),
      base_weight: default_base_weight(),
      k1: default_k1(),
      b: 0.0,
      index_dir: None,
    }
  }
}

impl SearchConfig {
  /// Loads and validates a JSON configuration file.
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| SearchError::Config {
      path: Some(path.to_path_buf()),
      reason: e.to_string(),
    })?;
    let config: SearchConfig = serde_json::from_str(&raw).map_err(|e| SearchError::Config {
      path: Some(path.to_path_buf()),
      reason: e.to_string(),
    })?;
    config.validate().map_err(|e| match e {
      SearchError::Config { reason, .. } => SearchError::Config {
        path: Some(path.to_path_buf()),
        reason,
      },
      other => other,
    })?;
    Ok(config)
  }

  /// Checks that every value is usable.
  pub fn validate(&self) -> Result<()> {
    let invalid = |reason: &str| {
      Err(SearchError::Config {
        path: None,
        reason: reason.to_string(),
      })
    };
    if self.max_hits == 0 {
      return invalid("max_hits must be at least 1");
    }
    if !self.base_weight.is_finite() || self.base_weight < 0.0 {
      return invalid("base_weight must be a finite, non-negative number");
    }
    if !self.k1.is_finite() || self.k1 < 0.0 {
      return invalid("k1 must be a finite, non-negative number");
    }
    if !(0.0..=1.0).contains(&self.b) {
      return invalid("b must be between 0.0 and 1.0");
    }
    Ok(())
  }

  /// Sets the maximum number of indexed hits.
  pub fn max_hits(mut self, max_hits: usize) -> Self {
    self.max_hits = max_hits;
    self
  }

  /// Sets the match-all base weight.
  pub fn base_weight(mut self, base_weight: f32) -> Self {
    self.base_weight = base_weight;
    self
  }

  /// Sets the term-frequency saturation parameter.
  pub fn k1(mut self, k1: f32) -> Self {
    self.k1 = k1;
    self
  }

  /// Sets the document-length normalization parameter.
  pub fn b(mut self, b: f32) -> Self {
    self.b = b;
    self
  }

  /// Persists the index under `dir`.
  pub fn index_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.index_dir = Some(dir.into());
    self
  }
}

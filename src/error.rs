//! Error types for docseek.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors produced while searching or indexing a corpus.
///
/// Per-document failures (`DocumentUnreadable`) are absorbed by the matchers
/// and show up as a zero count. Everything else fails the whole request.
#[derive(Debug, Error)]
pub enum SearchError {
  /// A named document could not be opened or read.
  #[error("document unreadable: {document}: {source}")]
  DocumentUnreadable {
    /// Identifier of the document
    document: String,
    /// Underlying I/O failure
    #[source]
    source: io::Error,
  },

  /// The search phrase was empty or otherwise unusable.
  #[error("invalid search phrase: {reason}")]
  InvalidSearchPhrase {
    /// Why the phrase was rejected
    reason: String,
  },

  /// The indexed query could not be parsed.
  #[error("cannot parse query '{query}' at offset {position}: {reason}")]
  QueryParseError {
    /// The raw query text
    query: String,
    /// Byte offset of the offending character
    position: usize,
    /// What went wrong
    reason: String,
  },

  /// The inverted index could not be built or loaded.
  #[error("index unavailable: {reason}")]
  IndexUnavailable {
    /// Why no usable index exists
    reason: String,
  },

  /// The escaped phrase did not compile into a regular expression.
  #[error("invalid pattern: {0}")]
  Pattern(#[from] regex::Error),

  /// A configuration file or value was rejected.
  #[error("invalid configuration{}: {reason}", config_location(.path))]
  Config {
    /// Source file, if the configuration came from disk
    path: Option<PathBuf>,
    /// What is wrong with it
    reason: String,
  },

  /// Reading or writing the persisted index failed.
  #[error("index persistence failed at {}: {source}", .path.display())]
  Persistence {
    /// File or directory involved
    path: PathBuf,
    /// Underlying I/O failure
    #[source]
    source: io::Error,
  },

  /// JSON encoding or decoding failed.
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

fn config_location(path: &Option<PathBuf>) -> String {
  match path {
    Some(path) => format!(" in {}", path.display()),
    None => String::new(),
  }
}

impl SearchError {
  /// Shorthand for [`SearchError::InvalidSearchPhrase`].
  pub fn invalid_phrase(reason: impl Into<String>) -> Self {
    SearchError::InvalidSearchPhrase {
      reason: reason.into(),
    }
  }

  /// Shorthand for [`SearchError::IndexUnavailable`].
  pub fn index_unavailable(reason: impl Into<String>) -> Self {
    SearchError::IndexUnavailable {
      reason: reason.into(),
    }
  }

  /// Whether this error only concerns a single document.
  pub fn is_per_document(&self) -> bool {
    matches!(self, SearchError::DocumentUnreadable { .. })
  }
}

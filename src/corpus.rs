//! Document sources.
//!
//! The matchers never open files themselves. They ask a [`Corpus`] for the
//! ordered list of document identifiers and read each one through it, so a
//! failed read can be recorded against the right document.

use crate::error::{Result, SearchError};
use crate::types::{Document, DocumentId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An ordered, read-only collection of documents.
///
/// The `Send` and `Sync` bounds allow a corpus to be shared with an engine
/// that is queried from several threads once its index is built.
pub trait Corpus: Send + Sync {
  /// Document identifiers in corpus order.
  fn ids(&self) -> Vec<DocumentId>;

  /// Reads the full text of a document.
  ///
  /// Fails with [`SearchError::DocumentUnreadable`] when the document cannot
  /// be read.
  fn read(&self, id: &str) -> Result<String>;

  /// Number of documents in the corpus.
  fn len(&self) -> usize {
    self.ids().len()
  }

  /// Whether the corpus has no documents.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// A corpus backed by files on disk.
///
/// Each document is identified by its path as displayed.
#[derive(Debug, Clone, Default)]
pub struct FileCorpus {
  paths: Vec<PathBuf>,
}

impl FileCorpus {
  /// Creates a corpus from an ordered list of paths.
  pub fn new<I, P>(paths: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    Self {
      paths: paths.into_iter().map(Into::into).collect(),
    }
  }

  /// Creates a corpus from every `.txt` file in `dir`, sorted by path.
  pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    let unreadable = |source: io::Error| SearchError::DocumentUnreadable {
      document: dir.display().to_string(),
      source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
      let path = entry.map_err(unreadable)?.path();
      if path.is_file() && path.extension().map_or(false, |ext| ext == "txt") {
        paths.push(path);
      }
    }
    paths.sort();

    Ok(Self { paths })
  }

  /// The paths backing this corpus, in corpus order.
  pub fn paths(&self) -> &[PathBuf] {
    &self.paths
  }
}

impl Corpus for FileCorpus {
  fn ids(&self) -> Vec<DocumentId> {
    self.paths.iter().map(|p| p.display().to_string()).collect()
  }

  fn read(&self, id: &str) -> Result<String> {
    let path = self
      .paths
      .iter()
      .find(|p| p.display().to_string() == id)
      .ok_or_else(|| SearchError::DocumentUnreadable {
        document: id.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "document is not part of the corpus"),
      })?;

    fs::read_to_string(path).map_err(|source| SearchError::DocumentUnreadable {
      document: id.to_string(),
      source,
    })
  }

  fn len(&self) -> usize {
    self.paths.len()
  }
}

/// A corpus held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
  documents: Vec<Document>,
}

impl MemoryCorpus {
  /// Creates an empty corpus.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a document, replacing any document with the same identifier.
  pub fn with(mut self, id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
    self.insert(Document::new(id, text));
    self
  }

  /// Inserts a document, replacing any document with the same identifier.
  pub fn insert(&mut self, document: Document) {
    match self.documents.iter_mut().find(|d| d.id == document.id) {
      Some(existing) => existing.text = document.text,
      None => self.documents.push(document),
    }
  }

  /// The documents, in corpus order.
  pub fn documents(&self) -> &[Document] {
    &self.documents
  }
}

impl FromIterator<Document> for MemoryCorpus {
  fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
    let mut corpus = MemoryCorpus::new();
    for document in iter {
      corpus.insert(document);
    }
    corpus
  }
}

impl Corpus for MemoryCorpus {
  fn ids(&self) -> Vec<DocumentId> {
    self.documents.iter().map(|d| d.id.clone()).collect()
  }

  fn read(&self, id: &str) -> Result<String> {
    self
      .documents
      .iter()
      .find(|d| d.id == id)
      .map(|d| d.text.clone())
      .ok_or_else(|| SearchError::DocumentUnreadable {
        document: id.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "document is not part of the corpus"),
      })
  }

  fn len(&self) -> usize {
    self.documents.len()
  }
}

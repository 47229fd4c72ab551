//! Builds an inverted index from a corpus.

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::index::adapter::IndexAdapter;
use crate::index::memory::InvertedIndex;
use crate::searchers::bm25::Bm25;
use crate::types::DocumentId;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

/// What happened to each document during a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildReport {
  /// Documents (re)indexed from their current text, in corpus order.
  pub indexed: Vec<DocumentId>,
  /// Documents that could not be read, with the reason.
  pub failed: Vec<(DocumentId, String)>,
  /// Previously indexed documents that are no longer in the corpus.
  pub removed: Vec<DocumentId>,
}

impl BuildReport {
  /// Whether every corpus document was indexed.
  pub fn is_complete(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Tokenizes every corpus document into an index.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
  bm25: Bm25,
}

impl IndexBuilder {
  /// Creates a builder that weights postings with `bm25`.
  pub fn new(bm25: Bm25) -> Self {
    Self { bm25 }
  }

  /// Creates a builder from the weighting parameters in `config`.
  pub fn from_config(config: &SearchConfig) -> Self {
    Self::new(Bm25::from(config))
  }

  /// Builds a fresh in-memory index of `corpus`.
  pub fn build(&self, corpus: &dyn Corpus) -> Result<(InvertedIndex, BuildReport)> {
    let mut index = InvertedIndex::new();
    let report = self.update(&mut index, corpus)?;
    Ok((index, report))
  }

  /// Brings an existing index up to date with `corpus` and commits it.
  ///
  /// Readable documents replace their previous postings. A document that
  /// cannot be read keeps whatever postings it already had. Documents that
  /// are no longer part of the corpus are removed. Fails with
  /// `IndexUnavailable` when no corpus document ends up in the index.
  pub fn update<A: IndexAdapter>(&self, index: &mut A, corpus: &dyn Corpus) -> Result<BuildReport> {
    let ids = corpus.ids();
    let mut report = BuildReport::default();

    for id in &ids {
      match corpus.read(id) {
        Ok(text) => {
          index.upsert(id, &text);
          report.indexed.push(id.clone());
        }
        Err(e) => {
          warn!(
            target: "docseek::index",
            document = %id,
            error = %e,
            "Failed to index document"
          );
          report.failed.push((id.clone(), e.to_string()));
        }
      }
    }

    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    for stale in index.documents() {
      if !wanted.contains(stale.as_str()) {
        index.remove(&stale);
        report.removed.push(stale);
      }
    }

    index.reorder(&ids);
    index.commit(&self.bm25);

    if index.doc_count() == 0 {
      return Err(SearchError::index_unavailable(format!(
        "none of the {} corpus documents could be indexed",
        ids.len()
      )));
    }

    info!(
      target: "docseek::index",
      indexed = report.indexed.len(),
      failed = report.failed.len(),
      removed = report.removed.len(),
      terms = index.term_count(),
      "Index built"
    );

    Ok(report)
  }
}

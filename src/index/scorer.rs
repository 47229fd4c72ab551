//! Scores and ranks indexed documents for a query.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index::adapter::IndexAdapter;
use crate::index::query::{Query, QueryParser};
use crate::searchers::bm25::Bm25;
use crate::types::{FileResult, SearchResult};
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// Evaluates queries against a committed index.
///
/// Every indexed document matches with `base_weight`. Each query term a
/// document contains adds `idf(term) * weight(posting)`. Documents are
/// returned best first, at most `max_hits` of them.
#[derive(Debug, Clone)]
pub struct QueryScorer {
  max_hits: usize,
  base_weight: f32,
  bm25: Bm25,
}

impl Default for QueryScorer {
  fn default() -> Self {
    Self::from_config(&SearchConfig::default())
  }
}

impl QueryScorer {
  /// Creates a scorer from `config`.
  pub fn from_config(config: &SearchConfig) -> Self {
    Self {
      max_hits: config.max_hits,
      base_weight: config.base_weight,
      bm25: Bm25::from(config),
    }
  }

  /// Maximum number of results returned.
  pub fn max_hits(&self) -> usize {
    self.max_hits
  }

  /// Computes the score of every indexed document, in index order.
  pub fn scores<A: IndexAdapter>(&self, index: &A, query: &Query) -> Result<Vec<FileResult>> {
    if !index.is_committed() {
      return Err(SearchError::index_unavailable(
        "index has uncommitted changes",
      ));
    }

    let documents = index.documents();
    let positions: HashMap<&str, usize> = documents
      .iter()
      .enumerate()
      .map(|(i, id)| (id.as_str(), i))
      .collect();
    let mut scores = vec![self.base_weight; documents.len()];
    let total_docs = index.doc_count();

    for term in &query.terms {
      let postings = index.postings(term);
      if postings.is_empty() {
        continue;
      }
      let idf = self.bm25.idf(postings.len(), total_docs);
      for posting in postings {
        if let Some(&pos) = positions.get(posting.document.as_str()) {
          scores[pos] += idf * posting.weight;
        }
      }
    }

    Ok(
      documents
        .into_iter()
        .zip(scores)
        .map(|(id, score)| FileResult::score(id, score))
        .collect(),
    )
  }

  /// Scores, ranks and truncates, timing only the search itself.
  pub fn search<A: IndexAdapter>(&self, index: &A, query: &Query) -> Result<SearchResult> {
    let start = Instant::now();
    let scored = self.scores(index, query)?;
    let result = SearchResult::ranked(scored, start.elapsed()).limit(self.max_hits);
    debug!(
      target: "docseek::search",
      terms = query.terms.len(),
      hits = result.len(),
      elapsed_ms = result.elapsed_ms,
      "Indexed query evaluated"
    );
    Ok(result)
  }

  /// Parses `raw` query syntax and searches `index` with it.
  pub fn query<A: IndexAdapter>(&self, index: &A, raw: &str) -> Result<SearchResult> {
    let query = QueryParser::parse(raw)?;
    self.search(index, &query)
  }
}

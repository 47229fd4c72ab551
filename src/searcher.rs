//! The `Searcher` trait, the single capability every strategy provides.

use crate::corpus::Corpus;
use crate::error::Result;
use crate::types::{FileResult, SearchResult, Strategy};
use std::time::Instant;
use tracing::warn;

/// Evaluates a phrase against a corpus and returns ranked results.
///
/// Timing is local to each call and returned in the [`SearchResult`].
/// State kept between calls, such as a built index, must be safe to share.
pub trait Searcher: Send + Sync {
  /// The strategy this searcher implements.
  fn kind(&self) -> Strategy;

  /// Searches `corpus` for `phrase`.
  ///
  /// Fails with `InvalidSearchPhrase` when the phrase is empty. Documents
  /// that cannot be read do not fail the search.
  fn search(&self, corpus: &dyn Corpus, phrase: &str) -> Result<SearchResult>;
}

/// Counts matches in every document of `corpus`, in corpus order, and ranks
/// the outcome.
///
/// A document that cannot be read is logged and recorded with a count of
/// zero, so the result always holds one entry per document. The elapsed time
/// covers reading and counting, from the first document to the last.
pub(crate) fn count_documents<F>(corpus: &dyn Corpus, kind: Strategy, mut count: F) -> SearchResult
where
  F: FnMut(&str) -> u64,
{
  let ids = corpus.ids();
  let mut results = Vec::with_capacity(ids.len());

  let start = Instant::now();
  for id in ids {
    let matches = match corpus.read(&id) {
      Ok(text) => count(&text),
      Err(e) => {
        warn!(
          target: "docseek::search",
          document = %id,
          strategy = %kind,
          error = %e,
          "Skipping unreadable document"
        );
        0
      }
    };
    results.push(FileResult::count(id, matches));
  }
  let elapsed = start.elapsed();

  SearchResult::ranked(results, elapsed)
}

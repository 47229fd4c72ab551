//! A `Searcher` implementation backed by an inverted index.

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::index::{
  BuildReport, IndexAdapter, IndexBuilder, IndexStore, InvertedIndex, QueryParser, QueryScorer,
};
use crate::searcher::Searcher;
use crate::types::{validate_phrase, SearchResult, Strategy};
use once_cell::sync::OnceCell;
use tracing::warn;

/// Searches through an inverted index built from the corpus.
///
/// The index is built the first time the searcher is used and reused for
/// every later query, so index construction never counts towards a
/// search's elapsed time. When an index directory is configured, the
/// persisted index is loaded, refreshed against the corpus and saved back.
/// A failed save is logged and the index stays in memory.
pub struct IndexedSearcher {
  config: SearchConfig,
  builder: IndexBuilder,
  scorer: QueryScorer,
  index: OnceCell<InvertedIndex>,
  report: OnceCell<BuildReport>,
}

impl IndexedSearcher {
  /// Creates a searcher that builds its index on first use.
  pub fn new(config: SearchConfig) -> Self {
    Self {
      builder: IndexBuilder::from_config(&config),
      scorer: QueryScorer::from_config(&config),
      config,
      index: OnceCell::new(),
      report: OnceCell::new(),
    }
  }

  /// Creates a searcher over an index that is already built.
  ///
  /// Fails with `IndexUnavailable` if the index has uncommitted changes.
  pub fn with_index(config: SearchConfig, index: InvertedIndex) -> Result<Self> {
    if !index.is_committed() {
      return Err(SearchError::index_unavailable("index has uncommitted changes"));
    }
    let searcher = Self::new(config);
    let _ = searcher.index.set(index);
    Ok(searcher)
  }

  /// The index, if it has been built.
  pub fn index(&self) -> Option<&InvertedIndex> {
    self.index.get()
  }

  /// Outcome of the index build, if this searcher built its index.
  pub fn build_report(&self) -> Option<&BuildReport> {
    self.report.get()
  }

  /// Returns the index, building it from `corpus` on first use.
  pub fn ensure_index(&self, corpus: &dyn Corpus) -> Result<&InvertedIndex> {
    self.index.get_or_try_init(|| self.build(corpus))
  }

  fn build(&self, corpus: &dyn Corpus) -> Result<InvertedIndex> {
    let store = self.config.index_dir.as_ref().map(|dir| IndexStore::new(dir.clone()));

    let mut index = match store.as_ref().map(IndexStore::load) {
      Some(Ok(Some(index))) => index,
      Some(Err(e)) => {
        warn!(
          target: "docseek::index",
          error = %e,
          "Discarding unreadable persisted index"
        );
        InvertedIndex::new()
      }
      Some(Ok(None)) | None => InvertedIndex::new(),
    };

    let report = self.builder.update(&mut index, corpus)?;
    let _ = self.report.set(report);

    if let Some(store) = &store {
      if let Err(e) = store.save(&index) {
        warn!(
          target: "docseek::index",
          path = %store.index_path().display(),
          error = %e,
          "Keeping index in memory only"
        );
      }
    }
    Ok(index)
  }

  /// Runs raw query syntax against the index without escaping it.
  ///
  /// A query that does not parse is logged and yields an empty, unmeasured
  /// result rather than an error.
  pub fn search_raw(&self, corpus: &dyn Corpus, raw: &str) -> Result<SearchResult> {
    validate_phrase(raw)?;
    let index = self.ensure_index(corpus)?;
    match QueryParser::parse(raw) {
      Ok(query) => self.scorer.search(index, &query),
      Err(e) => {
        warn!(
          target: "docseek::search",
          query = %raw,
          error = %e,
          "Ignoring unparsable query"
        );
        Ok(SearchResult::empty())
      }
    }
  }
}

impl Searcher for IndexedSearcher {
  fn kind(&self) -> Strategy {
    Strategy::Indexed
  }

  /// Searches for `phrase` as literal text.
  fn search(&self, corpus: &dyn Corpus, phrase: &str) -> Result<SearchResult> {
    self.search_raw(corpus, &QueryParser::escape(phrase))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::corpus::MemoryCorpus;

  fn corpus() -> MemoryCorpus {
    MemoryCorpus::new()
      .with("a", "a quiet afternoon")
      .with("b", "the warp drive hums")
      .with("c", "warp warp")
      .with("d", "nothing")
  }

  #[test]
  fn test_builds_index_once() {
    let searcher = IndexedSearcher::new(SearchConfig::default());
    assert!(searcher.index().is_none());
    let corpus = corpus();

    let first = searcher.search(&corpus, "warp").unwrap();
    let built = searcher.index().unwrap() as *const InvertedIndex;
    let second = searcher.search(&corpus, "warp").unwrap();

    assert_eq!(built, searcher.index().unwrap() as *const InvertedIndex);
    assert_eq!(first.results(), second.results());
    assert_eq!(first.len(), 3);
    assert_eq!(first.results()[0].document, "c");
  }

  #[test]
  fn test_quotes_in_phrase_are_literal() {
    let searcher = IndexedSearcher::new(SearchConfig::default());
    let result = searcher.search(&corpus(), "\"warp").unwrap();
    assert_eq!(result.results()[0].document, "c");
  }

  #[test]
  fn test_raw_parse_error_yields_empty_result() {
    let searcher = IndexedSearcher::new(SearchConfig::default());
    let result = searcher.search_raw(&corpus(), "\"warp").unwrap();
    assert!(result.is_empty());
    assert!(!result.is_measured());
  }

  #[test]
  fn test_empty_phrase_rejected() {
    let searcher = IndexedSearcher::new(SearchConfig::default());
    assert!(matches!(
      searcher.search(&corpus(), " "),
      Err(SearchError::InvalidSearchPhrase { .. })
    ));
  }

  #[test]
  fn test_empty_corpus_is_unavailable() {
    let searcher = IndexedSearcher::new(SearchConfig::default());
    assert!(matches!(
      searcher.search(&MemoryCorpus::new(), "warp"),
      Err(SearchError::IndexUnavailable { .. })
    ));
  }

  #[test]
  fn test_with_index_requires_commit() {
    let mut index = InvertedIndex::new();
    index.upsert("a", "text");
    assert!(IndexedSearcher::with_index(SearchConfig::default(), index).is_err());
  }

  #[test]
  fn test_persists_and_reloads_index() {
    let dir = tempfile::tempdir().unwrap();
    let config = SearchConfig::default().index_dir(dir.path().join("indexedFiles"));

    let first = IndexedSearcher::new(config.clone());
    let before = first.search(&corpus(), "warp drive").unwrap();
    assert!(dir.path().join("indexedFiles").join("index.json").exists());

    let second = IndexedSearcher::new(config);
    let after = second.search(&corpus(), "warp drive").unwrap();
    assert_eq!(before.results(), after.results());
    assert_eq!(first.index(), second.index());
  }

  #[test]
  fn test_unwritable_index_dir_keeps_index_in_memory() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let searcher = IndexedSearcher::new(SearchConfig::default().index_dir(file.path()));
    let result = searcher.search(&corpus(), "warp").unwrap();
    assert_eq!(result.results()[0].document, "c");
    assert!(searcher.index().is_some());
  }

  #[test]
  fn test_build_report_is_kept() {
    let searcher = IndexedSearcher::new(SearchConfig::default());
    assert!(searcher.build_report().is_none());
    searcher.ensure_index(&corpus()).unwrap();
    let report = searcher.build_report().unwrap();
    assert_eq!(report.indexed, vec!["a", "b", "c", "d"]);
    assert!(report.is_complete());
  }

  #[test]
  fn test_corrupt_persisted_index_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.json"), "garbage").unwrap();
    let searcher = IndexedSearcher::new(SearchConfig::default().index_dir(dir.path()));
    let result = searcher.search(&corpus(), "warp").unwrap();
    assert_eq!(result.results()[0].document, "c");
  }
}

//! The search engine that dispatches requests to a strategy.

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{BuildReport, InvertedIndex};
use crate::searcher::Searcher;
use crate::searchers::{IndexedSearcher, RegexMatcher, StringMatcher};
use crate::types::{SearchRequest, SearchResult, Strategy};
use tracing::debug;

/// Runs searches against one corpus with any of the three strategies.
///
/// String and regex searches scan the corpus on every call. Indexed
/// searches build the inverted index the first time they run and reuse it
/// afterwards.
///
/// Create a `SearchEngine` using the [`SearchEngineBuilder`].
///
/// # Examples
///
/// ```rust
/// use docseek::prelude::*;
///
/// let corpus = MemoryCorpus::new()
///     .with("french_armed_forces.txt", "The army is in the field")
///     .with("warp_drive.txt", "The drive is fast");
///
/// let engine = SearchEngine::builder(corpus).build().unwrap();
///
/// let request = SearchRequest::new("is", Strategy::Regex).unwrap();
/// let result = engine.search(&request).unwrap();
/// assert_eq!(result.len(), 2);
///
/// let ranked = engine.perform_indexed_match("field").unwrap();
/// assert_eq!(ranked.results()[0].document, "french_armed_forces.txt");
/// ```
pub struct SearchEngine<C> {
  corpus: C,
  config: SearchConfig,
  string: StringMatcher,
  regex: RegexMatcher,
  indexed: IndexedSearcher,
}

impl<C: Corpus> SearchEngine<C> {
  /// Creates a new `SearchEngineBuilder` for `corpus`.
  pub fn builder(corpus: C) -> SearchEngineBuilder<C> {
    SearchEngineBuilder::new(corpus)
  }

  /// Evaluates a request with the strategy it names.
  pub fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
    let searcher = self.searcher(request.strategy());
    let result = searcher.search(&self.corpus, request.phrase())?;
    debug!(
      target: "docseek::search",
      strategy = %request.strategy(),
      documents = result.len(),
      elapsed_ms = result.elapsed_ms,
      "Search finished"
    );
    Ok(result)
  }

  /// The searcher implementing `strategy`.
  pub fn searcher(&self, strategy: Strategy) -> &dyn Searcher {
    match strategy {
      Strategy::String => &self.string,
      Strategy::Regex => &self.regex,
      Strategy::Indexed => &self.indexed,
    }
  }

  /// Counts exact, case-insensitive occurrences of `phrase` per document.
  pub fn perform_string_match(&self, phrase: &str) -> Result<SearchResult> {
    self.search(&SearchRequest::new(phrase, Strategy::String)?)
  }

  /// Counts whole-word regular expression matches of `phrase` per document.
  pub fn perform_regex_match(&self, phrase: &str) -> Result<SearchResult> {
    self.search(&SearchRequest::new(phrase, Strategy::Regex)?)
  }

  /// Ranks documents by relevance to `phrase` using the inverted index.
  pub fn perform_indexed_match(&self, phrase: &str) -> Result<SearchResult> {
    self.search(&SearchRequest::new(phrase, Strategy::Indexed)?)
  }

  /// Runs raw query syntax against the inverted index.
  ///
  /// Unlike [`perform_indexed_match`](Self::perform_indexed_match) the text
  /// is not escaped, so quotes and backslashes keep their meaning. A query
  /// that does not parse yields an empty result.
  pub fn indexed_query(&self, raw: &str) -> Result<SearchResult> {
    self.indexed.search_raw(&self.corpus, raw)
  }

  /// Builds the inverted index now instead of on the first indexed search.
  pub fn prepare_index(&self) -> Result<&InvertedIndex> {
    self.indexed.ensure_index(&self.corpus)
  }

  /// The inverted index, if it has been built.
  pub fn index(&self) -> Option<&InvertedIndex> {
    self.indexed.index()
  }

  /// Which documents the index build covered and which it could not read.
  ///
  /// `None` until the index is built, and for an index handed to the builder.
  pub fn build_report(&self) -> Option<&BuildReport> {
    self.indexed.build_report()
  }

  /// The corpus being searched.
  pub fn corpus(&self) -> &C {
    &self.corpus
  }

  /// The engine configuration.
  pub fn config(&self) -> &SearchConfig {
    &self.config
  }
}

/// A builder for creating `SearchEngine` instances.
pub struct SearchEngineBuilder<C> {
  corpus: C,
  config: SearchConfig,
  index: Option<InvertedIndex>,
}

impl<C: Corpus> SearchEngineBuilder<C> {
  /// Creates a builder with the default configuration.
  pub fn new(corpus: C) -> Self {
    Self {
      corpus,
      config: SearchConfig::default(),
      index: None,
    }
  }

  /// Sets the configuration.
  pub fn config(mut self, config: SearchConfig) -> Self {
    self.config = config;
    self
  }

  /// Uses an index that has already been built instead of building one.
  pub fn index(mut self, index: InvertedIndex) -> Self {
    self.index = Some(index);
    self
  }

  /// Validates the configuration and builds the engine.
  pub fn build(self) -> Result<SearchEngine<C>> {
    self.config.validate()?;
    let indexed = match self.index {
      Some(index) => IndexedSearcher::with_index(self.config.clone(), index)?,
      None => IndexedSearcher::new(self.config.clone()),
    };
    Ok(SearchEngine {
      corpus: self.corpus,
      config: self.config,
      string: StringMatcher::new(),
      regex: RegexMatcher::new(),
      indexed,
    })
  }
}

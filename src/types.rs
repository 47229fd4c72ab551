//! Core data types for docseek.

use crate::error::{Result, SearchError};
use crate::ranker;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Type alias for document identifiers.
///
/// For file-backed corpora this is the path as displayed; for in-memory
/// corpora it is whatever name the caller chose. Identifiers are unique
/// within a corpus.
pub type DocumentId = String;

/// Sentinel stored in [`SearchResult::elapsed_ms`] before a search has been timed.
pub const NOT_MEASURED: i64 = -1;

/// A document handed to the core by a corpus.
///
/// The core only reads documents; it never mutates or persists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  /// Unique identifier of the document.
  pub id: DocumentId,
  /// The full text of the document.
  pub text: String,
}

impl Document {
  /// Creates a new document.
  pub fn new(id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      text: text.into(),
    }
  }
}

/// The available matching strategies.
///
/// The engine dispatches on this enum; each variant maps to exactly one
/// [`Searcher`](crate::searcher::Searcher) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
  /// Exact, case-insensitive token sequence matching.
  String,
  /// Case-insensitive, whole-word regular expression matching.
  Regex,
  /// Inverted-index lookup with relevance scoring.
  Indexed,
}

impl Strategy {
  /// All strategies, in menu order.
  pub const ALL: [Strategy; 3] = [Strategy::String, Strategy::Regex, Strategy::Indexed];

  /// The lowercase name of the strategy.
  pub fn name(&self) -> &'static str {
    match self {
      Strategy::String => "string",
      Strategy::Regex => "regex",
      Strategy::Indexed => "indexed",
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Strategy {
  type Err = SearchError;

  /// Accepts the strategy name (any case) or its menu number (1-3).
  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "string" | "1" => Ok(Strategy::String),
      "regex" | "2" => Ok(Strategy::Regex),
      "indexed" | "3" => Ok(Strategy::Indexed),
      other => Err(SearchError::Config {
        path: None,
        reason: format!("unknown search strategy '{}'", other),
      }),
    }
  }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
  phrase: String,
  strategy: Strategy,
}

impl SearchRequest {
  /// Creates a request, rejecting empty or whitespace-only phrases.
  pub fn new(phrase: impl Into<String>, strategy: Strategy) -> Result<Self> {
    let phrase = phrase.into();
    validate_phrase(&phrase)?;
    Ok(Self { phrase, strategy })
  }

  /// The phrase to search for.
  pub fn phrase(&self) -> &str {
    &self.phrase
  }

  /// The strategy used to evaluate the phrase.
  pub fn strategy(&self) -> Strategy {
    self.strategy
  }
}

/// Fails with `InvalidSearchPhrase` unless `phrase` contains a non-whitespace character.
pub fn validate_phrase(phrase: &str) -> Result<()> {
  if phrase.trim().is_empty() {
    return Err(SearchError::invalid_phrase("search phrase must not be empty"));
  }
  Ok(())
}

/// The numeric outcome for a single document.
///
/// String and regex matching produce exact counts, indexed search produces
/// a relevance score. Keeping the two apart avoids truncating scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MatchValue {
  /// Number of whole-phrase occurrences.
  Count(u64),
  /// Relevance score, always non-negative.
  Score(f32),
}

impl MatchValue {
  /// The value as a float, for ordering.
  pub fn as_f64(&self) -> f64 {
    match *self {
      MatchValue::Count(n) => n as f64,
      MatchValue::Score(s) => s as f64,
    }
  }

  /// The exact count, if this is a count.
  pub fn count(&self) -> Option<u64> {
    match *self {
      MatchValue::Count(n) => Some(n),
      MatchValue::Score(_) => None,
    }
  }

  /// The relevance score, if this is a score.
  pub fn score(&self) -> Option<f32> {
    match *self {
      MatchValue::Score(s) => Some(s),
      MatchValue::Count(_) => None,
    }
  }
}

/// The outcome of a search for a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
  /// The document this result belongs to.
  pub document: DocumentId,
  /// Match count or relevance score.
  pub value: MatchValue,
}

impl FileResult {
  /// A count result.
  pub fn count(document: impl Into<DocumentId>, count: u64) -> Self {
    Self {
      document: document.into(),
      value: MatchValue::Count(count),
    }
  }

  /// A score result. Negative or NaN scores are clamped to zero.
  pub fn score(document: impl Into<DocumentId>, score: f32) -> Self {
    let score = if score.is_nan() { 0.0 } else { score.max(0.0) };
    Self {
      document: document.into(),
      value: MatchValue::Score(score),
    }
  }
}

impl fmt::Display for FileResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.value {
      MatchValue::Count(n) => write!(f, "{}: {} matches", self.document, n),
      MatchValue::Score(s) => write!(f, "{}: Score: {}", self.document, s),
    }
  }
}

/// Ranked results of one search plus the time spent matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
  results: Vec<FileResult>,
  /// Milliseconds spent in the matching phase, or [`NOT_MEASURED`].
  pub elapsed_ms: i64,
}

impl Default for SearchResult {
  fn default() -> Self {
    Self::empty()
  }
}

impl SearchResult {
  /// An empty, unmeasured result.
  pub fn empty() -> Self {
    Self {
      results: Vec::new(),
      elapsed_ms: NOT_MEASURED,
    }
  }

  /// Ranks `results` and records the elapsed time.
  ///
  /// `results` is expected in corpus order; documents with equal values keep
  /// that order.
  pub fn ranked(mut results: Vec<FileResult>, elapsed: Duration) -> Self {
    ranker::rank(&mut results);
    Self {
      results,
      elapsed_ms: duration_ms(elapsed),
    }
  }

  /// Keeps only the `limit` best-ranked entries.
  pub fn limit(mut self, limit: usize) -> Self {
    self.results.truncate(limit);
    self
  }

  /// The ranked results.
  pub fn results(&self) -> &[FileResult] {
    &self.results
  }

  /// Consumes the result, returning the ranked entries.
  pub fn into_results(self) -> Vec<FileResult> {
    self.results
  }

  /// Number of entries.
  pub fn len(&self) -> usize {
    self.results.len()
  }

  /// Whether there are no entries.
  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }

  /// Whether the elapsed time has been recorded.
  pub fn is_measured(&self) -> bool {
    self.elapsed_ms != NOT_MEASURED
  }

  /// Looks up the entry for a document.
  pub fn get(&self, document: &str) -> Option<&FileResult> {
    self.results.iter().find(|r| r.document == document)
  }
}

impl fmt::Display for SearchResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for result in &self.results {
      writeln!(f, "{}", result)?;
    }
    write!(f, "Elapsed time: {} ms", self.elapsed_ms)
  }
}

fn duration_ms(elapsed: Duration) -> i64 {
  i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
}

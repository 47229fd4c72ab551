//! Exact token-sequence matching.

use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::searcher::{count_documents, Searcher};
use crate::searchers::tokenizer::whitespace_tokens;
use crate::types::{SearchResult, Strategy};

/// Counts case-insensitive occurrences of a whitespace-tokenized phrase.
///
/// A document matches where its tokens equal the phrase tokens one for one,
/// in order. Matches never overlap: once a phrase is found, scanning resumes
/// after its last token.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMatcher;

impl StringMatcher {
  /// Creates a new string matcher.
  pub fn new() -> Self {
    Self
  }

  /// Splits `phrase` into lowercase tokens, rejecting empty phrases.
  pub fn phrase_tokens(phrase: &str) -> Result<Vec<String>> {
    let tokens: Vec<String> = whitespace_tokens(phrase)
      .into_iter()
      .map(str::to_lowercase)
      .collect();
    if tokens.is_empty() {
      return Err(SearchError::invalid_phrase("search phrase must not be empty"));
    }
    Ok(tokens)
  }

  /// Counts non-overlapping occurrences of `phrase` (already lowercased
  /// tokens) in `text`.
  pub fn count_in(phrase: &[String], text: &str) -> u64 {
    if phrase.is_empty() {
      return 0;
    }

    let doc: Vec<String> = whitespace_tokens(text)
      .into_iter()
      .map(str::to_lowercase)
      .collect();

    let mut count = 0;
    let mut pos = 0;
    while pos + phrase.len() <= doc.len() {
      if doc[pos..pos + phrase.len()] == *phrase {
        count += 1;
        pos += phrase.len();
      } else {
        pos += 1;
      }
    }
    count
  }
}

impl Searcher for StringMatcher {
  fn kind(&self) -> Strategy {
    Strategy::String
  }

  fn search(&self, corpus: &dyn Corpus, phrase: &str) -> Result<SearchResult> {
    let tokens = Self::phrase_tokens(phrase)?;
    Ok(count_documents(corpus, self.kind(), |text| {
      Self::count_in(&tokens, text)
    }))
  }
}

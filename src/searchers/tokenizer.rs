//! Text tokenization utilities.
//!
//! Two rules live here. Phrase matching splits on whitespace and compares
//! tokens verbatim after lowercasing. The index uses word segmentation with
//! case folding, for both documents and queries.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Split a phrase or document into whitespace-delimited tokens.
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
  text.split_whitespace().collect()
}

/// Tokenize text into lowercase words for indexing and querying.
pub fn tokenize(text: &str) -> Vec<String> {
  text
    .unicode_words()
    .map(|word| word.to_lowercase())
    .collect()
}

/// Calculate term frequencies for a text.
pub fn term_frequencies(text: &str) -> HashMap<String, u32> {
  let mut freqs = HashMap::new();
  for token in tokenize(text) {
    *freqs.entry(token).or_insert(0) += 1;
  }
  freqs
}

//! Whole-word regular expression matching.

use crate::corpus::Corpus;
use crate::error::Result;
use crate::searcher::{count_documents, Searcher};
use crate::searchers::tokenizer::whitespace_tokens;
use crate::types::{validate_phrase, SearchResult, Strategy};
use regex::{Regex, RegexBuilder};

/// Characters that are escaped so a phrase is matched literally.
///
/// This is the set of characters the regex syntax treats as special, plus
/// the double quote.
pub const ESCAPED_CHARS: &[char] = &[
  '?', '.', '[', ']', '(', ')', '&', '"', '\\', '*', '+', '^', '$', '|', '{', '}', '#', '-', '~',
];

/// Prefixes every special character in `phrase` with a backslash.
pub fn escape_phrase(phrase: &str) -> String {
  let mut escaped = String::with_capacity(phrase.len());
  for c in phrase.chars() {
    if ESCAPED_CHARS.contains(&c) {
      escaped.push('\\');
    }
    escaped.push(c);
  }
  escaped
}

/// Counts case-insensitive, whole-word occurrences of a literal phrase.
///
/// Each line of a document is matched on its own, so a phrase never matches
/// across a line break. Matches on a line do not overlap. Words of the
/// phrase match across any run of whitespace, the way the string matcher
/// tokenizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl RegexMatcher {
  /// Creates a new regex matcher.
  pub fn new() -> Self {
    Self
  }

  /// Compiles `phrase` into a case-insensitive pattern bounded by word
  /// boundaries on both sides.
  pub fn compile(phrase: &str) -> Result<Regex> {
    validate_phrase(phrase)?;
    let words: Vec<String> = whitespace_tokens(phrase)
      .into_iter()
      .map(escape_phrase)
      .collect();
    let pattern = format!(r"\b{}\b", words.join(r"\s+"));
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
  }

  /// Sums the matches of `pattern` over every line of `text`.
  pub fn count_in(pattern: &Regex, text: &str) -> u64 {
    text
      .lines()
      .map(|line| pattern.find_iter(line).count() as u64)
      .sum()
  }
}

impl Searcher for RegexMatcher {
  fn kind(&self) -> Strategy {
    Strategy::Regex
  }

  fn search(&self, corpus: &dyn Corpus, phrase: &str) -> Result<SearchResult> {
    let pattern = Self::compile(phrase)?;
    Ok(count_documents(corpus, self.kind(), |text| {
      Self::count_in(&pattern, text)
    }))
  }
}

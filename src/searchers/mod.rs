//! The built-in `Searcher` implementations, one per [`Strategy`](crate::types::Strategy).
//!
//! - [`StringMatcher`](crate::searchers::StringMatcher): exact, case-insensitive token sequences.
//! - [`RegexMatcher`](crate::searchers::RegexMatcher): whole-word, case-insensitive regular expressions.
//! - [`IndexedSearcher`](crate::searchers::IndexedSearcher): inverted index with relevance scoring.
//!
//! # Example
//!
//! ```rust
//! use docseek::prelude::*;
//!
//! let corpus = MemoryCorpus::new()
//!     .with("a.txt", "The cat sat in the hat")
//!     .with("b.txt", "in the end");
//!
//! let result = StringMatcher::new().search(&corpus, "in the").unwrap();
//! assert_eq!(result.results()[0].value, MatchValue::Count(1));
//! ```

/// Implements BM25 term weighting.
pub mod bm25;
/// Implements the inverted-index searcher.
pub mod indexed;
/// Implements whole-word regular expression matching.
pub mod regex;
/// Implements exact token-sequence matching.
pub mod string;
/// Provides text tokenization utilities for searchers.
pub mod tokenizer;

pub use self::regex::RegexMatcher;
pub use indexed::IndexedSearcher;
pub use string::StringMatcher;

//! Docseek - phrase search over a corpus of plain-text documents.
//!
//! Docseek answers one question three ways: how well does each document in
//! a corpus match a phrase?
//!
//! - **String** matching counts exact, case-insensitive token sequences.
//! - **Regex** matching counts whole-word, case-insensitive occurrences.
//! - **Indexed** search ranks documents by relevance through an inverted
//!   index and returns only the best few.
//!
//! All three produce the same [`SearchResult`](types::SearchResult) shape,
//! ordered best first.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod ranker;
pub mod searcher;
pub mod searchers;
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::config::*;
  pub use crate::corpus::*;
  pub use crate::engine::*;
  pub use crate::error::{Result, SearchError};
  pub use crate::index::{
    BuildReport, IndexAdapter, IndexBuilder, IndexStore, InvertedIndex, Posting, Query, QueryParser,
    QueryScorer,
  };
  pub use crate::searcher::Searcher;
  pub use crate::searchers::{IndexedSearcher, RegexMatcher, StringMatcher};
  pub use crate::types::*;
}

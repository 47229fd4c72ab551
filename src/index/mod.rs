//! Inverted index construction, persistence and querying.

pub mod adapter;
pub mod builder;
pub mod memory;
pub mod query;
pub mod scorer;
pub mod store;

pub use adapter::{IndexAdapter, Posting};
pub use builder::{BuildReport, IndexBuilder};
pub use memory::InvertedIndex;
pub use query::{Query, QueryParser};
pub use scorer::QueryScorer;
pub use store::IndexStore;

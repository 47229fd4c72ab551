//! Defines the `IndexAdapter` trait for pluggable inverted-index backends.

use crate::searchers::bm25::Bm25;
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};

/// One document's entry in a term's posting list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
  /// The document containing the term.
  pub document: DocumentId,
  /// How often the term occurs in the document.
  pub tf: u32,
  /// Precomputed term-frequency weight, refreshed on commit.
  pub weight: f32,
}

/// The common interface of an inverted index.
///
/// `IndexAdapter` separates the index builder and query scorer from the
/// storage of postings, so a different backend can be substituted for the
/// in-memory [`InvertedIndex`](crate::index::InvertedIndex).
///
/// Writes go through [`upsert`](IndexAdapter::upsert) and
/// [`remove`](IndexAdapter::remove), and become queryable after
/// [`commit`](IndexAdapter::commit). Readers only need `&self`, so a
/// committed index can be shared between threads.
pub trait IndexAdapter: Send + Sync {
  /// Adds a document or replaces all postings of an existing one.
  ///
  /// A replaced document keeps its position in index order.
  fn upsert(&mut self, id: &str, text: &str);

  /// Removes a document and its postings. Returns whether it was present.
  fn remove(&mut self, id: &str) -> bool;

  /// Rearranges index order to follow `order`. Documents not listed move
  /// after the listed ones, keeping their relative order.
  fn reorder(&mut self, order: &[DocumentId]);

  /// Recomputes posting weights and marks the index as queryable.
  fn commit(&mut self, bm25: &Bm25);

  /// Whether every write has been committed.
  fn is_committed(&self) -> bool;

  /// Whether a document is indexed.
  fn contains(&self, id: &str) -> bool;

  /// Indexed document identifiers, in index order.
  fn documents(&self) -> Vec<DocumentId>;

  /// The postings of `term`, empty when the term is unknown.
  fn postings(&self, term: &str) -> &[Posting];

  /// Number of indexed documents.
  fn doc_count(&self) -> usize;

  /// Number of distinct terms.
  fn term_count(&self) -> usize;
}

//! In-memory inverted index implementation.

use crate::index::adapter::{IndexAdapter, Posting};
use crate::searchers::bm25::Bm25;
use crate::searchers::tokenizer::term_frequencies;
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Per-document bookkeeping needed for weighting and removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct IndexedDocument {
  id: DocumentId,
  /// Length in tokens.
  length: u32,
  /// Distinct terms, sorted.
  terms: Vec<String>,
}

/// In-memory inverted index mapping each term to its postings.
///
/// Terms are kept in a `BTreeMap`, each posting list sorted by document
/// identifier and documents in insertion order until
/// [`reorder`](IndexAdapter::reorder) arranges them, so the same documents
/// always produce the same index regardless of how often they were re-indexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
  documents: Vec<IndexedDocument>,
  postings: BTreeMap<String, Vec<Posting>>,
  committed: bool,
}

impl InvertedIndex {
  /// Create a new empty index.
  pub fn new() -> Self {
    Self::default()
  }

  /// Average document length in tokens.
  pub fn avg_doc_len(&self) -> f32 {
    if self.documents.is_empty() {
      return 0.0;
    }
    let total: u64 = self.documents.iter().map(|d| d.length as u64).sum();
    total as f32 / self.documents.len() as f32
  }

  /// Length in tokens of an indexed document.
  pub fn doc_len(&self, id: &str) -> Option<u32> {
    self.documents.iter().find(|d| d.id == id).map(|d| d.length)
  }

  /// Position of a document in index order.
  pub fn position(&self, id: &str) -> Option<usize> {
    self.documents.iter().position(|d| d.id == id)
  }

  fn drop_postings(&mut self, terms: &[String], id: &str) {
    for term in terms {
      if let Some(list) = self.postings.get_mut(term) {
        list.retain(|p| p.document != id);
        if list.is_empty() {
          self.postings.remove(term);
        }
      }
    }
  }
}

impl IndexAdapter for InvertedIndex {
  fn upsert(&mut self, id: &str, text: &str) {
    let freqs = term_frequencies(text);
    let length: u32 = freqs.values().sum();
    let mut terms: Vec<String> = freqs.keys().cloned().collect();
    terms.sort();

    let entry = IndexedDocument {
      id: id.to_string(),
      length,
      terms,
    };
    match self.position(id) {
      Some(pos) => {
        let previous = std::mem::replace(&mut self.documents[pos], entry);
        self.drop_postings(&previous.terms, id);
      }
      None => self.documents.push(entry),
    }

    for (term, tf) in freqs {
      let list = self.postings.entry(term).or_default();
      let at = match list.binary_search_by(|p| p.document.as_str().cmp(id)) {
        Ok(at) | Err(at) => at,
      };
      list.insert(
        at,
        Posting {
          document: id.to_string(),
          tf,
          weight: 0.0,
        },
      );
    }
    self.committed = false;
  }

  fn remove(&mut self, id: &str) -> bool {
    match self.position(id) {
      Some(pos) => {
        let removed = self.documents.remove(pos);
        self.drop_postings(&removed.terms, id);
        self.committed = false;
        true
      }
      None => false,
    }
  }

  fn reorder(&mut self, order: &[DocumentId]) {
    let rank: HashMap<&str, usize> = order
      .iter()
      .enumerate()
      .map(|(i, id)| (id.as_str(), i))
      .collect();
    self
      .documents
      .sort_by_key(|d| rank.get(d.id.as_str()).copied().unwrap_or(usize::MAX));
  }

  fn commit(&mut self, bm25: &Bm25) {
    let avg = self.avg_doc_len();
    let lengths: BTreeMap<&str, u32> = self
      .documents
      .iter()
      .map(|d| (d.id.as_str(), d.length))
      .collect();

    for list in self.postings.values_mut() {
      for posting in list.iter_mut() {
        let len = lengths.get(posting.document.as_str()).copied().unwrap_or(0);
        posting.weight = bm25.tf_weight(posting.tf, len, avg);
      }
    }
    self.committed = true;
  }

  fn is_committed(&self) -> bool {
    self.committed
  }

  fn contains(&self, id: &str) -> bool {
    self.position(id).is_some()
  }

  fn documents(&self) -> Vec<DocumentId> {
    self.documents.iter().map(|d| d.id.clone()).collect()
  }

  fn postings(&self, term: &str) -> &[Posting] {
    self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
  }

  fn doc_count(&self) -> usize {
    self.documents.len()
  }

  fn term_count(&self) -> usize {
    self.postings.len()
  }
}

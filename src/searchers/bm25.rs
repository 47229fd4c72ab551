//! Okapi BM25 term weighting.
//!
//! The index stores the term-frequency part of the weight with every
//! posting and the scorer multiplies it by the inverse document frequency of
//! the term at query time.

use crate::config::SearchConfig;

/// BM25 parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25 {
  /// The `k1` parameter controls the term frequency saturation. A higher value
  /// means that the score continues to increase with term frequency, while a
  /// lower value means the score saturates more quickly.
  pub k1: f32,
  /// The `b` parameter controls the document length normalization. A value of
  /// 0.0 means no length normalization, while a value of 1.0 means full
  /// normalization.
  pub b: f32,
}

impl Default for Bm25 {
  fn default() -> Self {
    Self::from(&SearchConfig::default())
  }
}

impl From<&SearchConfig> for Bm25 {
  fn from(config: &SearchConfig) -> Self {
    Self {
      k1: config.k1,
      b: config.b,
    }
  }
}

impl Bm25 {
  /// Creates a weighting with explicit parameters.
  pub fn new(k1: f32, b: f32) -> Self {
    Self { k1, b }
  }

  /// The saturated, length-normalized term frequency.
  ///
  /// Never decreases as `tf` grows, and is zero when `tf` is zero.
  pub fn tf_weight(&self, tf: u32, doc_len: u32, avg_doc_len: f32) -> f32 {
    if tf == 0 {
      return 0.0;
    }
    let tf = tf as f32;
    let length_ratio = if avg_doc_len > 0.0 {
      doc_len as f32 / avg_doc_len
    } else {
      1.0
    };
    (tf * (self.k1 + 1.0)) / (tf + self.k1 * (1.0 - self.b + self.b * length_ratio))
  }

  /// Inverse document frequency of a term found in `doc_freq` out of
  /// `total_docs` documents.
  ///
  /// Always positive, and larger for rarer terms.
  pub fn idf(&self, doc_freq: usize, total_docs: usize) -> f32 {
    let n = total_docs as f32;
    let df = doc_freq as f32;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tf_weight_monotonic() {
    let bm25 = Bm25::default();
    let mut previous = 0.0;
    for tf in 0..50 {
      let weight = bm25.tf_weight(tf, 100, 80.0);
      assert!(weight >= previous, "tf={} weight={} previous={}", tf, weight, previous);
      previous = weight;
    }
  }

  #[test]
  fn test_tf_weight_saturates() {
    let bm25 = Bm25::new(1.2, 0.0);
    assert!(bm25.tf_weight(1000, 1000, 10.0) < bm25.k1 + 1.0);
  }

  #[test]
  fn test_idf_prefers_rare_terms() {
    let bm25 = Bm25::default();
    assert!(bm25.idf(1, 10) > bm25.idf(5, 10));
    assert!(bm25.idf(10, 10) > 0.0);
  }

  #[test]
  fn test_length_normalization() {
    let bm25 = Bm25::new(1.2, 0.75);
    assert!(bm25.tf_weight(2, 10, 20.0) > bm25.tf_weight(2, 40, 20.0));
    let flat = Bm25::new(1.2, 0.0);
    assert_eq!(flat.tf_weight(2, 10, 20.0), flat.tf_weight(2, 40, 20.0));
  }
}

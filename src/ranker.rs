//! Ordering rule shared by every strategy.
//!
//! Results are ordered by descending count or score. Equal values keep the
//! order they were produced in, which is corpus order for every matcher, so
//! the ranking is a proper total order and repeatable across runs.

use crate::types::FileResult;
use std::cmp::Ordering;

/// Compares two results so that the higher value ranks first.
pub fn by_relevance(a: &FileResult, b: &FileResult) -> Ordering {
  b.value.as_f64().total_cmp(&a.value.as_f64())
}

/// Sorts `results` in place by descending value, stable on ties.
pub fn rank(results: &mut [FileResult]) {
  results.sort_by(by_relevance);
}

//! Query parsing for indexed search.
//!
//! The syntax is deliberately small. Whitespace separates clauses, a
//! backslash makes the next character literal and double quotes group text
//! into one clause. Every clause is run through the index analyzer and each
//! resulting term becomes an optional clause of the query.

use crate::error::{Result, SearchError};
use crate::searchers::tokenizer::tokenize;
use serde::Serialize;

/// Characters with a meaning in query syntax.
pub const SYNTAX_CHARS: &[char] = &['\\', '"'];

/// A parsed query: a disjunction of analyzed terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
  /// Clause texts after unescaping, in query order.
  pub clauses: Vec<String>,
  /// Lowercase terms, in query order. Repeated terms are kept and each
  /// occurrence contributes to the score.
  pub terms: Vec<String>,
}

impl Query {
  /// Whether the query has no terms and therefore only matches everything.
  pub fn is_match_all(&self) -> bool {
    self.terms.is_empty()
  }
}

/// Parses raw query text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
  /// Parses `raw` into a [`Query`].
  ///
  /// Fails with `QueryParseError` on a trailing backslash or an
  /// unterminated quote.
  pub fn parse(raw: &str) -> Result<Query> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut quote_start: Option<usize> = None;
    let mut chars = raw.char_indices();

    while let Some((pos, c)) = chars.next() {
      match c {
        '\\' => match chars.next() {
          Some((_, escaped)) => current.push(escaped),
          None => return Err(parse_error(raw, pos, "escape character at end of query")),
        },
        '"' => match quote_start {
          Some(_) => {
            quote_start = None;
            flush(&mut current, &mut clauses);
          }
          None => {
            flush(&mut current, &mut clauses);
            quote_start = Some(pos);
          }
        },
        c if c.is_whitespace() && quote_start.is_none() => flush(&mut current, &mut clauses),
        c => current.push(c),
      }
    }

    if let Some(pos) = quote_start {
      return Err(parse_error(raw, pos, "unterminated quote"));
    }
    flush(&mut current, &mut clauses);

    let terms = clauses.iter().flat_map(|clause| tokenize(clause)).collect();
    Ok(Query { clauses, terms })
  }

  /// Escapes every syntax character so `text` parses as literal text.
  pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
      if SYNTAX_CHARS.contains(&c) {
        escaped.push('\\');
      }
      escaped.push(c);
    }
    escaped
  }
}

fn flush(current: &mut String, clauses: &mut Vec<String>) {
  if !current.is_empty() {
    clauses.push(std::mem::take(current));
  }
}

fn parse_error(raw: &str, position: usize, reason: &str) -> SearchError {
  SearchError::QueryParseError {
    query: raw.to_string(),
    position,
    reason: reason.to_string(),
  }
}

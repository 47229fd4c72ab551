use docseek::prelude::*;
use std::path::{Path, PathBuf};

const FRENCH: &str = "french_armed_forces.txt";
const HITCHHIKERS: &str = "hitchhikers.txt";
const WARP: &str = "warp_drive.txt";

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

fn fixtures() -> FileCorpus {
  FileCorpus::from_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")).unwrap()
}

fn engine() -> SearchEngine<FileCorpus> {
  SearchEngine::builder(fixtures()).build().unwrap()
}

fn file_name(result: &FileResult) -> String {
  Path::new(&result.document)
    .file_name()
    .unwrap()
    .to_string_lossy()
    .into_owned()
}

fn ranking(result: &SearchResult) -> Vec<(String, u64)> {
  result
    .results()
    .iter()
    .map(|r| (file_name(r), r.value.count().unwrap()))
    .collect()
}

#[test]
fn test_fixture_directory_is_sorted() {
  let corpus = fixtures();
  let names: Vec<_> = corpus
    .paths()
    .iter()
    .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
    .collect();
  assert_eq!(names, vec![FRENCH, HITCHHIKERS, WARP]);
}

#[test]
fn test_string_match_in_the() {
  let result = engine().perform_string_match("in the").unwrap();
  assert_eq!(
    ranking(&result),
    vec![
      (FRENCH.to_string(), 15),
      (HITCHHIKERS.to_string(), 2),
      (WARP.to_string(), 1),
    ]
  );
  assert!(result.is_measured());
  assert!(result.elapsed_ms >= 0);
}

#[test]
fn test_regex_match_is() {
  let result = engine().perform_regex_match("is").unwrap();
  assert_eq!(
    ranking(&result),
    vec![
      (HITCHHIKERS.to_string(), 4),
      (WARP.to_string(), 3),
      (FRENCH.to_string(), 1),
    ]
  );
}

#[test]
fn test_string_and_regex_agree_on_fixtures() {
  let engine = engine();
  for phrase in ["in the", "is", "drive", "towel", "THE DRIVE", "in  the", " towel "] {
    let string = engine.perform_string_match(phrase).unwrap();
    let regex = engine.perform_regex_match(phrase).unwrap();
    assert_eq!(ranking(&string), ranking(&regex), "phrase {:?}", phrase);
  }
}

#[test]
fn test_absent_phrase_counts_zero_everywhere() {
  let result = engine().perform_regex_match("zebra").unwrap();
  assert_eq!(result.len(), 3);
  assert!(result.results().iter().all(|r| r.value == MatchValue::Count(0)));
  let names: Vec<_> = result.results().iter().map(file_name).collect();
  assert_eq!(names, vec![FRENCH, HITCHHIKERS, WARP]);
}

#[test]
fn test_regex_metacharacters_are_literal() {
  let corpus = MemoryCorpus::new()
    .with("a", "what is c++ really")
    .with("b", "a.b and axb");
  let engine = SearchEngine::builder(corpus).build().unwrap();
  assert_eq!(engine.perform_regex_match("a.b").unwrap().get("b").unwrap().value.count(), Some(1));
  assert_eq!(engine.perform_regex_match("(really").unwrap().get("a").unwrap().value.count(), Some(0));
}

#[test]
fn test_indexed_ranks_by_relevance() {
  let result = engine().perform_indexed_match("in the").unwrap();
  let names: Vec<_> = result.results().iter().map(file_name).collect();
  assert_eq!(names, vec![FRENCH, HITCHHIKERS, WARP]);

  let scores: Vec<f32> = result.results().iter().map(|r| r.value.score().unwrap()).collect();
  assert!(scores.windows(2).all(|w| w[0] >= w[1]));
  assert!(scores.iter().all(|s| *s > 0.0));
}

#[test]
fn test_indexed_is_capped() {
  let corpus: MemoryCorpus = (0..5)
    .map(|i| Document::new(format!("doc{}", i), "warp ".repeat(i + 1)))
    .collect();
  let engine = SearchEngine::builder(corpus).build().unwrap();
  let result = engine.perform_indexed_match("warp").unwrap();
  let names: Vec<_> = result.results().iter().map(|r| r.document.as_str()).collect();
  assert_eq!(names, vec!["doc4", "doc3", "doc2"]);
}

#[test]
fn test_indexed_max_hits_is_configurable() {
  let config = SearchConfig::default().max_hits(1);
  let engine = SearchEngine::builder(fixtures()).config(config).build().unwrap();
  let result = engine.perform_indexed_match("drive").unwrap();
  assert_eq!(result.len(), 1);
  assert_eq!(file_name(&result.results()[0]), WARP);
}

#[test]
fn test_indexed_query_syntax() {
  let engine = engine();
  let grouped = engine.indexed_query("\"towel galaxy\"").unwrap();
  assert_eq!(file_name(&grouped.results()[0]), HITCHHIKERS);

  let broken = engine.indexed_query("towel \\").unwrap();
  assert!(broken.is_empty());
  assert!(!broken.is_measured());

  let literal = engine.perform_indexed_match("towel \\").unwrap();
  assert_eq!(file_name(&literal.results()[0]), HITCHHIKERS);
}

#[test]
fn test_unreadable_file_does_not_fail_search() {
  let corpus = FileCorpus::new(vec![fixture(FRENCH), fixture("missing.txt"), fixture(WARP)]);
  let engine = SearchEngine::builder(corpus).build().unwrap();

  let result = engine.perform_string_match("in the").unwrap();
  assert_eq!(result.len(), 3);
  let missing = result
    .results()
    .iter()
    .find(|r| file_name(r) == "missing.txt")
    .unwrap();
  assert_eq!(missing.value, MatchValue::Count(0));

  let indexed = engine.perform_indexed_match("drive").unwrap();
  assert_eq!(indexed.len(), 2);
  assert_eq!(file_name(&indexed.results()[0]), WARP);
  assert!(indexed.results().iter().all(|r| file_name(r) != "missing.txt"));
}

#[test]
fn test_nothing_readable_leaves_index_unavailable() {
  let corpus = FileCorpus::new(vec![fixture("missing.txt")]);
  let engine = SearchEngine::builder(corpus).build().unwrap();
  assert!(matches!(
    engine.perform_indexed_match("drive"),
    Err(SearchError::IndexUnavailable { .. })
  ));
  assert_eq!(engine.perform_string_match("drive").unwrap().len(), 1);
}

#[test]
fn test_display_output() {
  let result = engine().perform_string_match("towel").unwrap();
  let rendered = result.to_string();
  let lines: Vec<_> = rendered.lines().collect();
  assert_eq!(lines.len(), 4);
  assert!(lines[0].ends_with("hitchhikers.txt: 2 matches"));
  assert!(lines[3].starts_with("Elapsed time: "));
  assert!(lines[3].ends_with(" ms"));
}

#[test]
fn test_json_output() {
  let result = engine().perform_string_match("towel").unwrap();
  let json = serde_json::to_value(&result).unwrap();
  assert_eq!(json["results"][0]["value"]["kind"], "count");
  assert_eq!(json["results"][0]["value"]["value"], 2);
  assert!(json["elapsed_ms"].as_i64().unwrap() >= 0);
}

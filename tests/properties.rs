use docseek::corpus::{Corpus, MemoryCorpus};
use docseek::engine::SearchEngine;
use docseek::index::{IndexBuilder, QueryParser, QueryScorer};
use docseek::types::{Document, SearchRequest, Strategy as SearchStrategy};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &["this", "is", "This", "IS", "na", "in", "the", "The", "drive"];

fn word() -> impl Strategy<Value = String> {
  proptest::sample::select(VOCABULARY).prop_map(str::to_string)
}

fn line(max_words: usize) -> impl Strategy<Value = String> {
  proptest::collection::vec(word(), 1..max_words).prop_map(|words| words.join(" "))
}

fn corpus() -> impl Strategy<Value = MemoryCorpus> {
  proptest::collection::vec(line(24), 1..6).prop_map(|lines| {
    lines
      .into_iter()
      .enumerate()
      .map(|(i, text)| Document::new(format!("doc{}", i), text))
      .collect()
  })
}

fn engine(corpus: MemoryCorpus) -> SearchEngine<MemoryCorpus> {
  SearchEngine::builder(corpus).build().unwrap()
}

proptest! {
  #[test]
  fn string_and_regex_agree(corpus in corpus(), phrase in line(4)) {
    let engine = engine(corpus);
    let string = engine.perform_string_match(&phrase).unwrap();
    let regex = engine.perform_regex_match(&phrase).unwrap();
    prop_assert_eq!(string.results(), regex.results());
  }

  #[test]
  fn searches_are_deterministic(corpus in corpus(), phrase in line(3)) {
    let engine = engine(corpus);
    for strategy in SearchStrategy::ALL {
      let request = SearchRequest::new(phrase.clone(), strategy).unwrap();
      let first = engine.search(&request).unwrap();
      let second = engine.search(&request).unwrap();
      prop_assert_eq!(first.results(), second.results());
    }
  }

  #[test]
  fn counting_results_cover_every_document(corpus in corpus(), phrase in line(3)) {
    let documents = corpus.len();
    let engine = engine(corpus);
    let result = engine.perform_string_match(&phrase).unwrap();
    prop_assert_eq!(result.len(), documents);
    let values: Vec<u64> = result.results().iter().map(|r| r.value.count().unwrap()).collect();
    prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
  }

  #[test]
  fn indexed_results_are_bounded(corpus in corpus(), phrase in line(3)) {
    let documents = corpus.len();
    let engine = engine(corpus);
    let result = engine.perform_indexed_match(&phrase).unwrap();
    prop_assert_eq!(result.len(), documents.min(3));
    let scores: Vec<f32> = result.results().iter().map(|r| r.value.score().unwrap()).collect();
    prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    prop_assert!(scores.iter().all(|s| *s >= 0.0));
  }

  #[test]
  fn more_occurrences_never_lower_the_score(corpus in corpus(), term in word(), extra in 1usize..4) {
    let builder = IndexBuilder::default();
    let scorer = QueryScorer::default();
    let query = QueryParser::parse(&term).unwrap();

    let (before, _) = builder.build(&corpus).unwrap();
    let before = scorer.scores(&before, &query).unwrap();

    let mut boosted = corpus.clone();
    let first = &corpus.documents()[0];
    let text = format!("{}{}", first.text, format!(" {}", term).repeat(extra));
    boosted.insert(Document::new(first.id.clone(), text));
    let (after, _) = builder.build(&boosted).unwrap();
    let after = scorer.scores(&after, &query).unwrap();

    prop_assert_eq!(&before[0].document, &after[0].document);
    prop_assert!(after[0].value.as_f64() >= before[0].value.as_f64());
  }

  #[test]
  fn rebuilding_is_idempotent(corpus in corpus()) {
    let builder = IndexBuilder::default();
    let (mut index, _) = builder.build(&corpus).unwrap();
    let once = index.clone();
    let report = builder.update(&mut index, &corpus).unwrap();
    prop_assert_eq!(index, once);
    prop_assert!(report.is_complete());
    prop_assert!(report.removed.is_empty());
  }
}

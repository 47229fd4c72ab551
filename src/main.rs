use clap::{ArgGroup, Parser};
use docseek::config::{SearchConfig, DEFAULT_INDEX_DIR};
use docseek::corpus::FileCorpus;
use docseek::engine::SearchEngine;
use docseek::error::Result;
use docseek::types::{SearchRequest, Strategy};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docseek", about = "Search a set of text documents for a phrase")]
#[command(group(ArgGroup::new("documents").required(true).args(["dir", "files"])))]
struct Args {
  /// Phrase to search for
  phrase: String,

  /// Matching strategy: string, regex or indexed (or 1, 2, 3)
  #[arg(short, long, default_value = "string")]
  strategy: Strategy,

  /// Directory whose .txt files make up the corpus
  #[arg(short, long)]
  dir: Option<PathBuf>,

  /// A document to search; repeat for more
  #[arg(short = 'f', long = "file")]
  files: Vec<PathBuf>,

  /// Where the indexed strategy keeps its index [default: indexedFiles]
  #[arg(long)]
  index_dir: Option<PathBuf>,

  /// JSON configuration file
  #[arg(long)]
  config: Option<PathBuf>,

  /// Maximum number of results for the indexed strategy
  #[arg(long)]
  max_hits: Option<usize>,

  /// Print the result as JSON
  #[arg(long, default_value_t = false)]
  json: bool,
}

fn main() -> ExitCode {
  let filter = match "docseek=info".parse() {
    Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
    Err(_) => EnvFilter::from_default_env(),
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(args: Args) -> Result<()> {
  let mut config = match &args.config {
    Some(path) => SearchConfig::from_json_file(path)?,
    None => SearchConfig::default(),
  };
  if let Some(max_hits) = args.max_hits {
    config = config.max_hits(max_hits);
  }
  let index_dir = args
    .index_dir
    .or_else(|| config.index_dir.clone())
    .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_DIR));
  config = config.index_dir(index_dir);

  let corpus = match &args.dir {
    Some(dir) => FileCorpus::from_dir(dir)?,
    None => FileCorpus::new(args.files),
  };

  let engine = SearchEngine::builder(corpus).config(config).build()?;
  let request = SearchRequest::new(args.phrase, args.strategy)?;
  let result = engine.search(&request)?;

  if args.json {
    println!("{}", serde_json::to_string_pretty(&result)?);
  } else {
    println!("{}", result);
  }
  Ok(())
}

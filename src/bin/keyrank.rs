//! CLI driver: builds an index from a document list and a noise word file,
//! then runs queries against it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use keyrank::{corpus, SearchEngine};

#[derive(Parser)]
#[command(name = "keyrank", version, about = "Frequency-ranked keyword search over a document corpus")]
struct Cli {
    /// File listing the documents to index, one path per line.
    #[arg(long)]
    docs: std::path::PathBuf,

    /// Noise word file, one word per token.
    #[arg(long)]
    noise: std::path::PathBuf,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Top documents containing either keyword, ranked by frequency.
    Query { keyword1: String, keyword2: String },
    /// Print a keyword's occurrence list.
    Occurrences { keyword: String },
    /// Print corpus and index statistics.
    Stats,
}

#[derive(Serialize)]
struct Stats {
    documents: usize,
    keywords: usize,
    noise_words: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let noise_words = corpus::load_noise_words(&cli.noise)?;
    let mut engine = SearchEngine::with_noise_words(&noise_words);
    let documents = corpus::build_index(&mut engine, &cli.docs)?;

    match cli.command {
        Command::Query { keyword1, keyword2 } => match engine.top_matches(&keyword1, &keyword2) {
            Some(matches) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&matches)?);
                } else {
                    for (rank, document) in matches.iter().enumerate() {
                        println!("{}. {}", rank + 1, document);
                    }
                }
            }
            None => println!("no matching documents"),
        },
        Command::Occurrences { keyword } => {
            let occurrences = engine.occurrences(&keyword);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(occurrences)?);
            } else if occurrences.is_empty() {
                println!("{}: not indexed", keyword);
            } else {
                for occ in occurrences {
                    println!("{occ}");
                }
            }
        }
        Command::Stats => {
            let stats = Stats {
                documents: documents.len(),
                keywords: engine.index().keyword_count(),
                noise_words: engine.normalizer().noise_word_count(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("documents:   {}", stats.documents);
                println!("keywords:    {}", stats.keywords);
                println!("noise words: {}", stats.noise_words);
            }
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use picosearch_core::source::{DirCorpus, WordFile};
use picosearch_core::{NoiseWords, SearchEngine};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "picosearch")]
#[command(about = "In-memory keyword index with two-keyword top-5 queries", long_about = None)]
struct Cli {
    /// File listing the document names to index, whitespace-separated
    #[arg(long)]
    docs: String,
    /// Noise-word file; defaults to a built-in English list
    #[arg(long)]
    noise: Option<String>,
    /// Directory document names are resolved against
    #[arg(long, default_value = ".")]
    root: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a two-keyword OR query and print the top documents
    Search {
        keyword1: String,
        keyword2: String,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one keyword's posting list, highest frequency first
    Postings { keyword: String },
    /// Print index statistics
    Stats,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    keyword1: &'a str,
    keyword2: &'a str,
    documents: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let noise = match &cli.noise {
        Some(path) => NoiseWords::load(path)?,
        None => NoiseWords::default_english(),
    };
    let names = WordFile::open(&cli.docs)?;
    let corpus = DirCorpus::new(&cli.root);
    let engine = SearchEngine::build(names, noise, &corpus)?;

    match cli.command {
        Commands::Search { keyword1, keyword2, json } => {
            let kw1 = keyword1.to_lowercase();
            let kw2 = keyword2.to_lowercase();
            let start = std::time::Instant::now();
            let documents = engine.search(&kw1, &kw2);
            tracing::debug!(took = ?start.elapsed(), hits = documents.len(), "query complete");
            if json {
                let out = SearchOutput { keyword1: &kw1, keyword2: &kw2, documents };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if documents.is_empty() {
                println!("no matching documents");
            } else {
                for (rank, document) in documents.iter().enumerate() {
                    println!("{}. {document}", rank + 1);
                }
            }
        }
        Commands::Postings { keyword } => {
            for occ in engine.index().postings(&keyword.to_lowercase()) {
                println!("{}\t{}", occ.document, occ.frequency);
            }
        }
        Commands::Stats => {
            println!("documents: {}", engine.index().document_count());
            println!("keywords: {}", engine.index().keyword_count());
        }
    }
    Ok(())
}

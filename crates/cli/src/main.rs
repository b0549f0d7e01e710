use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docrag_chunker::{Chunk, Chunker, ChunkerConfig, ChunkingStats};
use docrag_ingest::DocScanner;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docrag")]
#[command(about = "Semantic markdown chunking for retrieval pipelines", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a markdown file or directory and print chunks as JSON
    Chunk(ChunkArgs),

    /// Print chunking statistics for a file or directory
    Stats(ChunkArgs),
}

#[derive(Args)]
struct ChunkArgs {
    /// Markdown file or directory to process
    path: PathBuf,

    /// Minimum chunk size in estimated tokens
    #[arg(long, default_value_t = 200)]
    min_tokens: usize,

    /// Target chunk size in estimated tokens
    #[arg(long, default_value_t = 500)]
    target_tokens: usize,

    /// Maximum chunk size in estimated tokens
    #[arg(long, default_value_t = 800)]
    max_tokens: usize,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

impl ChunkArgs {
    fn config(&self) -> ChunkerConfig {
        ChunkerConfig {
            min_chunk_tokens: self.min_tokens,
            target_chunk_tokens: self.target_tokens,
            max_chunk_tokens: self.max_tokens,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Chunk(args) => run_chunk(&args),
        Commands::Stats(args) => run_stats(&args),
    }
}

fn run_chunk(args: &ChunkArgs) -> Result<()> {
    let chunks = chunk_path(args)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&chunks)?
    } else {
        serde_json::to_string(&chunks)?
    };
    println!("{json}");
    Ok(())
}

fn run_stats(args: &ChunkArgs) -> Result<()> {
    let chunks = chunk_path(args)?;
    let stats = ChunkingStats::from_chunks(&chunks);
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

/// Chunk a single file, or every markdown file under a directory
fn chunk_path(args: &ChunkArgs) -> Result<Vec<Chunk>> {
    let chunker = Chunker::new(args.config())?;

    let files = if args.path.is_dir() {
        DocScanner::new(&args.path).scan()
    } else {
        vec![args.path.clone()]
    };

    let mut chunks = Vec::new();
    for file in &files {
        chunks.extend(chunk_file(&chunker, file)?);
    }
    log::info!("Produced {} chunks from {} files", chunks.len(), files.len());
    Ok(chunks)
}

fn chunk_file(chunker: &Chunker, path: &Path) -> Result<Vec<Chunk>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let source = path.to_str().unwrap_or("unknown");
    Ok(chunker.chunk_document(&content, source))
}

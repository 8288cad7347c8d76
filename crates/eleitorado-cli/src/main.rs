use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eleitorado_gen::{GenerateOptions, GenerationEngine, GenerationError};
use rand::Rng;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "eleitorado", version, about = "Synthetic Brazilian voter dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the voter CSV dataset.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of voter records to generate.
    #[arg(long, default_value_t = 20_000)]
    records: u64,
    /// Output directory for the dataset and run report.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
    /// Seed for reproducible runs; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let options = GenerateOptions {
        out_dir: args.out_dir,
        records: args.records,
        seed,
    };

    let engine = GenerationEngine::new(options);
    let result = engine.run()?;

    info!(
        dataset = %result.csv_path.display(),
        records = result.report.records_generated,
        seed,
        "dataset written"
    );
    println!("dataset={}", result.csv_path.display());
    println!("records={}", result.report.records_generated);
    Ok(())
}

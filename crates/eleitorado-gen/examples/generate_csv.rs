use std::env;
use std::path::PathBuf;

use eleitorado_gen::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out_dir: Option<PathBuf> = None;
    let mut records: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from),
            "--records" => records = args.next().and_then(|value| value.parse().ok()),
            _ => return Err("unexpected argument".into()),
        }
    }

    let mut options = GenerateOptions::default();
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }
    if let Some(records) = records {
        options.records = records;
    }

    let engine = GenerationEngine::new(options);
    let result = engine.run()?;

    println!("dataset={}", result.csv_path.display());
    println!("records={}", result.report.records_generated);
    Ok(())
}

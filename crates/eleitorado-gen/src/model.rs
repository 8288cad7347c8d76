use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the dataset and run report are written.
    pub out_dir: PathBuf,
    /// Number of voter records to generate.
    pub records: u64,
    /// Seed for the deterministic random source.
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            records: 20_000,
            seed: 0,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub records_requested: u64,
    pub records_generated: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub throughput_bytes_per_sec: f64,
}

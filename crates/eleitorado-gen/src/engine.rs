use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::write_voters_csv;
use crate::provider::{FakeProvider, PtBrProvider};
use crate::record::generate_voter;

/// File names written into the output directory.
pub const DATASET_FILE: &str = "voters_simulation.csv";
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub csv_path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the voter dataset.
pub struct GenerationEngine {
    options: GenerateOptions,
    provider: Box<dyn FakeProvider>,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_provider(options, Box::new(PtBrProvider))
    }

    pub fn with_provider(options: GenerateOptions, provider: Box<dyn FakeProvider>) -> Self {
        Self { options, provider }
    }

    /// Generate records in order and serialize dataset plus run report.
    ///
    /// Any failure aborts the whole run; a partially written dataset is
    /// not guaranteed to be valid.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        std::fs::create_dir_all(&self.options.out_dir)?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let today = Utc::now().date_naive();

        info!(
            run_id = %run_id,
            records = self.options.records,
            seed = self.options.seed,
            "generation started"
        );

        let mut records = Vec::with_capacity(self.options.records as usize);
        for _ in 0..self.options.records {
            records.push(generate_voter(self.provider.as_ref(), today, &mut rng));
        }

        let csv_path = self.options.out_dir.join(DATASET_FILE);
        let bytes_written = write_voters_csv(&csv_path, &records)?;

        let elapsed = start.elapsed();
        let report = GenerationReport {
            run_id: run_id.clone(),
            records_requested: self.options.records,
            records_generated: records.len() as u64,
            bytes_written,
            duration_ms: elapsed.as_millis() as u64,
            throughput_bytes_per_sec: if elapsed.as_secs_f64() > 0.0 {
                bytes_written as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            },
        };

        let report_path = self.options.out_dir.join(REPORT_FILE);
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            records_generated = report.records_generated,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { csv_path, report })
    }
}

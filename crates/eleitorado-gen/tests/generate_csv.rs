use std::fs;
use std::path::PathBuf;

use eleitorado_gen::engine::{DATASET_FILE, REPORT_FILE};
use eleitorado_gen::record::FIELD_NAMES;
use eleitorado_gen::{GenerateOptions, GenerationEngine};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("eleitorado_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn run_with(out_dir: PathBuf, records: u64, seed: u64) -> eleitorado_gen::GenerationResult {
    let options = GenerateOptions {
        out_dir,
        records,
        seed,
    };
    GenerationEngine::new(options).run().expect("run generation")
}

#[test]
fn generate_writes_header_plus_one_line_per_record() {
    let out_dir = temp_out_dir("rows");
    let result = run_with(out_dir.clone(), 3, 42);

    assert_eq!(result.csv_path, out_dir.join(DATASET_FILE));
    let contents = fs::read_to_string(&result.csv_path).expect("read csv");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4, "1 header line + 3 data rows");
    assert_eq!(lines[0], FIELD_NAMES.join(","));

    let mut reader = csv::Reader::from_path(&result.csv_path).expect("open csv");
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("parse rows");
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.len(), FIELD_NAMES.len());
        let cpf = row.get(1).expect("cpf column");
        assert_eq!(cpf.len(), 11);
        assert!(cpf.bytes().all(|b| b.is_ascii_digit()));
    }

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn generate_writes_run_report() {
    let out_dir = temp_out_dir("report");
    let result = run_with(out_dir.clone(), 5, 42);

    assert_eq!(result.report.records_requested, 5);
    assert_eq!(result.report.records_generated, 5);
    assert!(result.report.bytes_written > 0);

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out_dir.join(REPORT_FILE)).expect("read report"),
    )
    .expect("parse report");
    assert_eq!(
        report.get("records_generated").and_then(|v| v.as_u64()),
        Some(5)
    );

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn generate_is_deterministic_for_a_seed() {
    let out_dir_a = temp_out_dir("run_a");
    let out_dir_b = temp_out_dir("run_b");

    let result_a = run_with(out_dir_a.clone(), 25, 7);
    let result_b = run_with(out_dir_b.clone(), 25, 7);

    let csv_a = fs::read_to_string(&result_a.csv_path).expect("read csv A");
    let csv_b = fs::read_to_string(&result_b.csv_path).expect("read csv B");
    assert_eq!(csv_a, csv_b, "same seed should produce identical datasets");

    fs::remove_dir_all(&out_dir_a).ok();
    fs::remove_dir_all(&out_dir_b).ok();
}

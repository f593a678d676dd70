use std::fs;
use std::time::Instant;

use chrono::Utc;
use clap::Parser;

use report_bench::cli::Args;
use report_bench::data::generator::{write_report_csv, SystemClock};
use report_bench::error::BenchResult;
use report_bench::reader::read_report_csv;
use report_bench::results::RunSummary;
use report_bench::runner::time_phase;

fn main() -> BenchResult<()> {
    let args = Args::parse();
    let start = Instant::now();

    let ((), generate_ms) =
        time_phase(|| write_report_csv(&args.output, args.rows, &SystemClock))?;
    println!("generate+write: {generate_ms:.3} ms ({} rows)", args.rows);

    let file_bytes = fs::metadata(&args.output)?.len();
    println!("file size: {file_bytes} bytes");

    let (outcome, read_ms) = time_phase(|| read_report_csv(&args.output, args.on_malformed))?;
    println!("read+parse: {read_ms:.3} ms");
    println!("total records: {}", outcome.records.len());
    if !outcome.malformed.is_empty() {
        println!("malformed rows skipped: {}", outcome.malformed.len());
    }

    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("total: {total_ms:.3} ms");

    if let Some(path) = &args.summary_json {
        let summary = RunSummary {
            schema_version: 1,
            created_at: Utc::now(),
            rows_written: args.rows,
            generate_ms,
            file_bytes,
            read_ms,
            rows_read: outcome.records.len() as u64,
            malformed_skipped: outcome.malformed.len() as u64,
            total_ms,
        };
        fs::write(path, serde_json::to_vec_pretty(&summary)?)?;
        println!("wrote summary: {}", path.display());
    }

    Ok(())
}

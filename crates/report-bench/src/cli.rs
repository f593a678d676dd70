use std::path::PathBuf;

use clap::Parser;

use crate::reader::MalformedPolicy;

#[derive(Debug, Parser)]
#[command(name = "report-bench", about = "booking-report CSV generate/parse benchmark")]
pub struct Args {
    #[arg(long, env = "REPORT_BENCH_ROWS", default_value_t = 1_000_000)]
    pub rows: u64,
    #[arg(long, env = "REPORT_BENCH_OUTPUT", default_value = "sample.csv")]
    pub output: PathBuf,
    #[arg(
        long = "on-malformed",
        value_enum,
        default_value_t = MalformedPolicy::Fail
    )]
    pub on_malformed: MalformedPolicy,
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

use std::path::Path;

use clap::ValueEnum;
use csv::StringRecord;
use serde::Serialize;

use crate::data::record::ReportRecord;
use crate::error::BenchResult;
use crate::schema::validate_header;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicy {
    #[default]
    Fail,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MalformedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadOutcome {
    pub records: Vec<ReportRecord>,
    pub malformed: Vec<MalformedRow>,
}

pub fn read_report_csv(path: &Path, policy: MalformedPolicy) -> BenchResult<ReadOutcome> {
    // Length checks live in ReportRecord::parse_fields so the malformed-row
    // policy can see short lines instead of a csv transport error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    validate_header(reader.headers()?)?;

    let mut outcome = ReadOutcome::default();
    let mut rec = StringRecord::new();
    loop {
        match reader.read_record(&mut rec) {
            Ok(false) => break,
            Ok(true) => {
                let line = rec.position().map(|p| p.line()).unwrap_or(0);
                match ReportRecord::parse_fields(&rec, line) {
                    Ok(record) => outcome.records.push(record),
                    Err(err) => match policy {
                        MalformedPolicy::Fail => return Err(err),
                        MalformedPolicy::Skip => outcome.malformed.push(MalformedRow {
                            line,
                            reason: err.to_string(),
                        }),
                    },
                }
            }
            // Transport errors stay fatal under both policies.
            Err(err) => return Err(err.into()),
        }
    }
    Ok(outcome)
}

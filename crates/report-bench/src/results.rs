use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema_version: u32,
    pub created_at: DateTime<Utc>,
    pub rows_written: u64,
    pub generate_ms: f64,
    pub file_bytes: u64,
    pub read_ms: f64,
    pub rows_read: u64,
    pub malformed_skipped: u64,
    pub total_ms: f64,
}

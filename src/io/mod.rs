pub mod reporting;
pub mod schedule;

use crate::model::schedule::ScheduleError;
use thiserror::Error;

/// Failures while loading a schedule or exporting results.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

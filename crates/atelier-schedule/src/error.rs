use thiserror::Error;

/// Scheduling errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Calendar export error: {0}")]
    Export(String),

    #[error(transparent)]
    CoreError(#[from] atelier_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

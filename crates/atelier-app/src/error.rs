use thiserror::Error;

/// Command-line front end errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Failed to read rule: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed rule JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    ScheduleError(#[from] atelier_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] atelier_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

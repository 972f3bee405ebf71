use thiserror::Error;

pub type TranscodeResult<T> = Result<T, TranscodeError>;

#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

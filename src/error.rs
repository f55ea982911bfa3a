use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("No credit score available for '{last_name}'")]
    CreditScoreUnavailable { last_name: String },
    #[cfg(feature = "storage-rocksdb")]
    #[error("Database error: {0}")]
    DatabaseError(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, RegistrationError>;

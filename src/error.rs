use std::path::PathBuf;
use thiserror::Error;

/// A record field constraint that did not hold. Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters long")]
    InvalidUsername,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Product name must be at least 2 characters long")]
    InvalidName,

    #[error("Product price must be a non-negative number")]
    InvalidPrice,

    #[error("Discount percentage must be between 0 and 100")]
    InvalidDiscount,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Cannot reduce an empty sequence")]
    EmptyInput,

    #[error("Unsupported data shape: {0}")]
    UnsupportedShape(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl DataError {
    /// Classifies an I/O error for `path`, splitting out the missing-file case.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound(path)
        } else {
            DataError::Io { path, source }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} with id {id} already exists")]
    Duplicate { kind: &'static str, id: String },
}

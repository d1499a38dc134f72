use std::fmt;

/// Result type for vitals-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Source name not in the known set
    UnknownSource(String),

    /// Calendar date could not be parsed
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSource(name) => write!(f, "Unknown source: {}", name),
            Error::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
        }
    }
}

impl std::error::Error for Error {}

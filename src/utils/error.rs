use std::error::Error;
use std::fmt;
use std::io;

/// Main error type for the CRAM encoder library.
#[derive(Debug)]
pub enum CramError {
    /// An I/O error occurred
    Io(io::Error),
    /// An invalid argument was provided
    InvalidArg(String),
    /// A bit or byte stream processing error occurred
    Stream(String),
}

impl fmt::Display for CramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CramError::Io(err) => write!(f, "I/O error: {}", err),
            CramError::InvalidArg(msg) => write!(f, "Invalid argument: {}", msg),
            CramError::Stream(msg) => write!(f, "Stream error: {}", msg),
        }
    }
}

impl Error for CramError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CramError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CramError {
    fn from(err: io::Error) -> Self {
        CramError::Io(err)
    }
}

impl From<crate::io::bit_writer::BitIoError> for CramError {
    fn from(err: crate::io::bit_writer::BitIoError) -> Self {
        CramError::Stream(err.to_string())
    }
}

/// A specialized `Result` type for CRAM encoding operations.
pub type Result<T> = std::result::Result<T, CramError>;

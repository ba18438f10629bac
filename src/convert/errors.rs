//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

/// Conversion-specific error types
#[derive(Debug)]
pub enum ConvertError {
    /// I/O error
    IoError(io::Error),
    /// Unrecognized coordinate format name
    InvalidFormat(String),
    /// Input text could not be parsed for the declared format
    MalformedCoordinate {
        /// Format the input claimed to be in
        format: &'static str,
        /// The offending input text
        input: String,
        /// What the decoder objected to
        reason: String,
    },
    /// Latitude or longitude outside the valid range
    InvalidCoordinate(f64, f64),
    /// Unrecognized unit name
    InvalidUnit(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::IoError(e) => write!(f, "I/O error: {}", e),
            ConvertError::InvalidFormat(name) => write!(f, "Invalid coordinate format: {}", name),
            ConvertError::MalformedCoordinate { format, input, reason } => {
                write!(f, "Malformed {} coordinate '{}': {}", format, input, reason)
            }
            ConvertError::InvalidCoordinate(lat, lon) => {
                write!(f, "Coordinate out of range: lat={}, lon={}", lat, lon)
            }
            ConvertError::InvalidUnit(name) => write!(f, "Invalid unit name: {}", name),
            ConvertError::GenericError(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<io::Error> for ConvertError {
    fn from(error: io::Error) -> Self {
        ConvertError::IoError(error)
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

impl From<String> for ConvertError {
    fn from(msg: String) -> Self {
        ConvertError::GenericError(msg)
    }
}

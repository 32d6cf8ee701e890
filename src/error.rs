//! Error types for the agclimate-analysis crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum AnalysisError {
    /// A profile that is required for this analysis is missing.
    #[error("Missing profile required for the analysis.")]
    MissingProfile,
    /// A value (date, temperature, increment, etc) that is required is not available.
    #[error("Missing value required for analysis.")]
    MissingValue,
    /// Not enough data available for analysis.
    #[error("Not enough data available for analysis.")]
    NotEnoughData,
    /// Bad or invalid input.
    #[error("Invalid input.")]
    InvalidInput,
    /// Dates are not strictly increasing. The index is the first offending position.
    #[error("Dates not strictly increasing at index {index}.")]
    InvalidInputOrder {
        /// First index whose date is not after the previous one.
        index: usize,
    },
    /// The starting position of an accumulation is past the end of the sequence.
    #[error("Start index {start} out of range for sequence of length {len}.")]
    StartOutOfRange {
        /// Requested start index.
        start: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// A non-numeric (NaN) value was found where a number is required.
    #[error("Non-numeric value at index {index}.")]
    NotANumber {
        /// Index of the offending value.
        index: usize,
    },
    /// Configuration could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, AnalysisError>;

impl From<toml::de::Error> for AnalysisError {
    fn from(err: toml::de::Error) -> Self {
        AnalysisError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Config(err.to_string())
    }
}

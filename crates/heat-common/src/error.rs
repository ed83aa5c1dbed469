//! Error types for heatmap tile generation.

use thiserror::Error;

/// Errors that can occur while loading points or rendering tiles.
#[derive(Error, Debug)]
pub enum HeatError {
    /// A caller-supplied value is outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A named asset (color scheme, dot stamp) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An operation was invoked before its required collaborator was set up.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// A point record or asset definition could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Filesystem access to a point file or asset directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeatError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a NotFound error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a PreconditionFailed error.
    pub fn precondition_failed(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }

    /// Create a ParseError.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Short stable name of the error class, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound(_) => "not_found",
            Self::PreconditionFailed(_) => "precondition_failed",
            Self::ParseError(_) => "parse_error",
            Self::Io(_) => "io",
        }
    }
}

impl From<serde_json::Error> for HeatError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type for heat-tiles operations.
pub type Result<T> = std::result::Result<T, HeatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        let err = HeatError::invalid_argument("opacity 300 out of range");
        assert!(matches!(err, HeatError::InvalidArgument(_)));
        assert_eq!(err.kind(), "invalid_argument");

        let err = HeatError::not_found("scheme 'fire'");
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_display_messages() {
        let err = HeatError::parse_error("line 3: bad latitude");
        assert_eq!(err.to_string(), "parse error: line 3: bad latitude");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: HeatError = io.into();
        assert_eq!(err.kind(), "io");
    }
}

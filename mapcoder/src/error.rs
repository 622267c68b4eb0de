//! Error types for the mapcoder library.

use thiserror::Error;

/// Errors surfaced while interpreting a request or assembling its result.
///
/// The variant name (see [`MapcoderError::kind`]) is the stable,
/// machine-readable part; the message is meant for humans.
#[derive(Error, Debug, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MapcoderError {
    /// A numeric field lies outside its declared domain.
    #[error("Parameter '{field}' out of range: {value} (valid range: {range})")]
    OutOfRange {
        field: &'static str,
        value: String,
        range: String,
    },

    /// A field could not be parsed at all.
    #[error("Parameter '{field}' has an invalid format: '{value}'")]
    InvalidFormat { field: &'static str, value: String },

    /// A token does not match any member of its fixed catalog.
    #[error("Parameter '{field}' has an invalid value: '{value}' (valid values: {valid})")]
    InvalidEnum {
        field: &'static str,
        value: String,
        valid: String,
    },

    /// A field was supplied where the endpoint forbids it.
    #[error("Parameter '{field}' must not be set for this request")]
    InvalidUsage { field: &'static str },

    /// Territory resolution exhausted all fallbacks.
    #[error("Unknown territory: '{token}'")]
    UnknownTerritory { token: String },

    /// Nothing to return: unencodable coordinate, undecodable mapcode,
    /// or no local mapcode for a local-only request.
    #[error("{message}")]
    NotFound { message: String },

    /// An outward-facing result failed its consistency check.
    #[error("Inconsistent result: {message}")]
    Inconsistent { message: String },

    /// IO error when reading a codec table.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A codec table file is not valid JSON or has the wrong shape.
    #[error("Invalid codec table: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapcoderError {
    /// Machine-readable kind, e.g. `"OUT_OF_RANGE"`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MapcoderError::OutOfRange { .. }
                | MapcoderError::InvalidFormat { .. }
                | MapcoderError::InvalidEnum { .. }
                | MapcoderError::InvalidUsage { .. }
        )
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        MapcoderError::NotFound {
            message: message.into(),
        }
    }
}

/// Result type alias using [`MapcoderError`].
pub type Result<T> = std::result::Result<T, MapcoderError>;

//! Error types for the output crate.

use thiserror::Error;

/// Errors raised while serializing generated graphs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The format name was neither `JSON` nor `CSV`.
    #[error("unknown serialization format `{provided}`; expected `JSON` or `CSV`")]
    UnknownFormat {
        /// The rejected format name.
        provided: String,
    },
    /// JSON encoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing to the destination failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl OutputError {
    /// Return the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownFormat { .. } => "OUTPUT_UNKNOWN_FORMAT",
            Self::Json(_) => "OUTPUT_JSON",
            Self::Io(_) => "OUTPUT_IO",
        }
    }
}

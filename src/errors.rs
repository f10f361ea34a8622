/// Top-level errors for a conversion run.
use thiserror::Error;

use crate::bridge::BridgeError;
use crate::literal::LiteralError;

/// Errors that end a run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The startup capability check failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// The literal could not be parsed.
    #[error(transparent)]
    Literal(#[from] LiteralError),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exit code mapping for `ConvertError` variants.
impl ConvertError {
    /// Return the CLI exit code for this error.
    ///
    /// Parse, I/O and serialization failures use the `sysexits.h` values
    /// (`EX_DATAERR`, `EX_IOERR`, `EX_SOFTWARE`).
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Bridge(_) => 1,
            Self::Literal(_) => 65,
            Self::Io(_) => 74,
            Self::Json(_) => 70,
        }
    }
}

/// Serializable output types written to stderr on failure.
use serde::{Deserialize, Serialize};

use crate::errors::ConvertError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// 1-based line of a parse error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// 1-based column of a parse error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl ErrorOutput {
    /// Construct from a `ConvertError`.
    #[must_use]
    pub fn from_convert_error(err: &ConvertError) -> Self {
        let (code, location) = match err {
            ConvertError::Bridge(_) => ("bridge_unavailable", None),
            ConvertError::Literal(lit) => (lit.code(), lit.location()),
            ConvertError::Io(_) => ("io_error", None),
            ConvertError::Json(_) => ("serialization_error", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                line: location.map(|(line, _)| line),
                column: location.map(|(_, column)| column),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::LiteralError;

    #[test]
    fn test_envelope_carries_location() {
        let err = ConvertError::from(LiteralError::InvalidEscape {
            sequence: "\\q".to_owned(),
            line: 3,
            column: 9,
        });
        let out = ErrorOutput::from_convert_error(&err);
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "invalid_escape");
        assert_eq!(value["error"]["line"], 3);
        assert_eq!(value["error"]["column"], 9);
    }

    #[test]
    fn test_envelope_omits_missing_location() {
        let err = ConvertError::from(std::io::Error::other("closed"));
        let value = serde_json::to_value(ErrorOutput::from_convert_error(&err)).unwrap();
        assert_eq!(value["error"]["code"], "io_error");
        assert!(value["error"].get("line").is_none());
    }
}

/// Errors from the dictionary-literal layer.
use thiserror::Error;

/// Errors raised while reading an `NSDictionary` description literal.
///
/// `Shape` is the soft failure: the input does not even look like a
/// dictionary, and callers show usage help instead of reporting it. Every
/// other variant is a hard parse error inside an apparently well-formed
/// literal and carries a 1-based source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Input fails the minimal `{…}` shape check.
    #[error(
        "Input is not a dictionary literal (expected at least {min} characters wrapped in '{{' and '}}')"
    )]
    Shape {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// A token appeared where the grammar does not allow it.
    #[error("Unexpected {found}, expected {expected} at line {line}, column {column}")]
    UnexpectedToken {
        /// Human-readable description of the offending token.
        found: String,
        /// What the parser was waiting for.
        expected: &'static str,
        line: usize,
        column: usize,
    },

    /// A character that cannot start any token.
    #[error("Unexpected character '{found}' at line {line}, column {column}")]
    UnexpectedChar {
        found: char,
        line: usize,
        column: usize,
    },

    /// Input ended inside an open structure.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was waiting for.
        expected: &'static str,
    },

    /// A quoted string was never closed.
    #[error("Unterminated string starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    /// A backslash sequence inside a quoted string is not recognized.
    #[error("Invalid escape sequence '{sequence}' at line {line}, column {column}")]
    InvalidEscape {
        sequence: String,
        line: usize,
        column: usize,
    },

    /// A `<…>` data literal is malformed.
    #[error("Invalid data literal: {reason} at line {line}, column {column}")]
    InvalidData {
        reason: &'static str,
        line: usize,
        column: usize,
    },

    /// Something follows the closing brace of the root dictionary.
    #[error("Unexpected trailing content at line {line}, column {column}")]
    TrailingContent { line: usize, column: usize },
}

impl LiteralError {
    /// Machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Shape { .. } => "not_a_dictionary",
            Self::UnexpectedToken { .. } => "unexpected_token",
            Self::UnexpectedChar { .. } => "unexpected_character",
            Self::UnexpectedEnd { .. } => "unexpected_end",
            Self::UnterminatedString { .. } => "unterminated_string",
            Self::InvalidEscape { .. } => "invalid_escape",
            Self::InvalidData { .. } => "invalid_data",
            Self::TrailingContent { .. } => "trailing_content",
        }
    }

    /// Source location as `(line, column)`, when the error has one.
    #[must_use]
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedChar { line, column, .. }
            | Self::UnterminatedString { line, column }
            | Self::InvalidEscape { line, column, .. }
            | Self::InvalidData { line, column, .. }
            | Self::TrailingContent { line, column } => Some((*line, *column)),
            Self::Shape { .. } | Self::UnexpectedEnd { .. } => None,
        }
    }

    /// Whether this is the soft shape failure rather than a parse error.
    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = LiteralError::UnexpectedChar {
            found: '?',
            line: 2,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected character '?' at line 2, column 7"
        );
        assert_eq!(err.location(), Some((2, 7)));
    }

    #[test]
    fn test_shape_is_soft() {
        let err = LiteralError::Shape { min: 5 };
        assert!(err.is_shape());
        assert_eq!(err.location(), None);
        assert_eq!(err.code(), "not_a_dictionary");
    }
}

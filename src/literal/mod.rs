/// Dictionary-literal layer: shape check, lexing, parsing, value model.
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod value;

pub use errors::LiteralError;
pub use value::Dictionary;

/// Shortest possible dictionary literal, `{a=1}`.
pub const MIN_LITERAL_LEN: usize = 5;

/// The minimal shape check: at least [`MIN_LITERAL_LEN`] characters, starts
/// with `{`, ends with `}`. Callers trim before asking.
#[must_use]
pub fn has_dictionary_shape(candidate: &str) -> bool {
    candidate.starts_with('{')
        && candidate.ends_with('}')
        && candidate.chars().count() >= MIN_LITERAL_LEN
}

/// Parse an `NSDictionary` description literal.
///
/// Surrounding whitespace is ignored. Input failing the shape check yields
/// [`LiteralError::Shape`]; anything else that goes wrong is a parse error
/// with a location.
///
/// # Errors
///
/// Returns `LiteralError` when the input is not a valid dictionary literal.
pub fn parse(input: &str) -> Result<Dictionary, LiteralError> {
    let trimmed = input.trim();
    if !has_dictionary_shape(trimmed) {
        return Err(LiteralError::Shape {
            min: MIN_LITERAL_LEN,
        });
    }
    parser::parse_dictionary(trimmed)
}

#[cfg(test)]
mod tests {
    use super::value::PlistValue;
    use super::*;

    #[test]
    fn test_shape_boundaries() {
        assert!(has_dictionary_shape("{a=1}"));
        assert!(!has_dictionary_shape("{a=}"));
        assert!(!has_dictionary_shape("{}"));
        assert!(!has_dictionary_shape("not-a-dict"));
        assert!(!has_dictionary_shape("{a=1"));
        assert!(!has_dictionary_shape("a=1}}"));
    }

    #[test]
    fn test_shape_counts_characters() {
        // 3 characters, more than 5 bytes
        assert!(!has_dictionary_shape("{é}"));
        assert!(has_dictionary_shape("{é=é}"));
    }

    #[test]
    fn test_parse_minimal_literal() {
        let dict = parse("{a=1}").unwrap();
        assert_eq!(dict.get("a"), Some(&PlistValue::Integer(1)));
    }

    #[test]
    fn test_parse_trims_input() {
        let dict = parse("  {a=1}\n").unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        assert_eq!(parse("{a=}").unwrap_err(), LiteralError::Shape { min: 5 });
        assert!(parse("not-a-dict").unwrap_err().is_shape());
        assert!(parse("").unwrap_err().is_shape());
    }

    #[test]
    fn test_parse_errors_are_not_shape_errors() {
        let err = parse("{a=\"open}").unwrap_err();
        assert!(!err.is_shape());
        assert_eq!(err, LiteralError::UnterminatedString { line: 1, column: 4 });
    }
}

/// The built-in bridge backed by the crate's own literal parser.
use super::DictionaryBridge;
use super::errors::BridgeError;
use crate::literal::{self, Dictionary, LiteralError};

/// Parses dictionary literals in-process. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBridge;

impl DictionaryBridge for EmbeddedBridge {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn probe(&self) -> Result<(), BridgeError> {
        Ok(())
    }

    fn parse(&self, literal: &str) -> Result<Dictionary, LiteralError> {
        literal::parse(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::ensure_available;
    use crate::literal::value::PlistValue;

    #[test]
    fn test_embedded_is_available() {
        assert_eq!(ensure_available(&EmbeddedBridge), Ok(()));
    }

    #[test]
    fn test_embedded_parses() {
        let dict = EmbeddedBridge.parse("{name=John; age=30}").unwrap();
        assert_eq!(
            dict.get("name"),
            Some(&PlistValue::String("John".to_owned()))
        );
        assert_eq!(dict.get("age"), Some(&PlistValue::Integer(30)));
    }
}

/// Dictionary bridge: the seam between the CLI and whatever understands the
/// `NSDictionary` description syntax.
pub mod embedded;
pub mod errors;

pub use embedded::EmbeddedBridge;
pub use errors::BridgeError;

use crate::literal::{Dictionary, LiteralError};

/// Something that can turn a dictionary literal into a [`Dictionary`].
pub trait DictionaryBridge {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Report whether the bridge can be used in this environment.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::Unavailable` if it cannot.
    fn probe(&self) -> Result<(), BridgeError>;

    /// Parse a literal.
    ///
    /// # Errors
    ///
    /// Returns `LiteralError` for malformed input; `LiteralError::Shape` when
    /// the input does not look like a dictionary at all.
    fn parse(&self, literal: &str) -> Result<Dictionary, LiteralError>;
}

/// Startup capability check. Called once, before any input is read.
///
/// # Errors
///
/// Returns `BridgeError::Unavailable` if the bridge cannot be used.
pub fn ensure_available(bridge: &dyn DictionaryBridge) -> Result<(), BridgeError> {
    bridge.probe()
}

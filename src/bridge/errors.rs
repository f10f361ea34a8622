/// Errors from the dictionary bridge layer.
use thiserror::Error;

/// Typed errors from the bridge capability check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The bridge cannot parse dictionary literals in this environment.
    #[error("Dictionary bridge '{name}' is unavailable: {hint}")]
    Unavailable {
        /// Bridge name, as reported by `DictionaryBridge::name`.
        name: &'static str,
        /// What the user can do about it.
        hint: String,
    },
}

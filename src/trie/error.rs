use thiserror::Error;

/// Rejected insertion key. Raised before any node is touched, so a failed
/// insert never changes the trie.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    #[error("key must not be empty")]
    Empty,

    #[error("invalid symbol {symbol:#04x} at byte {index}: keys may only contain 'a'..='z'")]
    Symbol { symbol: u8, index: usize },
}

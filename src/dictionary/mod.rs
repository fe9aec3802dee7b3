//! Dictionary loading: source bytes → entries → trie.
//!
//! - [`source`] - memory-mapped access to the dictionary file
//! - [`scanner`] - bracketed entry extraction and keyword validation
//! - [`loader`] - builds a [`Trie`](crate::trie::Trie) and load statistics

pub mod error;
pub mod loader;
pub mod scanner;
pub mod source;

pub use error::DictionaryError;
pub use loader::{Dictionary, LoadStats};
pub use scanner::{RawEntry, Scanner, is_valid_keyword, scan};
pub use source::DictionarySource;

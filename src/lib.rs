//! # dictrie - keyword dictionary index
//!
//! dictrie indexes text files made of bracket-delimited entries
//! (`[keyword]definition text`) and answers prefix and exact-match queries
//! against the keyword set, reporting where each entry starts in the file
//! and how long it is.
//!
//! ## Architecture
//!
//! - [`trie`] - 26-ary prefix tree, the core data structure
//! - [`dictionary`] - file scanning, keyword validation, trie building
//! - [`query`] - answer formatting and the read-eval query loop
//! - [`output`] - terminal reports (statistics, keyword listings)
//! - [`utils`] - configuration and logging
//!
//! ## Quick Start
//!
//! ```
//! use dictrie::dictionary::Dictionary;
//! use dictrie::query::Answer;
//!
//! let dict = Dictionary::from_bytes(b"[cat]a small animal\n[car]vehicle\n").unwrap();
//! let trie = dict.trie();
//!
//! assert_eq!(Answer(trie.find("cat")).to_string(), "0 19");
//! assert_eq!(Answer(trie.find("ca")).to_string(), "is prefix");
//! assert_eq!(Answer(trie.find("dog")).to_string(), "is not prefix");
//! ```

pub mod dictionary;
pub mod output;
pub mod query;
pub mod trie;
pub mod utils;

use crate::trie::InvalidKeyError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a dictionary file into a trie.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),
}

impl DictionaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DictionaryError::Io {
            path: path.into(),
            source,
        }
    }
}

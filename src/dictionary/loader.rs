use super::error::DictionaryError;
use super::scanner::{is_valid_keyword, scan};
use super::source::DictionarySource;
use crate::trie::Trie;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Counters collected while loading a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Size of the source in bytes
    pub bytes: u64,
    /// Bracketed entries found
    pub entries: u64,
    /// Entries stored under a new keyword
    pub inserted: u64,
    /// Entries that overwrote an earlier keyword
    pub duplicates: u64,
    /// Entries whose keyword is empty or leaves `a..=z`
    pub rejected: u64,
    /// Entries without a closing `]`
    pub unterminated: u64,
}

/// A loaded dictionary: the keyword trie plus how it was built.
#[derive(Debug)]
pub struct Dictionary {
    trie: Trie,
    stats: LoadStats,
    path: Option<PathBuf>,
}

impl Dictionary {
    /// Load and index a dictionary file
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        Self::load_with_progress(path, true)
    }

    /// Load a dictionary file, showing a spinner on stderr unless `silent`
    pub fn load_with_progress(path: &Path, silent: bool) -> Result<Self, DictionaryError> {
        let source = DictionarySource::open(path)?;
        debug!(path = %path.display(), bytes = source.len(), "opened dictionary");

        #[cfg(feature = "progress")]
        let spinner = if !silent {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message(format!("Indexing {}...", path.display()));
            spinner.enable_steady_tick(std::time::Duration::from_millis(80));
            Some(spinner)
        } else {
            None
        };
        #[cfg(not(feature = "progress"))]
        let _ = silent;

        let mut dictionary = Self::from_bytes(&source)?;
        dictionary.path = Some(path.to_path_buf());

        #[cfg(feature = "progress")]
        {
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
        }

        let stats = dictionary.stats;
        info!(
            path = %path.display(),
            keywords = dictionary.trie.len(),
            entries = stats.entries,
            rejected = stats.rejected,
            unterminated = stats.unterminated,
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Index dictionary text held in memory
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictionaryError> {
        let mut trie = Trie::new();
        let mut stats = LoadStats {
            bytes: data.len() as u64,
            ..LoadStats::default()
        };

        for entry in scan(data) {
            stats.entries += 1;

            let Some(keyword) = entry.keyword else {
                stats.unterminated += 1;
                debug!(position = entry.position, "skipping entry without closing bracket");
                continue;
            };

            if !is_valid_keyword(keyword) {
                stats.rejected += 1;
                debug!(
                    keyword = %String::from_utf8_lossy(keyword),
                    position = entry.position,
                    "skipping keyword outside a-z"
                );
                continue;
            }

            let before = trie.len();
            trie.insert(keyword, entry.position, entry.length)?;
            if trie.len() == before {
                stats.duplicates += 1;
                debug!(
                    keyword = %String::from_utf8_lossy(keyword),
                    position = entry.position,
                    "keyword redefined, keeping later entry"
                );
            } else {
                stats.inserted += 1;
            }
        }

        Ok(Self {
            trie,
            stats,
            path: None,
        })
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Source file, when loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

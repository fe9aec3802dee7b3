use serde::Serialize;

/// Metadata attached to a stored keyword: where its entry starts in the
/// source file and how many bytes the entry spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    /// Byte offset of the entry's opening `[`
    pub position: u64,
    /// Entry length in bytes
    pub length: u64,
}

impl Record {
    pub fn new(position: u64, length: u64) -> Self {
        Self { position, length }
    }
}

/// Three-way outcome of a trie lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupResult {
    /// No path exists for the key
    Absent,
    /// The key is a strict prefix of stored keys but was never stored itself
    PrefixOnly,
    /// The key was stored with this record
    Found(Record),
}

impl LookupResult {
    /// True for `PrefixOnly` and `Found`.
    #[inline]
    pub fn is_prefix(&self) -> bool {
        !matches!(self, LookupResult::Absent)
    }

    #[inline]
    pub fn record(&self) -> Option<Record> {
        match self {
            LookupResult::Found(record) => Some(*record),
            _ => None,
        }
    }
}

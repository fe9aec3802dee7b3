use crate::trie::LookupResult;
use serde::Serialize;
use std::fmt;

/// Text printed for a key that is neither stored nor a prefix of a stored key.
pub const NOT_PREFIX: &str = "is not prefix";
/// Text printed for a strict prefix of stored keys.
pub const PREFIX: &str = "is prefix";

/// User-facing rendering of a lookup: `is not prefix`, `is prefix`, or
/// `<position> <length>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub LookupResult);

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            LookupResult::Absent => f.write_str(NOT_PREFIX),
            LookupResult::PrefixOnly => f.write_str(PREFIX),
            LookupResult::Found(record) => write!(f, "{} {}", record.position, record.length),
        }
    }
}

impl From<LookupResult> for Answer {
    fn from(result: LookupResult) -> Self {
        Answer(result)
    }
}

/// One lookup in machine-readable form.
#[derive(Debug, Clone, Serialize)]
pub struct LookupLine {
    pub query: String,
    #[serde(flatten)]
    pub result: LookupResult,
}

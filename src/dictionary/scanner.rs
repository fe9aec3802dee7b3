//! Splits dictionary bytes into `[keyword]definition` entries.
//!
//! An entry starts at every `[`. Its keyword is the text up to the first
//! `]` before the next `[`, and its length runs from the `[` up to one byte
//! before the next entry (so a one-entry-per-line file yields the length of
//! each line, newline excluded). The last line always counts as
//! newline-terminated.

use memchr::{Memchr, memchr, memchr_iter};

/// One bracketed entry as found in the source, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Text between `[` and `]`; `None` when the entry never closes
    pub keyword: Option<&'a [u8]>,
    /// Byte offset of the opening `[`
    pub position: u64,
    /// Bytes from the `[` to the end of the entry
    pub length: u64,
}

/// Iterator over the entries of a dictionary buffer.
pub struct Scanner<'a> {
    data: &'a [u8],
    opens: Memchr<'a>,
    current: Option<usize>,
    /// Offset the last entry is measured against
    tail_end: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let mut opens = memchr_iter(b'[', data);
        let current = opens.next();
        let tail_end = data.len() + usize::from(!data.ends_with(b"\n"));
        Self {
            data,
            opens,
            current,
            tail_end,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.current?;
        let next = self.opens.next();
        self.current = next;

        let body = &self.data[start + 1..next.unwrap_or(self.data.len())];
        let keyword = memchr(b']', body).map(|close| &body[..close]);
        let end = next.unwrap_or(self.tail_end);

        Some(RawEntry {
            keyword,
            position: start as u64,
            length: (end - start - 1) as u64,
        })
    }
}

/// Scan `data` into its entries.
pub fn scan(data: &[u8]) -> Scanner<'_> {
    Scanner::new(data)
}

/// A keyword is storable when it is non-empty and made of `a..=z` only.
pub fn is_valid_keyword(keyword: &[u8]) -> bool {
    !keyword.is_empty() && keyword.iter().all(u8::is_ascii_lowercase)
}

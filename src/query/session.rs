//! The interactive read-eval loop: whitespace-separated words in, one
//! answer line out per word, until a sentinel word or end of input.

use super::outcome::Answer;
use crate::trie::Trie;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Default word that ends a session.
pub const DEFAULT_SENTINEL: &str = "0";

/// Whitespace-separated words from a line-oriented reader.
///
/// Lines are pulled only when the queue runs dry, so answers for an
/// interactive line are produced before the next line is read.
pub struct Words<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    line: Vec<u8>,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }

            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.pending.extend(
                        self.line
                            .split(u8::is_ascii_whitespace)
                            .filter(|w| !w.is_empty())
                            .map(<[u8]>::to_vec),
                    );
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Answer every word from `words` against `trie` until `sentinel` or end
/// of input. Returns how many queries were answered.
pub fn run_query_loop<R, W>(
    trie: &Trie,
    words: &mut Words<R>,
    out: &mut W,
    sentinel: &str,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;

    for word in words {
        let word = word?;
        if word == sentinel.as_bytes() {
            debug!(answered, "sentinel reached");
            break;
        }

        writeln!(out, "{}", Answer(trie.find(&word)))?;
        out.flush()?;
        answered += 1;
    }

    Ok(answered)
}

use super::node::{Node, symbol};
use super::types::Record;

/// Depth-first, lexicographically ordered walk over stored keys.
pub struct Iter<'a> {
    /// Pending nodes with the key length of their parent and their own symbol
    stack: Vec<(&'a Node, usize, Option<u8>)>,
    key: Vec<u8>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(start: &'a Node, prefix: Vec<u8>) -> Self {
        Self {
            stack: vec![(start, prefix.len(), None)],
            key: prefix,
        }
    }

    pub(super) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            key: Vec::new(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = (String, Record);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, sym)) = self.stack.pop() {
            self.key.truncate(depth);
            if let Some(sym) = sym {
                self.key.push(sym);
            }

            let depth = self.key.len();
            // Reversed so the smallest symbol is popped first.
            for (slot, child) in node.children().rev() {
                self.stack.push((child, depth, Some(symbol(slot))));
            }

            if let Some(record) = node.record() {
                // Keys only ever hold 'a'..='z'.
                let key = self.key.iter().map(|&b| b as char).collect();
                return Some((key, record));
            }
        }
        None
    }
}

use super::types::Record;

/// Number of child slots per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// Map a byte to its child slot. `None` for anything outside `a..=z`.
#[inline]
pub fn slot(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some((byte - b'a') as usize)
    } else {
        None
    }
}

/// Inverse of [`slot`].
#[inline]
pub fn symbol(slot: usize) -> u8 {
    debug_assert!(slot < ALPHABET_SIZE);
    b'a' + slot as u8
}

/// A trie node: the prefix spelled by the path from the root to here.
#[derive(Debug, Default)]
pub struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    record: Option<Record>,
}

impl Node {
    #[inline]
    pub fn child(&self, slot: usize) -> Option<&Node> {
        self.children[slot].as_deref()
    }

    /// Child at `slot`, created empty if missing. The flag is true when a
    /// new node was allocated.
    #[inline]
    pub fn child_or_insert(&mut self, slot: usize) -> (&mut Node, bool) {
        let created = self.children[slot].is_none();
        let child = self.children[slot].get_or_insert_with(Box::default);
        (child, created)
    }

    #[inline]
    pub fn record(&self) -> Option<Record> {
        self.record
    }

    /// Attach a record, returning the one it replaced.
    #[inline]
    pub fn set_record(&mut self, record: Record) -> Option<Record> {
        self.record.replace(record)
    }

    /// Occupied child slots in ascending symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_deref().map(|n| (i, n)))
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

impl Drop for Node {
    // Tear down iteratively; a long key is a deep chain of boxes and the
    // default recursive drop would use one stack frame per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

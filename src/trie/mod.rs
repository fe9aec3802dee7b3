//! 26-ary prefix tree over lowercase ASCII keys.
//!
//! Every node stands for the prefix spelled by its path from the root. A
//! node carries a [`Record`] exactly when some inserted key ends there,
//! which is what separates [`LookupResult::PrefixOnly`] from
//! [`LookupResult::Found`].
//!
//! ```
//! use dictrie::trie::{LookupResult, Record, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("cat", 10, 5).unwrap();
//! trie.insert("car", 20, 3).unwrap();
//!
//! assert_eq!(trie.find("cat"), LookupResult::Found(Record::new(10, 5)));
//! assert_eq!(trie.find("ca"), LookupResult::PrefixOnly);
//! assert_eq!(trie.find("cow"), LookupResult::Absent);
//! ```

pub mod error;
pub mod iter;
pub mod node;
pub mod types;

#[cfg(test)]
mod proptests;

pub use error::InvalidKeyError;
pub use iter::Iter;
pub use types::{LookupResult, Record};

use node::{Node, slot};

/// Prefix tree mapping keywords to their [`Record`].
///
/// Built once through [`insert`](Trie::insert), then queried through `&self`
/// methods only, so a finished trie can be shared between reader threads.
#[derive(Debug)]
pub struct Trie {
    root: Node,
    /// Keys with an attached record
    len: usize,
    /// Allocated nodes, root included
    nodes: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
            nodes: 1,
        }
    }

    /// Store `key` with its record, overwriting any previous record for the
    /// same key.
    ///
    /// Fails for an empty key or one containing bytes outside `a..=z`. The
    /// key is checked in full before the walk starts.
    pub fn insert(
        &mut self,
        key: impl AsRef<[u8]>,
        position: u64,
        length: u64,
    ) -> Result<(), InvalidKeyError> {
        let key = key.as_ref();
        validate_key(key)?;

        let mut node = &mut self.root;
        for &byte in key {
            // validated above
            let (child, created) = node.child_or_insert((byte - b'a') as usize);
            if created {
                self.nodes += 1;
            }
            node = child;
        }

        if node.set_record(Record::new(position, length)).is_none() {
            self.len += 1;
        }
        Ok(())
    }

    /// Look `key` up. Never fails: an empty key resolves at the root and a
    /// byte outside the alphabet simply has no matching child.
    pub fn find(&self, key: impl AsRef<[u8]>) -> LookupResult {
        match self.walk(key.as_ref()) {
            None => LookupResult::Absent,
            Some(node) => match node.record() {
                Some(record) => LookupResult::Found(record),
                None => LookupResult::PrefixOnly,
            },
        }
    }

    /// Record stored for exactly `key`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<Record> {
        self.find(key).record()
    }

    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    /// True when `key` is a stored key or a prefix of one.
    pub fn is_prefix(&self, key: impl AsRef<[u8]>) -> bool {
        self.find(key).is_prefix()
    }

    /// Number of stored keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// All stored keys with their records, in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, Vec::new())
    }

    /// Stored keys starting with `prefix`, in lexicographic order.
    pub fn with_prefix(&self, prefix: impl AsRef<[u8]>) -> Iter<'_> {
        let prefix = prefix.as_ref();
        match self.walk(prefix) {
            Some(node) => Iter::new(node, prefix.to_vec()),
            None => Iter::empty(),
        }
    }

    /// Follow `key` from the root; `None` as soon as a child is missing.
    fn walk(&self, key: &[u8]) -> Option<&Node> {
        // Root only counts as reachable once something hangs off it.
        if self.nodes == 1 {
            return None;
        }
        let mut node = &self.root;
        for &byte in key {
            node = node.child(slot(byte)?)?;
        }
        Some(node)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = (String, Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_key(key: &[u8]) -> Result<(), InvalidKeyError> {
    if key.is_empty() {
        return Err(InvalidKeyError::Empty);
    }
    match key.iter().position(|b| !b.is_ascii_lowercase()) {
        Some(index) => Err(InvalidKeyError::Symbol {
            symbol: key[index],
            index,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.insert("cat", 10, 5).unwrap();
        trie.insert("car", 20, 3).unwrap();
        trie.insert("dog", 30, 7).unwrap();
        trie
    }

    #[test]
    fn test_find_sample() {
        let trie = sample();
        assert_eq!(trie.find("cat"), LookupResult::Found(Record::new(10, 5)));
        assert_eq!(trie.find("car"), LookupResult::Found(Record::new(20, 3)));
        assert_eq!(trie.find("ca"), LookupResult::PrefixOnly);
        assert_eq!(trie.find("c"), LookupResult::PrefixOnly);
        assert_eq!(trie.find("do"), LookupResult::PrefixOnly);
        assert_eq!(trie.find("dogs"), LookupResult::Absent);
        assert_eq!(trie.find("x"), LookupResult::Absent);
    }

    #[test]
    fn test_find_out_of_alphabet_is_absent() {
        let trie = sample();
        assert_eq!(trie.find("ca t"), LookupResult::Absent);
        assert_eq!(trie.find("Cat"), LookupResult::Absent);
        assert_eq!(trie.find("cat!"), LookupResult::Absent);
        assert_eq!(trie.find([0xffu8, b'a']), LookupResult::Absent);
        assert_eq!(trie.find("ção"), LookupResult::Absent);
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.find(""), LookupResult::Absent);
        assert_eq!(trie.find("a"), LookupResult::Absent);
        assert_eq!(trie.iter().count(), 0);
    }

    #[test]
    fn test_empty_key_after_insert() {
        let mut trie = Trie::new();
        trie.insert("a", 0, 0).unwrap();
        assert_eq!(trie.find("a"), LookupResult::Found(Record::new(0, 0)));
        assert_eq!(trie.find(""), LookupResult::PrefixOnly);
    }

    #[test]
    fn test_zero_length_record_is_found() {
        let mut trie = Trie::new();
        trie.insert("ab", 7, 0).unwrap();
        assert_eq!(trie.find("ab"), LookupResult::Found(Record::new(7, 0)));
        assert_eq!(trie.find("a"), LookupResult::PrefixOnly);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut trie = sample();
        let nodes = trie.node_count();
        trie.insert("cat", 99, 1).unwrap();
        assert_eq!(trie.find("cat"), LookupResult::Found(Record::new(99, 1)));
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_insert_prefix_of_existing_key() {
        let mut trie = sample();
        assert_eq!(trie.find("ca"), LookupResult::PrefixOnly);
        trie.insert("ca", 1, 2).unwrap();
        assert_eq!(trie.find("ca"), LookupResult::Found(Record::new(1, 2)));
        assert_eq!(trie.find("cat"), LookupResult::Found(Record::new(10, 5)));
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_insert_empty_key_fails_without_change() {
        let mut trie = sample();
        let (len, nodes) = (trie.len(), trie.node_count());
        assert_eq!(trie.insert("", 0, 0), Err(InvalidKeyError::Empty));
        assert_eq!(trie.len(), len);
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.find(""), LookupResult::PrefixOnly);
    }

    #[test]
    fn test_insert_invalid_symbol_fails_without_change() {
        let mut trie = Trie::new();
        let err = trie.insert("abC", 0, 0).unwrap_err();
        assert_eq!(
            err,
            InvalidKeyError::Symbol {
                symbol: b'C',
                index: 2
            }
        );
        // No partial path was created for "ab".
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.find("ab"), LookupResult::Absent);
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let trie = sample();
        // root + c, a, t, r + d, o, g
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn test_get_contains_is_prefix() {
        let trie = sample();
        assert_eq!(trie.get("dog"), Some(Record::new(30, 7)));
        assert_eq!(trie.get("do"), None);
        assert!(trie.contains("car"));
        assert!(!trie.contains("ca"));
        assert!(trie.is_prefix("ca"));
        assert!(trie.is_prefix("car"));
        assert!(!trie.is_prefix("cow"));
    }

    #[test]
    fn test_find_is_idempotent() {
        let trie = sample();
        for key in ["cat", "ca", "x", "", "dogs"] {
            let first = trie.find(key);
            for _ in 0..3 {
                assert_eq!(trie.find(key), first);
            }
        }
    }

    #[test]
    fn test_iter_sorted() {
        let trie = sample();
        let keys: Vec<String> = trie.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["car", "cat", "dog"]);
    }

    #[test]
    fn test_with_prefix() {
        let mut trie = sample();
        trie.insert("ca", 1, 1).unwrap();

        let hits: Vec<(String, Record)> = trie.with_prefix("ca").collect();
        assert_eq!(
            hits,
            vec![
                ("ca".to_string(), Record::new(1, 1)),
                ("car".to_string(), Record::new(20, 3)),
                ("cat".to_string(), Record::new(10, 5)),
            ]
        );
        assert_eq!(trie.with_prefix("dog").count(), 1);
        assert_eq!(trie.with_prefix("dogs").count(), 0);
        assert_eq!(trie.with_prefix("z").count(), 0);
        assert_eq!(trie.with_prefix("").count(), 4);
    }

    #[test]
    fn test_concurrent_readers() {
        let trie = sample();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        assert_eq!(trie.find("cat"), LookupResult::Found(Record::new(10, 5)));
                        assert_eq!(trie.find("do"), LookupResult::PrefixOnly);
                    }
                });
            }
        });
    }

    #[test]
    fn test_long_key() {
        let mut trie = Trie::new();
        let key = "z".repeat(100_000);
        trie.insert(&key, 1, 2).unwrap();
        assert_eq!(trie.find(&key), LookupResult::Found(Record::new(1, 2)));
        assert_eq!(trie.find(&key[..50_000]), LookupResult::PrefixOnly);
        assert_eq!(trie.node_count(), 100_001);
    }
}

use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,6}"
}

fn validate_trie(t: &Trie, model: &BTreeMap<String, Record>) {
    assert_eq!(t.len(), model.len(), "len must match distinct keys");
    assert_eq!(t.is_empty(), model.is_empty());

    let stored: Vec<(String, Record)> = t.iter().collect();
    let expected: Vec<(String, Record)> =
        model.iter().map(|(k, r)| (k.clone(), *r)).collect();
    assert_eq!(stored, expected, "iteration must match model order and content");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_btreemap(
        ops in prop::collection::vec((key_strategy(), any::<u64>(), any::<u64>()), 0..64),
        probes in prop::collection::vec("[a-f ]{0,7}", 0..32),
    ) {
        let mut trie = Trie::new();
        let mut model = BTreeMap::new();

        for (key, position, length) in &ops {
            trie.insert(key, *position, *length).unwrap();
            model.insert(key.clone(), Record::new(*position, *length));
        }

        validate_trie(&trie, &model);

        for probe in probes.iter().chain(ops.iter().map(|(k, _, _)| k)) {
            let expected = if let Some(record) = model.get(probe) {
                LookupResult::Found(*record)
            } else if model
                .range(probe.clone()..)
                .next()
                .is_some_and(|(k, _)| k.starts_with(probe.as_str()))
            {
                LookupResult::PrefixOnly
            } else {
                LookupResult::Absent
            };
            prop_assert_eq!(trie.find(probe), expected, "probe {:?}", probe);
        }
    }

    #[test]
    fn prop_last_write_wins(key in key_strategy(), first in any::<(u64, u64)>(), second in any::<(u64, u64)>()) {
        let mut trie = Trie::new();
        trie.insert(&key, first.0, first.1).unwrap();
        let nodes = trie.node_count();
        trie.insert(&key, second.0, second.1).unwrap();

        prop_assert_eq!(trie.find(&key), LookupResult::Found(Record::new(second.0, second.1)));
        prop_assert_eq!(trie.len(), 1);
        prop_assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn prop_strict_prefixes_are_prefix_only(key in "[a-z]{2,12}") {
        let mut trie = Trie::new();
        trie.insert(&key, 1, 1).unwrap();

        for end in 0..key.len() {
            prop_assert_eq!(trie.find(&key[..end]), LookupResult::PrefixOnly);
        }
        prop_assert_eq!(trie.node_count(), key.len() + 1);
    }

    #[test]
    fn prop_find_is_total(keys in prop::collection::vec(key_strategy(), 0..16), probe in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut trie = Trie::new();
        for key in &keys {
            trie.insert(key, 0, 0).unwrap();
        }
        let first = trie.find(&probe);
        prop_assert_eq!(trie.find(&probe), first);
        if probe.iter().any(|b| !b.is_ascii_lowercase()) {
            prop_assert_eq!(first, LookupResult::Absent);
        }
    }

    #[test]
    fn prop_invalid_insert_leaves_trie_unchanged(
        keys in prop::collection::vec(key_strategy(), 0..16),
        bad in "[a-z]{0,4}[^a-z][a-z]{0,4}",
    ) {
        let mut trie = Trie::new();
        for key in &keys {
            trie.insert(key, 0, 0).unwrap();
        }
        let before: Vec<_> = trie.iter().collect();
        let nodes = trie.node_count();

        prop_assert!(trie.insert(&bad, 1, 1).is_err());
        prop_assert_eq!(trie.iter().collect::<Vec<_>>(), before);
        prop_assert_eq!(trie.node_count(), nodes);
    }
}

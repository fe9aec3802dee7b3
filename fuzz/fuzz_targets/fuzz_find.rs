#![no_main]

use arbitrary::Arbitrary;
use dictrie::trie::{LookupResult, Trie};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    keys: Vec<Vec<u8>>,
    probes: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    let mut trie = Trie::new();
    for (i, key) in input.keys.iter().enumerate() {
        let valid = !key.is_empty() && key.iter().all(u8::is_ascii_lowercase);
        assert_eq!(trie.insert(key, i as u64, key.len() as u64).is_ok(), valid);
    }
    for probe in &input.probes {
        let result = trie.find(probe);
        assert_eq!(trie.find(probe), result);
        if probe.iter().any(|b| !b.is_ascii_lowercase()) {
            assert_eq!(result, LookupResult::Absent);
        }
    }
});

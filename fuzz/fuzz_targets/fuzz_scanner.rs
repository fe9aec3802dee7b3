#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must load without panicking, and every stored
    // keyword must point at an opening bracket in the input.
    if let Ok(dict) = dictrie::dictionary::Dictionary::from_bytes(data) {
        for (keyword, record) in dict.trie().iter() {
            assert_eq!(data[record.position as usize], b'[');
            assert!(dict.trie().contains(&keyword));
        }
    }
});

// MIT License
// Copyright (c) 2025 Wolf Garbe
// Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
// https://opensource.org/licenses/MIT

// Delete-variant generation and the delete hash.
//
// inexpensive and language independent: only deletes, no transposes + replaces + inserts
// replaces and inserts are expensive and language dependent (Chinese has 70,000 Unicode Han characters)

use ahash::AHashSet;

#[cfg(not(all(target_feature = "aes", target_feature = "sse2")))]
use ahash::RandomState;
#[cfg(not(all(target_feature = "aes", target_feature = "sse2")))]
use std::sync::LazyLock;

#[cfg(not(all(target_feature = "aes", target_feature = "sse2")))]
static HASHER_32: LazyLock<RandomState> =
    LazyLock::new(|| RandomState::with_seeds(805272099, 242851902, 646123436, 591410655));

// stable hash, faster, but not available on all platforms
// https://github.com/ogxd/gxhash
#[inline]
#[cfg(all(target_feature = "aes", target_feature = "sse2"))]
pub fn hash32(term_bytes: &[u8]) -> u32 {
    use gxhash::gxhash32;

    gxhash32(term_bytes, 1234)
}

// fixed seeds keep the hash stable for one build on all platforms
// https://github.com/tkaitchuck/aHash
#[inline]
#[cfg(not(all(target_feature = "aes", target_feature = "sse2")))]
pub fn hash32(term_bytes: &[u8]) -> u32 {
    HASHER_32.hash_one(term_bytes) as u32
}

/// Delete variants of `term` that the dictionary indexes.
///
/// Only the first `prefix_length` characters are used. The result contains that prefix itself,
/// every string reachable from it by deleting 1..=`max_edit_distance` characters, and the empty
/// string when the whole term is short enough to be deleted entirely.
pub fn edits_prefix(
    term: &str,
    max_edit_distance: usize,
    prefix_length: usize,
) -> AHashSet<String> {
    let mut delete_words = AHashSet::new();

    let term_len = char_len(term);
    if term_len <= max_edit_distance {
        delete_words.insert(String::new());
    }

    let key = if term_len > prefix_length {
        char_prefix(term, prefix_length)
    } else {
        term.to_string()
    };
    edits(&key, 0, max_edit_distance, &mut delete_words);
    delete_words.insert(key);

    delete_words
}

/// Recursively adds every single-character delete of `word` until `max_edit_distance` deletes.
pub(crate) fn edits(
    word: &str,
    edit_distance: usize,
    max_edit_distance: usize,
    delete_words: &mut AHashSet<String>,
) {
    let edit_distance = edit_distance + 1;
    let word_len = char_len(word);

    if word_len > 1 {
        for i in 0..word_len {
            let delete = remove_char(word, i);

            if !delete_words.contains(&delete) {
                if edit_distance < max_edit_distance {
                    edits(&delete, edit_distance, max_edit_distance, delete_words);
                }
                delete_words.insert(delete);
            }
        }
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn remove_char(s: &str, index: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, ch)| ch)
        .collect()
}

pub(crate) fn char_prefix(s: &str, len: usize) -> String {
    s.chars().take(len).collect()
}

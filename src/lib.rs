/*!

Spelling correction & Fuzzy search based on Symmetric Delete spelling correction algorithm,
with a staged delete index for bulk and parallel dictionary construction.

Every dictionary word contributes its delete variants (the word with up to `max_dictionary_edit_distance`
characters removed) to a hash-bucketed delete map. A lookup generates the deletes of the input, reads the
matching buckets and verifies the candidates with a Damerau-Levenshtein (OSA) distance.

During construction the deletes are first collected in a [`SuggestionStage`]: per delete hash, an intrusive
linked chain of terms whose nodes live in a paged [`ChunkArray`]. A stage is merged into the delete map with a
single commit, so independent workers can each fill a private stage and merge one after another.

#### Usage

```rust
use symspell_stage::{SuggestionStage, SymSpell, Verbosity};

let mut symspell = SymSpell::new(2, 7, 1).unwrap();

// bulk construction: stage many words, commit once
let mut stage = SuggestionStage::new();
for (term, count) in [("house", 231310420), ("mouse", 7092600), ("horse", 9453426)] {
    symspell.create_dictionary_entry_staged(term, count, &mut stage);
}
symspell.commit_staged(&mut stage);

//lookup suggestions for single-word input strings
let suggestions = symspell.lookup("hous", Verbosity::Closest, 2, None).unwrap();
//display suggestions, edit distance and term frequency
for suggestion in &suggestions {
    println!("{}", suggestion);
}
assert_eq!("house", suggestions[0].term);
```

*/

mod arena;
mod deletes;
mod distance;
mod error;
mod helpers;
mod staging;
mod suggestion;
mod symspell;

#[cfg(test)]
mod proptests;

pub use arena::{ArenaIndex, ChunkArray};
pub use deletes::{edits_prefix, hash32};
pub use distance::{DamerauOsa, EditDistance};
pub use error::{Result, SymSpellError};
pub use helpers::{
    distance_to_similarity, null_distance, null_similarity, similarity_to_distance,
    strip_common_affix,
};
pub use staging::{Chain, DeleteMap, SuggestionStage};
pub use suggestion::{SuggestItem, Verbosity};
pub use symspell::SymSpell;

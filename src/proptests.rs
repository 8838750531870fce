use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn term_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_arena_indices_are_stable(values in prop::collection::vec(any::<u64>(), 0..=10_000)) {
        let mut array = ChunkArray::new();
        let mut indices = Vec::with_capacity(values.len());

        for (i, value) in values.iter().enumerate() {
            let index = array.append(*value);
            prop_assert_eq!(i, index.as_usize());
            prop_assert_eq!(value, array.get(index));
            indices.push(index);
        }

        prop_assert_eq!(values.len(), array.len());
        for (index, value) in indices.iter().zip(values.iter()) {
            prop_assert_eq!(value, array.get(*index));
        }
    }

    #[test]
    fn prop_chains_match_counts(
        inserts in prop::collection::vec((0u32..16, term_strategy()), 0..=500),
    ) {
        let mut stage = SuggestionStage::new();
        let mut expected: BTreeMap<u32, Vec<String>> = BTreeMap::new();

        for (hash, term) in &inserts {
            stage.insert(*hash, term.as_str());
            expected.entry(*hash).or_default().insert(0, term.clone());
        }

        prop_assert_eq!(inserts.len(), stage.node_count());
        prop_assert_eq!(expected.len(), stage.bucket_count());
        for (hash, terms) in &expected {
            let chain: Vec<&str> = stage.chain(*hash).collect();
            prop_assert_eq!(terms, &chain);
        }

        let mut deletes = DeleteMap::new();
        stage.commit_into(&mut deletes);
        prop_assert_eq!(expected.len(), deletes.len());
        for (hash, terms) in &expected {
            let committed: Vec<&str> = deletes[hash].iter().map(|t| &**t).collect();
            prop_assert_eq!(terms, &committed);
        }
    }

    #[test]
    fn prop_commit_order_concatenates(
        first in prop::collection::vec(term_strategy(), 0..=50),
        second in prop::collection::vec(term_strategy(), 0..=50),
    ) {
        let mut deletes = DeleteMap::new();
        for batch in [&first, &second] {
            let mut stage = SuggestionStage::new();
            for term in batch {
                stage.insert(1, term.as_str());
            }
            stage.commit_into(&mut deletes);
        }

        let expected: Vec<&str> = first
            .iter()
            .rev()
            .chain(second.iter().rev())
            .map(String::as_str)
            .collect();
        let committed: Vec<&str> = deletes
            .get(&1)
            .map(|terms| terms.iter().map(|t| &**t).collect())
            .unwrap_or_default();
        prop_assert_eq!(expected, committed);
    }

    #[test]
    fn prop_strip_common_affix_keeps_middle(
        prefix in "[a-c]{0,5}",
        a_mid in "[d-f]{0,5}",
        b_mid in "[g-i]{0,5}",
        suffix in "[a-c]{0,5}",
    ) {
        let a: Vec<char> = format!("{prefix}{a_mid}{suffix}").chars().collect();
        let b: Vec<char> = format!("{prefix}{b_mid}{suffix}").chars().collect();
        let (a_len, b_len, start) = strip_common_affix(&a, &b);

        prop_assert_eq!(a.len() - a_len, b.len() - b_len);
        prop_assert!(a_len <= a.len() && start + a_len <= a.len());
        if !a_mid.is_empty() && !b_mid.is_empty() {
            prop_assert!(start >= prefix.len());
        }
        prop_assert_eq!(&a[..start], &b[..start]);
        prop_assert_eq!(&a[start + a_len..], &b[start + b_len..]);
    }

    #[test]
    fn prop_distance_is_symmetric_and_bounded(a in term_strategy(), b in term_strategy()) {
        let metric = DamerauOsa;
        let distance = metric.distance(&a, &b, usize::MAX);
        prop_assert_eq!(distance, metric.distance(&b, &a, usize::MAX));

        let distance = distance.unwrap();
        prop_assert!(distance <= a.len().max(b.len()));
        prop_assert!(distance >= a.len().abs_diff(b.len()));
        prop_assert_eq!(distance == 0, a == b);
    }

    #[test]
    fn prop_lookup_finds_every_word_within_budget(
        words in prop::collection::btree_set("[a-e]{1,6}", 1..=40),
        input in "[a-e]{1,6}",
    ) {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        for (i, word) in words.iter().enumerate() {
            symspell.create_dictionary_entry(word, i + 1);
        }

        let suggestions = symspell.lookup(&input, Verbosity::All, 2, None).unwrap();
        let metric = DamerauOsa;
        let expected: Vec<&String> = words
            .iter()
            .filter(|word| metric.distance(&input, word, 2).is_some())
            .collect();

        prop_assert_eq!(expected.len(), suggestions.len());
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for suggestion in &suggestions {
            prop_assert_eq!(
                metric.distance(&input, &suggestion.term, 2),
                Some(suggestion.distance)
            );
        }
    }
}

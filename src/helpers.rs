//! Pre- and post-processing shared by the distance routine and the lookup layer.
//!
//! Degenerate results are returned as `Option`s: `None` means "no result within the budget",
//! which keeps it apart from a legitimate distance of zero.

/// Trims the suffix and then the prefix shared by `a` and `b`.
///
/// Returns `(a_len, b_len, start)`: the differing middle segments are
/// `a[start..start + a_len]` and `b[start..start + b_len]`. Both lengths shrink by the same
/// amount, so their difference is preserved.
pub fn strip_common_affix<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    let mut a_len = a.len();
    let mut b_len = b.len();

    while a_len != 0 && b_len != 0 && a[a_len - 1] == b[b_len - 1] {
        a_len -= 1;
        b_len -= 1;
    }

    let mut start = 0;
    while start != a_len && start != b_len && a[start] == b[start] {
        start += 1;
    }

    (a_len - start, b_len - start, start)
}

/// Distance when at least one of the strings is empty: the length of the other one, or `None`
/// if that exceeds `max_distance`. At least one of `a` and `b` must be empty.
pub fn null_distance(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    debug_assert!(a.is_empty() || b.is_empty());

    let len = if a.is_empty() {
        b.chars().count()
    } else {
        a.chars().count()
    };
    (len <= max_distance).then_some(len)
}

/// Similarity when at least one of the strings is empty.
///
/// Two empty strings are identical (`Some(1.0)`). Otherwise the pair has no similarity, which
/// is still a valid answer (`Some(0.0)`) for any non-negative `min_similarity`.
pub fn null_similarity(a: &str, b: &str, min_similarity: f64) -> Option<f64> {
    debug_assert!(a.is_empty() || b.is_empty());

    if a.is_empty() && b.is_empty() {
        Some(1.0)
    } else if min_similarity >= 0.0 {
        Some(0.0)
    } else {
        None
    }
}

/// `1 - distance / length`; `None` stays `None` (incomparable).
pub fn distance_to_similarity(distance: Option<usize>, length: usize) -> Option<f64> {
    let distance = distance?;
    if length == 0 {
        return Some(1.0);
    }
    Some(1.0 - distance as f64 / length as f64)
}

/// Largest edit distance that still satisfies `similarity` for a string of `length`.
pub fn similarity_to_distance(similarity: f64, length: usize) -> usize {
    // epsilon counters 1 - (1 - d/l) landing just below d
    (length as f64 * (1.0 - similarity) + 0.000_000_000_1).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn strips_shared_prefix_and_suffix() {
        assert_eq!((1, 1, 3), strip_common_affix(&chars("abcXdef"), &chars("abcYdef")));
        assert_eq!((0, 0, 0), strip_common_affix(&chars("same"), &chars("same")));
        assert_eq!((0, 2, 2), strip_common_affix(&chars("ab"), &chars("abcd")));
        assert_eq!((0, 1, 0), strip_common_affix(&chars("bc"), &chars("abc")));
        assert_eq!((2, 2, 0), strip_common_affix(&chars("ab"), &chars("ba")));
        assert_eq!((0, 3, 0), strip_common_affix(&chars(""), &chars("abc")));
    }

    #[test]
    fn strip_keeps_lengths_paired() {
        let (a_len, b_len, start) = strip_common_affix(&chars("kitten"), &chars("sitting"));
        assert_eq!(7 - 6, b_len - a_len);
        assert_eq!(0, start);
        assert_eq!((6, 7), (a_len, b_len));
    }

    #[test]
    fn null_distance_cases() {
        assert_eq!(Some(0), null_distance("", "", 2));
        assert_eq!(None, null_distance("", "ab", 1));
        assert_eq!(Some(1), null_distance("", "a", 1));
        assert_eq!(Some(2), null_distance("ää", "", 2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn null_distance_requires_an_empty_string() {
        null_distance("ab", "abc", 2);
    }

    #[test]
    fn null_similarity_cases() {
        assert_eq!(Some(1.0), null_similarity("", "", 0.5));
        assert_eq!(Some(0.0), null_similarity("", "abc", 0.0));
        assert_eq!(None, null_similarity("abc", "", -0.5));
    }

    #[test]
    fn converts_between_distance_and_similarity() {
        let similarity = distance_to_similarity(Some(2), 10).unwrap();
        assert!((similarity - 0.8).abs() < 1e-12);
        assert_eq!(2, similarity_to_distance(0.8, 10));
        assert_eq!(None, distance_to_similarity(None, 10));
        assert_eq!(Some(1.0), distance_to_similarity(Some(0), 0));
        assert_eq!(0, similarity_to_distance(1.5, 4));
    }

    #[test]
    fn similarity_round_trip() {
        for length in 1..=40 {
            for distance in 0..=length {
                let similarity = distance_to_similarity(Some(distance), length).unwrap();
                assert_eq!(distance, similarity_to_distance(similarity, length));
            }
        }
    }
}

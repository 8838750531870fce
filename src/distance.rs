// MIT License
// Copyright (c) 2025 Wolf Garbe
// Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
// https://opensource.org/licenses/MIT

use std::{cmp::min, mem};

use smallvec::SmallVec;
use smallvec::smallvec;

use crate::helpers::{
    distance_to_similarity, null_distance, null_similarity, similarity_to_distance,
    strip_common_affix,
};

const VEC_SIZE: usize = 16;
pub(crate) type FastVec<T> = SmallVec<[T; VEC_SIZE]>;

/// A string metric used to verify lookup candidates.
pub trait EditDistance {
    /// Edit distance between `a` and `b`, or `None` if it is greater than `max_distance`.
    fn distance(&self, a: &str, b: &str, max_distance: usize) -> Option<usize>;

    /// Normalized similarity in `0.0..=1.0` (1.0 = identical), or `None` if it is below
    /// `min_similarity`.
    fn similarity(&self, a: &str, b: &str, min_similarity: f64) -> Option<f64> {
        let a_len = a.chars().count();
        let b_len = b.chars().count();
        if a_len == 0 || b_len == 0 {
            return null_similarity(a, b, min_similarity).filter(|s| *s >= min_similarity);
        }

        let length = a_len.max(b_len);
        let max_distance = similarity_to_distance(min_similarity, length);
        distance_to_similarity(self.distance(a, b, max_distance), length)
    }
}

/// Damerau-Levenshtein edit distance, like Levenshtein but allows for adjacent transpositions.
/// Optimal string alignment version (OSA): each substring can only be edited once.
/// E.g., "CA" to "ABC" has an edit distance of 2 by for Damerau-Levenshtein, but a distance of 3
/// when using the optimal string alignment algorithm.
/// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Optimal_string_alignment_distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauOsa;

impl EditDistance for DamerauOsa {
    fn distance(&self, a: &str, b: &str, max_distance: usize) -> Option<usize> {
        if a.is_empty() || b.is_empty() {
            return null_distance(a, b, max_distance);
        }

        let a: FastVec<char> = a.chars().collect();
        let b: FastVec<char> = b.chars().collect();
        // a is the shorter one from here on
        let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };

        //the edit distance can't be less than the difference of the lengths of the strings.
        if b.len() - a.len() > max_distance {
            return None;
        }

        let (a_len, b_len, start) = strip_common_affix(&a, &b);
        if a_len == 0 {
            return (b_len <= max_distance).then_some(b_len);
        }

        osa(
            &a[start..start + a_len],
            &b[start..start + b_len],
            max_distance,
        )
    }
}

fn osa(a: &[char], b: &[char], max_distance: usize) -> Option<usize> {
    let b_len = b.len();

    // 0..=b_len behaves like 0..b_len.saturating_add(1) which could be a different size
    // this leads to significantly worse code gen when swapping the vectors below
    let mut prev_two_distances: FastVec<usize> = (0..b_len + 1).collect();
    let mut prev_distances: FastVec<usize> = (0..b_len + 1).collect();
    let mut curr_distances: FastVec<usize> = smallvec![0; b_len + 1];

    for (i, &a_char) in a.iter().enumerate() {
        curr_distances[0] = i + 1;

        for (j, &b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_distances[j + 1] = min(
                curr_distances[j] + 1,
                min(prev_distances[j + 1] + 1, prev_distances[j] + cost),
            );
            if i > 0 && j > 0 && a_char != b_char && a_char == b[j - 1] && b_char == a[i - 1] {
                curr_distances[j + 1] = min(curr_distances[j + 1], prev_two_distances[j - 1] + 1);
            }
        }

        mem::swap(&mut prev_two_distances, &mut prev_distances);
        mem::swap(&mut prev_distances, &mut curr_distances);
    }

    let distance = prev_distances[b_len];
    (distance <= max_distance).then_some(distance)
}

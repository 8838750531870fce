// Symmetric Delete spelling correction
//
// The Symmetric Delete spelling correction algorithm reduces the complexity of edit candidate generation and dictionary lookup
// for a given Damerau-Levenshtein distance. Opposite to other algorithms only deletes are required, no transposes + replaces + inserts.
// Transposes + replaces + inserts of the input term are transformed into deletes of the dictionary term.
//
// Dictionary construction stages the deletes of many terms in a SuggestionStage and merges them into the
// delete map in one commit per batch (or per worker shard). Lookups only read the delete map.
//
// MIT License
// Copyright (c) 2025 Wolf Garbe
// Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
// https://opensource.org/licenses/MIT

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use rayon::prelude::*;
use std::cmp::{max, min};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::deletes::{char_len, char_prefix, edits_prefix, hash32, remove_char};
use crate::distance::{DamerauOsa, EditDistance};
use crate::error::{Result, SymSpellError};
use crate::helpers::{distance_to_similarity, similarity_to_distance};
use crate::staging::{DeleteMap, SuggestionStage};
use crate::suggestion::{SuggestItem, Verbosity};

/// Initial reservation for the stage used by bulk dictionary loads.
const LOAD_STAGE_CAPACITY: usize = 16384;

/// SymSpell spell checker and corrector.
pub struct SymSpell<D = DamerauOsa> {
    /// Maximum edit distance for dictionary precalculation.
    max_dictionary_edit_distance: usize,
    /// The length of word prefixes, from which deletes are generated. (5..7).
    prefix_length: usize,
    /// The minimum frequency count for dictionary words to be considered a valid for spelling correction.
    count_threshold: usize,
    /// Maximum dictionary term length
    max_dictionary_term_length: usize,
    /// Delete hash → dictionary terms the delete was derived from. Only written by committing a stage.
    deletes: DeleteMap,
    /// Dictionary of unique correct spelling words, and the frequency count for each word.
    words: AHashMap<Box<str>, usize>,
    /// Words seen with a cumulative count still below count_threshold.
    below_threshold_words: AHashMap<Box<str>, usize>,
    distance: D,
}

impl SymSpell<DamerauOsa> {
    /// Creates a new SymSpell instance verifying candidates with [`DamerauOsa`].
    ///
    /// # Arguments
    ///
    /// * `max_dictionary_edit_distance` - Maximum edit distance for dictionary precalculation.
    /// * `prefix_length` - The length of word prefixes, from which deletes are generated. (5..7).
    ///   Must be greater than `max_dictionary_edit_distance`.
    /// * `count_threshold` - The minimum frequency count for dictionary words to be considered a valid for spelling correction.
    pub fn new(
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        count_threshold: usize,
    ) -> Result<Self> {
        Self::with_distance(
            DamerauOsa,
            max_dictionary_edit_distance,
            prefix_length,
            count_threshold,
        )
    }
}

impl Default for SymSpell<DamerauOsa> {
    /// max_dictionary_edit_distance 2, prefix_length 7, count_threshold 1
    fn default() -> Self {
        Self::unchecked(DamerauOsa, 2, 7, 1)
    }
}

impl<D: EditDistance> SymSpell<D> {
    /// Like [`SymSpell::new`], with a caller supplied distance metric.
    pub fn with_distance(
        distance: D,
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        count_threshold: usize,
    ) -> Result<Self> {
        if prefix_length < 1 {
            return Err(SymSpellError::InvalidConfig(
                "prefix_length must be at least 1".to_string(),
            ));
        }
        if prefix_length <= max_dictionary_edit_distance {
            return Err(SymSpellError::InvalidConfig(format!(
                "prefix_length {} must be greater than max_dictionary_edit_distance {}",
                prefix_length, max_dictionary_edit_distance
            )));
        }

        Ok(Self::unchecked(
            distance,
            max_dictionary_edit_distance,
            prefix_length,
            count_threshold,
        ))
    }

    fn unchecked(
        distance: D,
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        count_threshold: usize,
    ) -> Self {
        Self {
            max_dictionary_edit_distance,
            prefix_length,
            count_threshold,
            max_dictionary_term_length: 0,
            deletes: DeleteMap::new(),
            words: AHashMap::new(),
            below_threshold_words: AHashMap::new(),
            distance,
        }
    }

    pub fn max_dictionary_edit_distance(&self) -> usize {
        self.max_dictionary_edit_distance
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn count_threshold(&self) -> usize {
        self.count_threshold
    }

    /// Length of the longest word in the dictionary.
    pub fn max_length(&self) -> usize {
        self.max_dictionary_term_length
    }

    /// Number of words valid for suggestions.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of delete hashes in the delete map.
    pub fn entry_count(&self) -> usize {
        self.deletes.len()
    }

    /// Frequency count of a word valid for suggestions.
    pub fn frequency(&self, term: &str) -> Option<usize> {
        self.words.get(term).copied()
    }

    /// Create/Update an entry in the dictionary.
    ///
    /// The deletes of a new word go through a private stage that is committed right away.
    /// For many words prefer [`SymSpell::create_dictionary_entry_staged`] with one shared stage.
    ///
    /// Returns true if the word is added and becomes valid for suggestions for the first time.
    pub fn create_dictionary_entry(&mut self, term: &str, count: usize) -> bool {
        let mut stage = SuggestionStage::new();
        let added = self.create_dictionary_entry_staged(term, count, &mut stage);
        if !stage.is_empty() {
            self.commit_staged(&mut stage);
        }
        added
    }

    /// Create/Update an entry in the dictionary, staging its deletes in `stage`.
    ///
    /// Word frequencies are updated immediately. The deletes of a word that reaches
    /// `count_threshold` for the first time are added to `stage` and become visible to
    /// lookups once the stage is committed with [`SymSpell::commit_staged`].
    ///
    /// # Arguments
    ///
    /// * `term` - The word to add to dictionary.
    /// * `count` - The frequency count for word. Counts of repeated words add up (saturating).
    /// * `stage` - Staging area for the deletes of the word.
    pub fn create_dictionary_entry_staged(
        &mut self,
        term: &str,
        count: usize,
        stage: &mut SuggestionStage,
    ) -> bool {
        if !self.register_word(term, count) {
            return false;
        }
        self.stage_deletes(term, stage);
        true
    }

    /// Merges a stage filled by [`SymSpell::create_dictionary_entry_staged`] into the delete map.
    /// The stage is left empty.
    pub fn commit_staged(&mut self, stage: &mut SuggestionStage) {
        stage.commit_into(&mut self.deletes);
    }

    // Frequency bookkeeping. Returns true when the word becomes valid for suggestions.
    fn register_word(&mut self, term: &str, count: usize) -> bool {
        if count == 0 && self.count_threshold > 0 {
            return false;
        }

        if self.count_threshold > 1 {
            if let Some(previous) = self.below_threshold_words.get_mut(term) {
                *previous = previous.saturating_add(count);
                if *previous < self.count_threshold {
                    return false;
                }
                let count = *previous;
                self.below_threshold_words.remove(term);
                self.add_word(term, count);
                return true;
            }
        }

        if let Some(previous) = self.words.get_mut(term) {
            *previous = previous.saturating_add(count);
            return false;
        }

        if count < self.count_threshold {
            self.below_threshold_words.insert(term.into(), count);
            return false;
        }

        self.add_word(term, count);
        true
    }

    fn add_word(&mut self, term: &str, count: usize) {
        self.words.insert(term.into(), count);

        let term_len = char_len(term);
        if term_len > self.max_dictionary_term_length {
            self.max_dictionary_term_length = term_len;
        }
    }

    fn stage_deletes(&self, term: &str, stage: &mut SuggestionStage) {
        for delete in edits_prefix(term, self.max_dictionary_edit_distance, self.prefix_length) {
            stage.insert(hash32(delete.as_bytes()), term);
        }
    }

    /// Adds word/frequency pairs, generating deletes on the rayon thread pool.
    ///
    /// Frequencies are updated sequentially. The words that become valid are then split into
    /// `shards` chunks, each staged by its own worker, and the stages are committed one after
    /// another in chunk order, so the resulting index does not depend on thread scheduling.
    ///
    /// Returns the number of words that became valid for suggestions.
    pub fn load_entries_parallel<I, S>(&mut self, entries: I, shards: usize) -> usize
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
        D: Sync,
    {
        let mut new_words: Vec<Box<str>> = Vec::new();
        for (term, count) in entries {
            let term = term.as_ref();
            if self.register_word(term, count) {
                new_words.push(term.into());
            }
        }
        if new_words.is_empty() {
            return 0;
        }

        let shard_len = new_words.len().div_ceil(shards.max(1));
        let this = &*self;
        let mut stages: Vec<SuggestionStage> = new_words
            .par_chunks(shard_len)
            .map(|shard| {
                let mut stage = SuggestionStage::with_capacity(shard.len());
                for term in shard {
                    this.stage_deletes(term, &mut stage);
                }
                stage
            })
            .collect();

        log::debug!(
            "staged {} new words in {} shards",
            new_words.len(),
            stages.len()
        );
        for stage in stages.iter_mut() {
            self.commit_staged(stage);
        }
        new_words.len()
    }

    /// Load multiple dictionary entries from a file of word/frequency count pairs.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_dictionary(
        &mut self,
        path: &Path,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<()> {
        let file = File::open(path)?;
        self.load_dictionary_from_reader(BufReader::new(file), term_index, count_index, separator)
    }

    /// Load multiple dictionary entries from any buffered reader, see [`SymSpell::load_dictionary`].
    ///
    /// All lines are staged and committed once. Lines without enough columns or with an
    /// unparsable count are skipped. On an I/O error the lines read so far are still committed.
    pub fn load_dictionary_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<()> {
        let mut stage = SuggestionStage::with_capacity(LOAD_STAGE_CAPACITY);
        let mut added = 0;

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    self.commit_staged(&mut stage);
                    return Err(err.into());
                }
            };
            if let Some((term, count)) =
                parse_dictionary_line(&line, term_index, count_index, separator)
            {
                if self.create_dictionary_entry_staged(term, count, &mut stage) {
                    added += 1;
                }
            }
        }

        self.commit_staged(&mut stage);
        log::debug!(
            "loaded {} new words, dictionary holds {} words and {} delete hashes",
            added,
            self.words.len(),
            self.deletes.len()
        );
        Ok(())
    }

    /// Load single dictionary entry from word/frequency count pair.
    ///
    /// # Arguments
    ///
    /// * `line` - word/frequency pair.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_dictionary_line(
        &mut self,
        line: &str,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> bool {
        match parse_dictionary_line(line, term_index, count_index, separator) {
            Some((term, count)) => self.create_dictionary_entry(term, count),
            None => false,
        }
    }

    /// Write the dictionary to a CSV file.
    /// Useful when the dictionary was incrementally built/updated with create_dictionary_entry.
    /// Entries are sorted by frequency count descending, then by word.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `separator` - Separator between word and frequency
    pub fn save_dictionary(&self, path: &Path, separator: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for (entry, count) in self
            .words
            .iter()
            .sorted_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
        {
            writeln!(writer, "{}{}{}", entry, separator, count)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Find suggested spellings for a given input word.
    /// Returned suggestions are sorted by distance ascending, then by frequency count descending,
    /// then by term.
    ///
    /// # Arguments
    ///
    /// * `input` - The word being spell checked. Upper/lower case allowed.
    /// * `verbosity` - The value controlling the quantity/closeness of the retuned suggestions.
    /// * `max_edit_distance` - The maximum edit distance between input and suggested words.
    ///   Must not exceed the `max_dictionary_edit_distance` the dictionary was built with.
    /// * `max_results` - Optional parameter to limit the number of suggestions returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use symspell_stage::{SymSpell, Verbosity};
    ///
    /// let mut symspell: SymSpell = SymSpell::default();
    /// symspell.create_dictionary_entry("house", 231310420);
    /// let suggestions = symspell.lookup("hous", Verbosity::Top, 2, None).unwrap();
    /// assert_eq!("house", suggestions[0].term);
    /// ```
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
        max_results: Option<usize>,
    ) -> Result<Vec<SuggestItem>> {
        if max_edit_distance > self.max_dictionary_edit_distance {
            log::warn!(
                "lookup budget {} exceeds the precalculated {}",
                max_edit_distance,
                self.max_dictionary_edit_distance
            );
            return Err(SymSpellError::MaxEditDistanceTooLarge {
                requested: max_edit_distance,
                max: self.max_dictionary_edit_distance,
            });
        }

        let mut suggestions: Vec<SuggestItem> = Vec::new();

        let input = input.to_lowercase();
        let input_chars: Vec<char> = input.chars().collect();
        let input_len = input_chars.len();

        // early termination - word is too big to possibly match any words
        if input_len.saturating_sub(max_edit_distance) > self.max_dictionary_term_length {
            return Ok(suggestions);
        }

        if let Some(&count) = self.words.get(input.as_str()) {
            suggestions.push(SuggestItem::new(input.as_str(), 0, count));
            // early termination - return exact match, unless caller wants all matches
            if verbosity != Verbosity::All {
                return Ok(suggestions);
            }
        }

        //early termination, if we only want to check if word in dictionary or get its frequency e.g. for word segmentation
        if max_edit_distance == 0 {
            return Ok(suggestions);
        }

        // deletes of the input already queued, and suggestions already verified
        let mut considered_deletes: AHashSet<String> = AHashSet::new();
        let mut considered_suggestions: AHashSet<&str> = AHashSet::new();
        considered_suggestions.insert(input.as_str());

        let mut max_edit_distance2 = max_edit_distance;
        let mut candidate_pointer = 0;
        let mut candidates = Vec::new();

        let input_prefix_len = min(input_len, self.prefix_length);
        if input_len > self.prefix_length {
            candidates.push(char_prefix(&input, self.prefix_length));
        } else {
            candidates.push(input.clone());
        }

        while candidate_pointer < candidates.len() {
            let candidate = candidates[candidate_pointer].clone();
            candidate_pointer += 1;
            let candidate_len = char_len(&candidate);
            let length_diff = input_prefix_len - candidate_len;

            //save some time - early termination
            //if canddate distance is already higher than suggestion distance, than there are no better suggestions to be expected
            if length_diff > max_edit_distance2 {
                // skip to next candidate if Verbosity::All, look no further if Verbosity::Top or Closest
                // (candidates are ordered by delete distance, so none are closer than current)
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            if let Some(dict_suggestions) = self.deletes.get(&hash32(candidate.as_bytes())) {
                //iterate through suggestions (to other correct dictionary items) of delete item and add them to suggestion list
                for suggestion in dict_suggestions {
                    let suggestion: &str = suggestion;
                    if suggestion == input {
                        continue;
                    }

                    let suggestion_len = char_len(suggestion);
                    if suggestion_len.abs_diff(input_len) > max_edit_distance2
                        || suggestion_len < candidate_len
                        || (suggestion_len == candidate_len && suggestion != candidate)
                    {
                        continue;
                    }

                    let sugg_prefix_len = min(suggestion_len, self.prefix_length);
                    if sugg_prefix_len > input_prefix_len
                        && sugg_prefix_len - candidate_len > max_edit_distance2
                    {
                        continue;
                    }

                    //Damerau-Levenshtein Edit Distance: adjust distance, if both distances>0
                    //We allow simultaneous edits (deletes) of maxEditDistance on on both the dictionary and the input term.
                    //For replaces and adjacent transposes the resulting edit distance stays <= maxEditDistance.
                    //For inserts and deletes the resulting edit distance might exceed maxEditDistance.
                    //To prevent suggestions of a higher edit distance, we need to calculate the resulting edit distance, if there are simultaneous edits on both sides.
                    //Example: (bank==bnak and bank==bink, but bank!=kanb and bank!=xban and bank!=baxn for maxEditDistance=1)
                    //Two deletes on each side of a pair makes them all equal, but the first two pairs have edit distance=1, the others edit distance=2.
                    let distance;
                    if candidate_len == 0 {
                        //suggestions which have no common chars with input (inputLen<=maxEditDistance && suggestionLen<=maxEditDistance)
                        distance = max(input_len, suggestion_len);
                        if distance > max_edit_distance2
                            || !considered_suggestions.insert(suggestion)
                        {
                            continue;
                        }
                    } else if suggestion_len == 1 {
                        distance = match suggestion.chars().next() {
                            Some(ch) if input_chars.contains(&ch) => input_len - 1,
                            _ => input_len,
                        };
                        if distance > max_edit_distance2
                            || !considered_suggestions.insert(suggestion)
                        {
                            continue;
                        }
                    } else {
                        let suggestion_chars: Vec<char> = suggestion.chars().collect();

                        // number of edits in prefix ==maxediddistance  AND no identic suffix,
                        // then editdistance>maxEditDistance and no need for Levenshtein calculation
                        if self.has_different_suffix(
                            max_edit_distance,
                            &input_chars,
                            candidate_len,
                            &suggestion_chars,
                        ) {
                            continue;
                        }

                        // delete_in_suggestion_prefix is somewhat expensive, and only pays off when verbosity is Top or Closest.
                        if (verbosity != Verbosity::All
                            && !self.delete_in_suggestion_prefix(
                                &candidate,
                                candidate_len,
                                &suggestion_chars,
                            ))
                            || !considered_suggestions.insert(suggestion)
                        {
                            continue;
                        }

                        distance =
                            match self.distance.distance(&input, suggestion, max_edit_distance2) {
                                Some(distance) => distance,
                                None => continue,
                            };
                    }

                    //save some time
                    //do not process higher distances than those already found, if verbosity<All (note: maxEditDistance2 will always equal maxEditDistance when Verbosity::All)
                    if distance <= max_edit_distance2 {
                        let Some(&frequency) = self.words.get(suggestion) else {
                            continue;
                        };
                        let si = SuggestItem::new(suggestion, distance, frequency);

                        if !suggestions.is_empty() {
                            match verbosity {
                                Verbosity::Closest => {
                                    //we will calculate DamLev distance only to the smallest found distance so far
                                    if distance < max_edit_distance2 {
                                        suggestions.clear();
                                    }
                                }
                                Verbosity::Top => {
                                    if si < suggestions[0] {
                                        max_edit_distance2 = distance;
                                        suggestions[0] = si;
                                    }
                                    continue;
                                }
                                Verbosity::All => (),
                            }
                        }

                        if verbosity != Verbosity::All {
                            max_edit_distance2 = distance;
                        }

                        suggestions.push(si);
                    }
                }
            }

            //add edits
            //derive edits (deletes) from candidate (input) and add them to candidates list
            //this is a recursive process until the maximum edit distance has been reached
            if length_diff < max_edit_distance && candidate_len <= self.prefix_length {
                //save some time
                //do not create edits with edit distance smaller than suggestions already found
                if verbosity != Verbosity::All && length_diff >= max_edit_distance2 {
                    continue;
                }

                for i in 0..candidate_len {
                    let delete = remove_char(&candidate, i);
                    if !considered_deletes.contains(&delete) {
                        considered_deletes.insert(delete.clone());
                        candidates.push(delete);
                    }
                }
            }
        }

        //sort by ascending edit distance, then by descending word frequency, then by term
        if suggestions.len() > 1 {
            suggestions.sort_unstable();
        }

        if let Some(max_results) = max_results {
            suggestions.truncate(max_results);
        }
        Ok(suggestions)
    }

    /// Find dictionary words whose similarity to `input` is at least `min_similarity`.
    ///
    /// Similarity is `1 - distance / max(len(input), len(word))`. The similarity is turned
    /// into an edit budget for the longest word that can match, capped at the dictionary's
    /// maximum edit distance, so very low similarities may miss words beyond that budget.
    /// A `min_similarity` above 1.0 matches nothing.
    /// Results are ordered like [`SymSpell::lookup`] with [`Verbosity::All`].
    pub fn lookup_similarity(
        &self,
        input: &str,
        min_similarity: f64,
        max_results: Option<usize>,
    ) -> Result<Vec<(SuggestItem, f64)>> {
        // no word can be more similar than an exact match
        if min_similarity > 1.0 || min_similarity.is_nan() {
            return Ok(Vec::new());
        }

        // the longest word that can still match decides the budget
        let input_len = char_len(&input.to_lowercase());
        let max_edit_distance = min(
            similarity_to_distance(
                min_similarity,
                input_len + self.max_dictionary_edit_distance,
            ),
            self.max_dictionary_edit_distance,
        );

        let mut results: Vec<(SuggestItem, f64)> = self
            .lookup(input, Verbosity::All, max_edit_distance, None)?
            .into_iter()
            .filter_map(|suggestion| {
                let length = max(input_len, char_len(&suggestion.term));
                if suggestion.distance > similarity_to_distance(min_similarity, length) {
                    return None;
                }
                let similarity = distance_to_similarity(Some(suggestion.distance), length)?;
                Some((suggestion, similarity))
            })
            .collect();

        if let Some(max_results) = max_results {
            results.truncate(max_results);
        }
        Ok(results)
    }

    // Check whether all delete chars are present in the suggestion prefix in correct order, otherwise this is just a hash collision
    fn delete_in_suggestion_prefix(
        &self,
        delete: &str,
        delete_len: usize,
        suggestion: &[char],
    ) -> bool {
        if delete_len == 0 {
            return true;
        }
        let suggestion_len = min(self.prefix_length, suggestion.len());
        let mut j = 0;
        for del_char in delete.chars() {
            while j < suggestion_len && del_char != suggestion[j] {
                j += 1;
            }

            if j == suggestion_len {
                return false;
            }
        }
        true
    }

    // All edits were spent inside the prefix: the parts after the prefix must then be equal,
    // up to one adjacent transposition at the prefix boundary.
    fn has_different_suffix(
        &self,
        max_edit_distance: usize,
        input: &[char],
        candidate_len: usize,
        suggestion: &[char],
    ) -> bool {
        if self.prefix_length - max_edit_distance != candidate_len {
            return false;
        }

        let input_len = input.len();
        let suggestion_len = suggestion.len();
        let shorter = min(input_len, suggestion_len);
        if shorter <= self.prefix_length {
            return false;
        }
        let min = shorter - self.prefix_length;

        (min > 1 && input[input_len + 1 - min..] != suggestion[suggestion_len + 1 - min..])
            || (input[input_len - min] != suggestion[suggestion_len - min]
                && (input[input_len - min - 1] != suggestion[suggestion_len - min]
                    || input[input_len - min] != suggestion[suggestion_len - min - 1]))
    }
}

// Splits a `word<separator>count` line. Blank lines are skipped quietly, malformed ones with a warning.
fn parse_dictionary_line<'a>(
    line: &'a str,
    term_index: usize,
    count_index: usize,
    separator: &str,
) -> Option<(&'a str, usize)> {
    if line.trim().is_empty() {
        return None;
    }

    let line_parts: Vec<&str> = line.split(separator).collect();
    let (Some(term), Some(count)) = (line_parts.get(term_index), line_parts.get(count_index))
    else {
        log::warn!("skipping dictionary line with too few columns: {:?}", line);
        return None;
    };

    match count.trim().parse::<usize>() {
        Ok(count) => Some((*term, count)),
        Err(err) => {
            log::warn!("skipping dictionary line {:?}: {}", line, err);
            None
        }
    }
}

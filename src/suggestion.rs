use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Suggested correct spelling for a given input word.
pub struct SuggestItem {
    /// The suggested correctly spelled word.
    pub term: String,
    /// Edit distance between searched for word and suggestion.
    pub distance: usize,
    /// Frequency of suggestion in the dictionary (a measure of how common the word is).
    pub frequency: usize,
}

impl SuggestItem {
    pub fn new(term: impl Into<String>, distance: usize, frequency: usize) -> SuggestItem {
        SuggestItem {
            term: term.into(),
            distance,
            frequency,
        }
    }
}

// Order by distance ascending, then by frequency descending, then by term.
// The term tie-break makes sorting and top-n truncation reproducible.
impl Ord for SuggestItem {
    fn cmp(&self, other: &SuggestItem) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for SuggestItem {
    fn partial_cmp(&self, other: &SuggestItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SuggestItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.term, self.distance, self.frequency)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Controls the closeness/quantity of returned spelling suggestions.
pub enum Verbosity {
    /// Top suggestion with the highest term frequency of the suggestions of smallest edit distance found.
    Top,
    /// All suggestions of smallest edit distance found, suggestions ordered by term frequency.
    Closest,
    /// All suggestions within maxEditDistance, suggestions ordered by edit distance, then by term frequency (slower, no early termination)
    All,
}

//! Error types for dictionary construction and lookup.

/// Errors returned by [`SymSpell`](crate::SymSpell).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SymSpellError {
    /// Constructor arguments that cannot produce a usable index
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lookup asked for more edits than the dictionary precalculated
    #[error("max_edit_distance {requested} is bigger than max_dictionary_edit_distance {max}")]
    MaxEditDistanceTooLarge { requested: usize, max: usize },

    /// Reading or writing a dictionary file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SymSpellError>;

// Append-only paged storage with stable integer indices.
//
// Elements live in fixed-size pages (chunks). Growing the array pushes a new page and never
// moves an existing one, so an index handed out by append() stays valid until the array is
// dropped. The page size is a power of two: row = index >> CHUNK_SHIFT, column = index & CHUNK_MASK.

use std::fmt;

pub(crate) const CHUNK_SHIFT: u32 = 12;
pub(crate) const CHUNK_SIZE: usize = 1 << CHUNK_SHIFT; //4096
const CHUNK_MASK: usize = CHUNK_SIZE - 1;

/// Stable position of an element inside a [`ChunkArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaIndex(u32);

impl ArenaIndex {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn row(self) -> usize {
        self.as_usize() >> CHUNK_SHIFT
    }

    #[inline]
    fn column(self) -> usize {
        self.as_usize() & CHUNK_MASK
    }
}

impl fmt::Display for ArenaIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A growable array that hands out permanent indices.
///
/// Used as the node store of the suggestion stage, where tens of millions of small appends
/// happen during dictionary construction. Appending never reallocates or copies previously
/// stored elements, and [`ChunkArray::clear`] keeps the pages for the next batch.
pub struct ChunkArray<T> {
    chunks: Vec<Vec<T>>,
    count: usize,
}

impl<T> ChunkArray<T> {
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            count: 0,
        }
    }

    /// Creates an array with enough pages for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve(capacity);
        array
    }

    /// Pre-allocates pages until `capacity` elements fit without further page allocation.
    /// Existing pages are left untouched.
    pub fn reserve(&mut self, capacity: usize) {
        let chunks_needed = capacity.div_ceil(CHUNK_SIZE);
        while self.chunks.len() < chunks_needed {
            self.chunks.push(Vec::with_capacity(CHUNK_SIZE));
        }
    }

    /// Stores `value` in the next free slot and returns its permanent index.
    ///
    /// # Panics
    ///
    /// Panics if the array already holds `u32::MAX` elements.
    pub fn append(&mut self, value: T) -> ArenaIndex {
        let index =
            ArenaIndex(u32::try_from(self.count).expect("ChunkArray index space exhausted"));
        if index.row() == self.chunks.len() {
            self.chunks.push(Vec::with_capacity(CHUNK_SIZE));
        }

        let chunk = &mut self.chunks[index.row()];
        debug_assert_eq!(chunk.len(), index.column());
        chunk.push(value);
        self.count += 1;
        index
    }

    /// # Panics
    ///
    /// Panics if `index` was not returned by `append` since the last `clear`.
    #[inline]
    pub fn get(&self, index: ArenaIndex) -> &T {
        self.check(index);
        &self.chunks[index.row()][index.column()]
    }

    #[inline]
    pub fn get_mut(&mut self, index: ArenaIndex) -> &mut T {
        self.check(index);
        &mut self.chunks[index.row()][index.column()]
    }

    /// Overwrites the element at `index`.
    #[inline]
    pub fn set(&mut self, index: ArenaIndex, value: T) {
        *self.get_mut(index) = value;
    }

    /// Drops all elements but keeps the pages allocated for reuse.
    pub fn clear(&mut self) {
        for chunk in self.chunks.iter_mut() {
            chunk.clear();
        }
        self.count = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of elements that fit in the currently allocated pages.
    pub fn capacity(&self) -> usize {
        self.chunks.len() * CHUNK_SIZE
    }

    #[inline]
    fn check(&self, index: ArenaIndex) {
        assert!(
            index.as_usize() < self.count,
            "ChunkArray index {} out of range (len {})",
            index,
            self.count
        );
    }
}

impl<T> Default for ChunkArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunkArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chunks.iter().flat_map(|chunk| chunk.iter()))
            .finish()
    }
}

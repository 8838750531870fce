// Accumulates delete-hash → term lists during dictionary construction.
//
// Per hash the stage keeps a count and the head of an intrusive singly-linked chain whose
// nodes live in one ChunkArray. Inserting prepends: append a node pointing at the old head,
// then move the head. Chains are copied into right-sized Vecs once, on commit.

use ahash::AHashMap;

use crate::arena::{ArenaIndex, ChunkArray};

/// Permanent delete map: delete hash → every dictionary term that produced that delete.
/// Hash collisions are tolerated, candidates are verified with an edit distance at lookup.
pub type DeleteMap = AHashMap<u32, Vec<Box<str>>>;

#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    count: usize,
    first: Option<ArenaIndex>,
}

#[derive(Debug, Default)]
struct Node {
    term: Box<str>,
    next: Option<ArenaIndex>,
}

/// Staging area for bulk delete insertion.
///
/// Each construction pass (or each worker shard) owns its own stage, so `insert` needs no
/// locking. [`SuggestionStage::commit_into`] is the single point where a stage touches shared
/// state.
#[derive(Debug, Default)]
pub struct SuggestionStage {
    deletes: AHashMap<u32, Entry>,
    nodes: ChunkArray<Node>,
}

impl SuggestionStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stage sized for roughly `initial_capacity` delete hashes.
    /// Nodes are reserved at twice that, as most hashes carry more than one term.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            deletes: AHashMap::with_capacity(initial_capacity),
            nodes: ChunkArray::with_capacity(initial_capacity * 2),
        }
    }

    /// Number of distinct delete hashes staged.
    pub fn bucket_count(&self) -> usize {
        self.deletes.len()
    }

    /// Number of (hash, term) pairs staged.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discards all staged terms, keeping the allocated node pages.
    pub fn clear(&mut self) {
        self.deletes.clear();
        self.nodes.clear();
    }

    /// Records that `term` produces the delete with hash `delete_hash`.
    #[inline]
    pub fn insert(&mut self, delete_hash: u32, term: impl Into<Box<str>>) {
        let entry = self.deletes.entry(delete_hash).or_default();
        let next = entry.first;
        entry.first = Some(self.nodes.append(Node {
            term: term.into(),
            next,
        }));
        entry.count += 1;
    }

    /// Terms staged under `delete_hash`, most recently inserted first.
    pub fn chain(&self, delete_hash: u32) -> Chain<'_> {
        let entry = self.deletes.get(&delete_hash).copied().unwrap_or_default();
        Chain {
            nodes: &self.nodes,
            next: entry.first,
            remaining: entry.count,
        }
    }

    /// Moves every staged chain into `deletes`.
    ///
    /// Terms for a hash that already has a list are appended after the existing ones, so the
    /// order in which stages are committed decides the order of their terms. Within one stage
    /// a chain is emitted newest first. Each target list is grown exactly once, to its final
    /// length. The stage is left empty and can be reused for the next batch.
    pub fn commit_into(&mut self, deletes: &mut DeleteMap) {
        let buckets = self.deletes.len();
        let nodes = self.nodes.len();

        for (delete_hash, entry) in self.deletes.drain() {
            let suggestions = deletes.entry(delete_hash).or_default();
            suggestions.reserve_exact(entry.count);

            let mut next = entry.first;
            for _ in 0..entry.count {
                let Some(index) = next else {
                    break;
                };
                let node = self.nodes.get_mut(index);
                suggestions.push(std::mem::take(&mut node.term));
                next = node.next;
            }
        }
        self.nodes.clear();

        log::debug!(
            "committed {} staged deletes in {} buckets, delete map holds {} hashes",
            nodes,
            buckets,
            deletes.len()
        );
    }
}

/// Iterator over one staged chain, see [`SuggestionStage::chain`].
pub struct Chain<'a> {
    nodes: &'a ChunkArray<Node>,
    next: Option<ArenaIndex>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.next?);
        self.remaining -= 1;
        self.next = node.next;
        Some(&*node.term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

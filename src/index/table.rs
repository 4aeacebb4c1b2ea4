//! MemberIndex implementation

use rustc_hash::FxHashMap;

use crate::bytestr::ByteString;

/// Hash map from member to score
///
/// Lookups take `&[u8]` so callers never allocate a key just to probe.
#[derive(Debug, Default)]
pub struct MemberIndex {
    entries: FxHashMap<ByteString, f64>,
}

impl MemberIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Insert or overwrite the score for `member`
    pub fn set(&mut self, member: ByteString, score: f64) {
        self.entries.insert(member, score);
    }

    /// Look up the score for `member`
    pub fn get(&self, member: &[u8]) -> Option<f64> {
        self.entries.get(member).copied()
    }

    /// Whether `member` is present
    pub fn contains(&self, member: &[u8]) -> bool {
        self.entries.contains_key(member)
    }

    /// Remove `member`, returning whether it was present
    pub fn remove(&mut self, member: &[u8]) -> bool {
        self.entries.remove(member).is_some()
    }

    /// Number of members in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! SortedSet Module
//!
//! The facade composing the skip list and the member index.
//!
//! ## Responsibilities
//! - Keep SkipList and MemberIndex describing the same population
//! - Route score lookups to the index, order queries to the list
//! - Resolve rank ranges (clamping, negative indices, reversal)
//!
//! ## Concurrency Model: Single Writer
//!
//! The facade holds no lock. Mutations (`add`/`remove`/`clear`) take
//! `&mut self` and must come from one logical thread at a time; shared reads
//! are safe through `&self`. A write that lands in the skip list but not the
//! index (or vice versa) would break the core invariant, so multithreaded
//! embeddings must guard the whole facade as one unit;
//! [`SharedSortedSet`](crate::SharedSortedSet) does exactly that.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::bytestr::ByteString;
use crate::config::Config;
use crate::error::Result;
use crate::index::MemberIndex;
use crate::skiplist::{cmp_scores, RangeByScore, SkipList};

/// Outcome of [`SortedSet::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    /// The member was not present and has been inserted
    Inserted,

    /// The member was present with a different score and has been moved
    Updated,

    /// The member was already present with this exact score; no change
    Unchanged,
}

/// In-memory sorted set keyed by (score, member)
///
/// Members are unique; each carries one f64 score. Iteration and rank
/// queries follow the fixed total order: score ascending (NaN greatest,
/// see [`cmp_scores`]), then member bytes ascending.
#[derive(Debug)]
pub struct SortedSet {
    /// Ordered view: (score, member) pairs with span-counted levels
    list: SkipList,

    /// Point-lookup view: member -> score
    index: MemberIndex,
}

impl SortedSet {
    /// Create an empty set with default configuration
    pub fn new() -> Self {
        Self {
            list: SkipList::new(),
            index: MemberIndex::new(),
        }
    }

    /// Create an empty set from `config`
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            list: SkipList::with_config(config)?,
            index: MemberIndex::new(),
        })
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add `member` with `score`, or move it to `score` if already present
    ///
    /// Steps:
    /// 1. Probe the index for the current score
    /// 2. Absent: insert into the list, then the index
    /// 3. Present with an equal score: nothing to do
    /// 4. Present with a different score: insert the new pair first (the
    ///    only fallible step), then drop the old one and overwrite the index
    ///
    /// On `OutOfMemory` the set is exactly as it was before the call.
    pub fn add(&mut self, member: impl Into<ByteString>, score: f64) -> Result<AddResult> {
        let member = member.into();

        let result = match self.index.get(&member) {
            None => {
                self.list.insert(score, member.clone())?;
                self.index.set(member, score);
                AddResult::Inserted
            }
            Some(old) if cmp_scores(old, score) == Ordering::Equal => AddResult::Unchanged,
            Some(old) => {
                // New pair in first: if this fails, nothing has moved yet.
                // The member transiently exists at two scores; the two pairs
                // are distinct keys, so the removal below is unambiguous.
                self.list.insert(score, member.clone())?;
                let removed = self.list.remove(old, &member);
                debug_assert!(removed, "index held a score with no skip list node");
                self.index.set(member, score);
                AddResult::Updated
            }
        };

        trace!(?result, score, "add");
        self.debug_check_sync();
        Ok(result)
    }

    /// Remove `member`, returning whether it was present
    pub fn remove(&mut self, member: &[u8]) -> bool {
        let Some(score) = self.index.get(member) else {
            return false;
        };

        let removed = self.list.remove(score, member);
        debug_assert!(removed, "index held a score with no skip list node");
        self.index.remove(member);

        trace!(score, "remove");
        self.debug_check_sync();
        true
    }

    /// Drop all members
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
        debug!("cleared sorted set");
    }

    // =========================================================================
    // Point queries
    // =========================================================================

    /// Current score of `member`
    pub fn score(&self, member: &[u8]) -> Option<f64> {
        self.index.get(member)
    }

    /// Whether `member` is present
    pub fn contains(&self, member: &[u8]) -> bool {
        self.index.contains(member)
    }

    /// Zero-based rank of `member` in the total order
    ///
    /// With `reverse`, rank 0 is the greatest entry instead of the least.
    pub fn rank(&self, member: &[u8], reverse: bool) -> Option<u64> {
        let score = self.index.get(member)?;
        let rank = self.list.rank_of(score, member);
        debug_assert!(rank.is_some(), "index held a score with no skip list node");
        let rank = rank?;
        Some(if reverse {
            self.list.len() - 1 - rank
        } else {
            rank
        })
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.list.len() as usize
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    // =========================================================================
    // Range queries
    // =========================================================================

    /// Members with ranks in `[start, end]`, inclusive
    ///
    /// Negative indices count from the end (`-1` is the last entry). Bounds
    /// are clamped into range; an inverted or fully out-of-range request
    /// yields an empty Vec, never an error. With `reverse`, ranks are
    /// counted from the greatest entry and results come back descending.
    pub fn range_by_rank(&self, start: i64, end: i64, reverse: bool) -> Vec<(ByteString, f64)> {
        let len = self.list.len() as i64;
        if len == 0 {
            return Vec::new();
        }

        let mut start = if start < 0 { len + start } else { start };
        let mut end = if end < 0 { len + end } else { end };
        if start < 0 {
            start = 0;
        }
        if end >= len {
            end = len - 1;
        }
        if start > end || start >= len {
            return Vec::new();
        }

        // A reverse request over reversed ranks is a forward walk over the
        // mirrored interval, read back to front.
        let (first, last) = if reverse {
            (len - 1 - end, len - 1 - start)
        } else {
            (start, end)
        };

        let mut out: Vec<(ByteString, f64)> = self
            .list
            .iter_from_rank(first as u64)
            .take((last - first + 1) as usize)
            .map(|(member, score)| (member.clone(), score))
            .collect();
        if reverse {
            out.reverse();
        }
        out
    }

    /// Members with score in `[min, max]` ascending, after skipping `offset`
    /// entries and keeping at most `limit`
    ///
    /// `limit: None` keeps everything after the offset. An inverted range
    /// yields an empty Vec.
    pub fn range_by_score(
        &self,
        min: f64,
        max: f64,
        offset: usize,
        limit: Option<usize>,
    ) -> Vec<(ByteString, f64)> {
        let mut out = Vec::new();
        for (member, score) in self.list.range_by_score(min, max).skip(offset) {
            if let Some(limit) = limit {
                if out.len() == limit {
                    break;
                }
            }
            out.push((member.clone(), score));
        }
        out
    }

    /// Borrowing iterator over score in `[min, max]`, ascending
    pub fn scan_by_score(&self, min: f64, max: f64) -> RangeByScore<'_> {
        self.list.range_by_score(min, max)
    }

    /// Iterate all members in rank order
    ///
    /// This is the traversal a snapshotting collaborator would use: replaying
    /// the yielded pairs through [`add`](Self::add) rebuilds an equivalent
    /// set.
    pub fn iter(&self) -> impl Iterator<Item = (&ByteString, f64)> + '_ {
        self.list.iter()
    }

    // =========================================================================
    // Invariant checking (debug builds)
    // =========================================================================

    /// Cheap lockstep check after every mutation
    fn debug_check_sync(&self) {
        debug_assert_eq!(
            self.index.len() as u64,
            self.list.len(),
            "skip list and member index disagree on population"
        );
    }

    /// Full cross-check: every list entry is in the index at the same score
    /// and vice versa. O(n); intended for tests and debug assertions only.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> bool {
        if self.index.len() as u64 != self.list.len() {
            return false;
        }
        self.iter().all(|(member, score)| {
            self.index
                .get(member)
                .is_some_and(|indexed| cmp_scores(indexed, score) == Ordering::Equal)
        })
    }
}

impl Default for SortedSet {
    fn default() -> Self {
        Self::new()
    }
}

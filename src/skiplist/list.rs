//! SkipList implementation
//!
//! The traversal/splice algorithm follows the classic span-counting form:
//! every mutation records, per level, the rightmost predecessor of the key
//! (`update[]`) and the rank accumulated on the way there (`rank[]`), then
//! rewires forward pointers and recomputes spans from those two arrays.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::bytestr::ByteString;
use crate::config::{Config, MAX_LEVEL_CAP};
use crate::error::Result;

use super::cmp_scores;
use super::node::{Arena, Level, Node, NodeIndex};
use super::rand::LevelGenerator;

/// Span-counting skip list over (score, member) pairs
///
/// The list does not deduplicate members on its own; it orders whatever
/// exact (score, member) pairs it is given. Member-level uniqueness is the
/// [`SortedSet`](crate::SortedSet) facade's contract, enforced through the
/// member index.
#[derive(Debug)]
pub struct SkipList {
    arena: Arena,

    /// Header tower: `max_level` slots allocated up front, all spans
    /// counting from rank 0
    head: Vec<Level>,

    /// Last node in level-0 order
    tail: Option<NodeIndex>,

    /// Number of nodes
    len: u64,

    /// Highest level currently in use, 1..=max_level
    level: usize,

    rng: LevelGenerator,
}

impl SkipList {
    /// Create an empty list with default configuration
    pub fn new() -> Self {
        // The default config always validates.
        match Self::with_config(&Config::default()) {
            Ok(list) => list,
            Err(_) => unreachable!("default config rejected"),
        }
    }

    /// Create an empty list from `config`
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            arena: Arena::new(),
            head: vec![Level::default(); config.max_level],
            tail: None,
            len: 0,
            level: 1,
            rng: LevelGenerator::new(
                config.max_level,
                config.level_probability,
                config.rng_seed,
            ),
        })
    }

    /// Number of entries
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node, keeping the configuration and generator state
    pub fn clear(&mut self) {
        self.arena.clear();
        for slot in &mut self.head {
            *slot = Level::default();
        }
        self.tail = None;
        self.len = 0;
        self.level = 1;
    }

    // =========================================================================
    // Level access helpers
    // =========================================================================

    /// Level slot of `at` (a node, or the header when `None`)
    fn level_ref(&self, at: Option<NodeIndex>, lvl: usize) -> &Level {
        match at {
            Some(idx) => &self.arena.get(idx).levels[lvl],
            None => &self.head[lvl],
        }
    }

    fn level_mut(&mut self, at: Option<NodeIndex>, lvl: usize) -> &mut Level {
        match at {
            Some(idx) => &mut self.arena.get_mut(idx).levels[lvl],
            None => &mut self.head[lvl],
        }
    }

    /// Whether node `idx`'s key is strictly before (score, member)
    fn key_precedes(&self, idx: NodeIndex, score: f64, member: &[u8]) -> bool {
        let node = self.arena.get(idx);
        match cmp_scores(node.score, score) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => node.member.as_bytes() < member,
        }
    }

    /// Whether node `idx`'s key is before or equal to (score, member)
    fn key_not_after(&self, idx: NodeIndex, score: f64, member: &[u8]) -> bool {
        let node = self.arena.get(idx);
        match cmp_scores(node.score, score) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => node.member.as_bytes() <= member,
        }
    }

    /// Top-down traversal recording, per level, the rightmost predecessor
    /// of (score, member) and the rank accumulated to reach it
    fn find_update(
        &self,
        score: f64,
        member: &[u8],
    ) -> ([Option<NodeIndex>; MAX_LEVEL_CAP], [u64; MAX_LEVEL_CAP]) {
        let mut update = [None; MAX_LEVEL_CAP];
        let mut rank = [0u64; MAX_LEVEL_CAP];

        let mut x: Option<NodeIndex> = None;
        for i in (0..self.level).rev() {
            // Ranks carry down: the walk at level i starts where level i+1
            // stopped.
            rank[i] = if i == self.level - 1 { 0 } else { rank[i + 1] };
            loop {
                let slot = self.level_ref(x, i);
                let (forward, span) = (slot.forward, slot.span);
                match forward {
                    Some(next) if self.key_precedes(next, score, member) => {
                        rank[i] += span;
                        x = Some(next);
                    }
                    _ => break,
                }
            }
            update[i] = x;
        }
        (update, rank)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a (score, member) pair
    ///
    /// The caller must ensure the exact pair is absent; the facade guarantees
    /// this via the member index. All allocation (node, tower) happens before
    /// any pointer is rewired, so on `OutOfMemory` the list is untouched.
    ///
    /// Steps:
    /// 1. Record predecessors and ranks per level (`find_update`)
    /// 2. Draw a tower height; extend the active level range if it grew,
    ///    seeding new header spans with the current length
    /// 3. Splice into every level of the tower, recomputing spans
    /// 4. Fix the level-0 backward link and the tail
    pub fn insert(&mut self, score: f64, member: ByteString) -> Result<()> {
        debug_assert!(
            self.rank_of(score, member.as_bytes()).is_none(),
            "duplicate (score, member) pair inserted"
        );

        let (mut update, mut rank) = self.find_update(score, member.as_bytes());
        let height = self.rng.next_level();

        // Fallible part first: after this point nothing can fail.
        let node = Node::try_new(member, score, height)?;
        let idx = self.arena.try_alloc(node)?;

        if height > self.level {
            for i in self.level..height {
                rank[i] = 0;
                update[i] = None;
                // A fresh header level spans the whole list until the new
                // node claims its share below.
                self.head[i].span = self.len;
            }
            debug!(from = self.level, to = height, "skip list level grew");
            self.level = height;
        }

        for i in 0..height {
            // Level-0 nodes between the new node and its level-i predecessor.
            let skipped = rank[0] - rank[i];

            let pred = *self.level_ref(update[i], i);
            {
                let node = self.arena.get_mut(idx);
                node.levels[i].forward = pred.forward;
                node.levels[i].span = pred.span - skipped;
            }
            let pred = self.level_mut(update[i], i);
            pred.forward = Some(idx);
            pred.span = skipped + 1;
        }

        // Levels above the tower just gained one node under their pointers.
        for i in height..self.level {
            self.level_mut(update[i], i).span += 1;
        }

        self.arena.get_mut(idx).backward = update[0];
        match self.arena.get(idx).levels[0].forward {
            Some(next) => self.arena.get_mut(next).backward = Some(idx),
            None => self.tail = Some(idx),
        }

        self.len += 1;
        trace!(height, len = self.len, score, "inserted node");
        Ok(())
    }

    /// Remove the exact (score, member) pair, returning whether it was found
    pub fn remove(&mut self, score: f64, member: &[u8]) -> bool {
        let (update, _rank) = self.find_update(score, member);

        let Some(idx) = self.level_ref(update[0], 0).forward else {
            return false;
        };
        {
            let node = self.arena.get(idx);
            if cmp_scores(node.score, score) != Ordering::Equal
                || node.member.as_bytes() != member
            {
                return false;
            }
        }

        self.unlink(idx, &update);
        self.arena.free(idx);
        self.len -= 1;
        trace!(len = self.len, score, "removed node");
        true
    }

    /// Unlink `idx` at every level, adjusting spans
    fn unlink(&mut self, idx: NodeIndex, update: &[Option<NodeIndex>; MAX_LEVEL_CAP]) {
        for i in 0..self.level {
            if self.level_ref(update[i], i).forward == Some(idx) {
                // The predecessor absorbs the node's span, minus the node
                // itself.
                let gone = self.arena.get(idx).levels[i];
                let pred = self.level_mut(update[i], i);
                pred.span = pred.span + gone.span - 1;
                pred.forward = gone.forward;
            } else {
                // The node sat under this pointer without being its target.
                self.level_mut(update[i], i).span -= 1;
            }
        }

        let (forward0, backward) = {
            let node = self.arena.get(idx);
            (node.levels[0].forward, node.backward)
        };
        match forward0 {
            Some(next) => self.arena.get_mut(next).backward = backward,
            None => self.tail = backward,
        }

        while self.level > 1 && self.head[self.level - 1].forward.is_none() {
            self.level -= 1;
        }
    }

    // =========================================================================
    // Rank queries
    // =========================================================================

    /// Zero-based rank of the exact (score, member) pair
    ///
    /// `score` must be the member's stored score (the facade reads it from
    /// the index); a member probed with a different score is not found.
    pub fn rank_of(&self, score: f64, member: &[u8]) -> Option<u64> {
        let mut rank: u64 = 0;
        let mut x: Option<NodeIndex> = None;
        for i in (0..self.level).rev() {
            loop {
                let slot = self.level_ref(x, i);
                let (forward, span) = (slot.forward, slot.span);
                match forward {
                    Some(next) if self.key_not_after(next, score, member) => {
                        rank += span;
                        x = Some(next);
                    }
                    _ => break,
                }
            }
            // The walk used <=, so x is the last node at-or-before the key;
            // an exact match means the accumulated spans are its 1-based
            // rank. The score must match too: the same member may briefly
            // exist at two scores while the facade repositions it.
            if let Some(at) = x {
                let node = self.arena.get(at);
                if cmp_scores(node.score, score) == Ordering::Equal
                    && node.member.as_bytes() == member
                {
                    return Some(rank - 1);
                }
            }
        }
        None
    }

    /// Entry at zero-based `rank`
    pub fn node_at_rank(&self, rank: u64) -> Option<(&ByteString, f64)> {
        let idx = self.index_at_rank(rank)?;
        let node = self.arena.get(idx);
        Some((&node.member, node.score))
    }

    fn index_at_rank(&self, rank: u64) -> Option<NodeIndex> {
        if rank >= self.len {
            return None;
        }
        // Spans count from the header as rank 1.
        let target = rank + 1;
        let mut traversed: u64 = 0;
        let mut x: Option<NodeIndex> = None;
        for i in (0..self.level).rev() {
            loop {
                let slot = self.level_ref(x, i);
                let (forward, span) = (slot.forward, slot.span);
                match forward {
                    Some(next) if traversed + span <= target => {
                        traversed += span;
                        x = Some(next);
                    }
                    _ => break,
                }
            }
            if traversed == target {
                return x;
            }
        }
        None
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterate all entries in rank order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head[0].forward,
        }
    }

    /// Iterate entries in rank order starting at zero-based `rank`
    ///
    /// Empty when `rank` is past the end.
    pub fn iter_from_rank(&self, rank: u64) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.index_at_rank(rank),
        }
    }

    /// Lazily yield entries with score in `[min, max]`, ascending
    ///
    /// Locates the first node with score >= `min` in O(log n), then walks
    /// level-0 pointers; O(log n + k) overall. An inverted range yields
    /// nothing.
    pub fn range_by_score(&self, min: f64, max: f64) -> RangeByScore<'_> {
        let mut x: Option<NodeIndex> = None;
        for i in (0..self.level).rev() {
            loop {
                match self.level_ref(x, i).forward {
                    Some(next)
                        if cmp_scores(self.arena.get(next).score, min)
                            == Ordering::Less =>
                    {
                        x = Some(next);
                    }
                    _ => break,
                }
            }
        }
        RangeByScore {
            list: self,
            cursor: self.level_ref(x, 0).forward,
            max,
        }
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank-order iterator over a skip list
pub struct Iter<'a> {
    list: &'a SkipList,
    cursor: Option<NodeIndex>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a ByteString, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.arena.get(idx);
        self.cursor = node.levels[0].forward;
        Some((&node.member, node.score))
    }
}

/// Single-pass iterator over a closed score interval
pub struct RangeByScore<'a> {
    list: &'a SkipList,
    cursor: Option<NodeIndex>,
    max: f64,
}

impl<'a> Iterator for RangeByScore<'a> {
    type Item = (&'a ByteString, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.arena.get(idx);
        if cmp_scores(node.score, self.max) == Ordering::Greater {
            self.cursor = None;
            return None;
        }
        self.cursor = node.levels[0].forward;
        Some((&node.member, node.score))
    }
}

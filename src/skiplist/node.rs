//! Node arena
//!
//! Nodes are stored in a slot vector and addressed by `u32` index. Forward
//! and backward links are plain indices: non-owning, copyable, and never
//! dangling because a slot is only vacated after every link to it has been
//! rewritten by the unlink pass.

use crate::bytestr::ByteString;
use crate::error::Result;

/// Index of a node in the arena
pub(crate) type NodeIndex = u32;

/// One level of a node's tower
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Level {
    /// Next node at this level, `None` at the end of the list
    pub forward: Option<NodeIndex>,

    /// Number of level-0 nodes this forward pointer skips, counting its
    /// target. Zero only while a slot is being spliced.
    pub span: u64,
}

/// A skip list entry
#[derive(Debug)]
pub(crate) struct Node {
    pub member: ByteString,
    pub score: f64,

    /// Level-0 predecessor, `None` when the header precedes this node
    pub backward: Option<NodeIndex>,

    /// Tower of forward links; `levels.len()` is this node's height
    pub levels: Vec<Level>,
}

impl Node {
    /// Build a node with `height` zeroed levels, reserving fallibly
    pub fn try_new(member: ByteString, score: f64, height: usize) -> Result<Self> {
        let mut levels = Vec::new();
        levels.try_reserve_exact(height)?;
        levels.resize(height, Level::default());
        Ok(Self {
            member,
            score,
            backward: None,
            levels,
        })
    }
}

/// Slot vector with free-list recycling
#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeIndex>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `node` in a slot, preferring a recycled one
    ///
    /// Reservation happens before the push; on failure the arena is
    /// unchanged and the node is dropped.
    pub fn try_alloc(&mut self, node: Node) -> Result<NodeIndex> {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return Ok(idx);
        }
        self.slots.try_reserve(1)?;
        let idx = self.slots.len() as NodeIndex;
        self.slots.push(Some(node));
        Ok(idx)
    }

    /// Vacate a slot, releasing the node's member buffer
    pub fn free(&mut self, idx: NodeIndex) {
        let vacated = self.slots[idx as usize].take();
        debug_assert!(vacated.is_some(), "freeing a vacant arena slot");
        self.free.push(idx);
    }

    pub fn get(&self, idx: NodeIndex) -> &Node {
        match &self.slots[idx as usize] {
            Some(node) => node,
            None => unreachable!("link into a vacant arena slot"),
        }
    }

    pub fn get_mut(&mut self, idx: NodeIndex) -> &mut Node {
        match &mut self.slots[idx as usize] {
            Some(node) => node,
            None => unreachable!("link into a vacant arena slot"),
        }
    }

    /// Drop all nodes and recycled slots
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

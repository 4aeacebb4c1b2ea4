//! Shared handle for multithreaded embeddings
//!
//! [`SortedSet`](crate::SortedSet) itself is single-writer and lock-free;
//! the invariant between its skip list and member index only holds if no
//! reader observes a half-applied write. This wrapper guards the whole
//! facade behind one `RwLock`, so range scans run concurrently with each
//! other while every mutation is exclusive over both halves at once.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::bytestr::ByteString;
use crate::config::Config;
use crate::error::Result;
use crate::set::{AddResult, SortedSet};

/// Cloneable, thread-safe handle to a [`SortedSet`]
#[derive(Debug, Clone, Default)]
pub struct SharedSortedSet {
    inner: Arc<RwLock<SortedSet>>,
}

impl SharedSortedSet {
    /// Create an empty shared set with default configuration
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SortedSet::new())),
        }
    }

    /// Create an empty shared set from `config`
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(SortedSet::with_config(config)?)),
        })
    }

    /// Add or reposition a member (write lock)
    pub fn add(&self, member: impl Into<ByteString>, score: f64) -> Result<AddResult> {
        self.inner.write().add(member, score)
    }

    /// Remove a member (write lock)
    pub fn remove(&self, member: &[u8]) -> bool {
        self.inner.write().remove(member)
    }

    /// Drop all members (write lock)
    pub fn clear(&self) {
        self.inner.write().clear()
    }

    /// Current score of `member` (read lock)
    pub fn score(&self, member: &[u8]) -> Option<f64> {
        self.inner.read().score(member)
    }

    /// Zero-based rank of `member` (read lock)
    pub fn rank(&self, member: &[u8], reverse: bool) -> Option<u64> {
        self.inner.read().rank(member, reverse)
    }

    /// Rank range as owned pairs (read lock)
    pub fn range_by_rank(&self, start: i64, end: i64, reverse: bool) -> Vec<(ByteString, f64)> {
        self.inner.read().range_by_rank(start, end, reverse)
    }

    /// Score range as owned pairs (read lock)
    pub fn range_by_score(
        &self,
        min: f64,
        max: f64,
        offset: usize,
        limit: Option<usize>,
    ) -> Vec<(ByteString, f64)> {
        self.inner.read().range_by_score(min, max, offset, limit)
    }

    /// Number of members (read lock)
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the set is empty (read lock)
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` under the read lock, e.g. to drive a borrowing iterator
    pub fn read<R>(&self, f: impl FnOnce(&SortedSet) -> R) -> R {
        f(&self.inner.read())
    }
}

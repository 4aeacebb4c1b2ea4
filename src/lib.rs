//! # rankset
//!
//! An in-memory sorted set keyed by (score, member) pairs, with:
//! - O(log n) expected insert, delete, rank and range-by-score queries
//! - O(1) membership and score lookup through a synchronized hash index
//! - Binary-safe member keys (arbitrary bytes, embedded NULs allowed)
//! - Deterministic, per-instance seedable level randomization
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SortedSet                              │
//! │            (facade, the only public entry point)             │
//! └──────────────┬───────────────────────────┬──────────────────┘
//!                │                           │
//!                ▼                           ▼
//!        ┌─────────────┐            ┌─────────────────┐
//!        │  SkipList   │            │   MemberIndex   │
//!        │ (order+rank)│            │ (member→score)  │
//!        └──────┬──────┘            └─────────────────┘
//!               │
//!               ▼
//!        ┌─────────────┐
//!        │ ByteString  │
//!        │ (member key)│
//!        └─────────────┘
//! ```
//!
//! The skip list maintains the total order (score ascending, then member
//! bytes ascending) together with per-level span counters, so ranks and
//! rank ranges never need a full scan. The member index answers "is this
//! member present, and at what score" without touching the ordered
//! structure. The facade keeps both sides in lockstep; that pairing is the
//! core invariant of the crate.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod bytestr;
pub mod index;
pub mod skiplist;
pub mod set;
pub mod sync;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RankSetError, Result};
pub use config::Config;
pub use bytestr::ByteString;
pub use set::{AddResult, SortedSet};
pub use sync::SharedSortedSet;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rankset
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! SkipList Module
//!
//! Ordered structure over (score, member) pairs with per-level span counters.
//!
//! ## Structure
//!
//! ```text
//! level 3  HEAD ──────────────(span 3)─────────────► c ──(2)──► NULL
//! level 2  HEAD ──(1)──► a ────────(2)─────────────► c ──(2)──► NULL
//! level 1  HEAD ──(1)──► a ──(1)──► b ────(1)──────► c ──(2)──► NULL
//! level 0  HEAD ──(1)──► a ──(1)──► b ──(1)──► ... ─► c ──(1)──► d ─► NULL
//! ```
//!
//! Every forward pointer carries a span: the number of level-0 nodes it
//! skips, counting its target. Summing spans along any search path yields
//! the rank of the node reached, which is what makes rank queries and
//! rank-indexed access O(log n) instead of O(n).
//!
//! ## Total Order
//!
//! Primary key: score ascending, compared with [`cmp_scores`]. Tie on score:
//! member bytes, lexicographic ascending. Scores may repeat; the pair
//! (score, member) is unique within a list.
//!
//! ## Design Notes
//! - Nodes live in an arena and link to each other by index, so there are
//!   no raw pointers to dangle and removal is a slot recycle, not a free.
//! - Level selection uses a per-list, optionally seeded generator; two lists
//!   built with the same seed and operation sequence have identical shape.

mod node;
mod list;
mod rand;

pub use list::{Iter, RangeByScore, SkipList};
pub use rand::LevelGenerator;

use std::cmp::Ordering;

/// Compare two scores under the list's fixed total order
///
/// Non-NaN scores follow `f64::total_cmp`, so `-0.0` sorts before `+0.0`.
/// Any NaN sorts greater than every non-NaN score, including `+inf`, and
/// all NaNs compare equal to each other (the member tiebreak orders them).
/// The natural `<` on f64 is undefined for NaN; this placement is the one
/// the crate commits to and tests pin it down.
pub fn cmp_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

//! MemberIndex Module
//!
//! Hash index from member to score.
//!
//! ## Responsibilities
//! - O(1) membership checks and score lookups
//! - Insert-or-overwrite semantics for score updates
//!
//! ## Data Structure Choice
//! Backed by `FxHashMap`: a hash table that rehashes by doubling its bucket
//! count at a fixed load factor, keeping operations amortized O(1), with a
//! fast non-cryptographic hash suited to short keys. The index stores no
//! ordering information; keeping it in lockstep with the skip list is the
//! facade's job.

mod table;

pub use table::MemberIndex;

//! ByteString Module
//!
//! Binary-safe dynamic byte string used as the member key.
//!
//! ## Responsibilities
//! - Own an arbitrary byte payload (embedded NULs allowed)
//! - O(1) length, amortized O(1) append via doubling growth
//! - Byte-wise lexicographic ordering (the score tiebreaker)
//! - Hash/Borrow plumbing so the same value can key the member index

mod string;

pub use string::ByteString;

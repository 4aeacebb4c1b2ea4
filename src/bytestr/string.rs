//! ByteString implementation
//!
//! A thin owned byte buffer with explicit, fallible growth.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::error::Result;

/// Binary-safe dynamic string
///
/// Unlike `str`, the payload is raw bytes: members are compared, hashed and
/// stored without any encoding assumption, so keys containing NUL or invalid
/// UTF-8 behave exactly like any other key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteString {
    buf: Vec<u8>,
}

impl ByteString {
    /// Create an empty string
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create a string holding a copy of `bytes`, sized exactly to the input
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self { buf: bytes.to_vec() }
    }

    /// Length in bytes, O(1)
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the string is empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Currently allocated capacity in bytes
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Append `bytes`, growing by capacity doubling when needed
    ///
    /// The reservation happens before any byte is written: on allocation
    /// failure the string is left exactly as it was and `OutOfMemory` is
    /// returned. Amortized O(1) per appended byte.
    pub fn try_append(&mut self, bytes: &[u8]) -> Result<()> {
        let needed = self.buf.len() + bytes.len();
        if needed > self.buf.capacity() {
            // Double rather than grow to fit, so repeated appends stay
            // amortized O(1).
            let target = needed.max(self.buf.capacity() * 2);
            self.buf.try_reserve_exact(target - self.buf.len())?;
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Append `bytes`, aborting the process on allocation failure
    ///
    /// Convenience wrapper over [`try_append`](Self::try_append) for callers
    /// that accept the global allocator's OOM policy.
    pub fn append(&mut self, bytes: &[u8]) {
        let needed = self.buf.len() + bytes.len();
        if needed > self.buf.capacity() {
            let target = needed.max(self.buf.capacity() * 2);
            self.buf.reserve_exact(target - self.buf.len());
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Borrow the payload
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the string, returning the underlying buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Drop the payload, keeping the allocation for reuse
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Byte-wise lexicographic comparison, the score tiebreaker key
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.buf.cmp(&b.buf)
    }
}

// =============================================================================
// Ordering / Hashing
// =============================================================================

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        ByteString::compare(self, other)
    }
}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Hash must agree with Borrow<[u8]> below: hash exactly like the byte slice
// so map lookups by &[u8] find entries keyed by ByteString.
impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf.as_slice().hash(state);
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.buf
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(buf: Vec<u8>) -> Self {
        Self { buf }
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.buf == other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.buf == *other
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.buf == other.as_bytes()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"")?;
        for &b in &self.buf {
            for esc in std::ascii::escape_default(b) {
                write!(f, "{}", esc as char)?;
            }
        }
        write!(f, "\"")
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.buf))
    }
}

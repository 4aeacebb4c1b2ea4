//! ByteString Tests
//!
//! Tests verify:
//! - Construction and O(1) length
//! - Doubling growth on append, content preserved
//! - Binary safety (embedded NULs, invalid UTF-8)
//! - Byte-wise lexicographic ordering

use std::cmp::Ordering;

use rankset::ByteString;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_is_empty() {
    let s = ByteString::new();
    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
}

#[test]
fn test_from_bytes_copies_input() {
    let s = ByteString::from_bytes(b"hello");
    assert_eq!(s.len(), 5);
    assert_eq!(s.as_bytes(), b"hello");
}

#[test]
fn test_from_str_and_vec() {
    assert_eq!(ByteString::from("abc"), ByteString::from_bytes(b"abc"));
    assert_eq!(
        ByteString::from(vec![1u8, 2, 3]),
        ByteString::from_bytes(&[1, 2, 3])
    );
}

// =============================================================================
// Append / Growth
// =============================================================================

#[test]
fn test_append_preserves_existing_content() {
    let mut s = ByteString::from_bytes(b"abc");
    s.append(b"def");
    assert_eq!(s.as_bytes(), b"abcdef");
    assert_eq!(s.len(), 6);
}

#[test]
fn test_try_append_grows_and_succeeds() {
    let mut s = ByteString::new();
    for _ in 0..100 {
        s.try_append(b"xy").expect("in-memory append");
    }
    assert_eq!(s.len(), 200);
    assert!(s.capacity() >= 200);
}

#[test]
fn test_append_doubles_capacity() {
    let mut s = ByteString::new();
    s.append(b"x");
    // Fill whatever the allocator handed out, then overflow it by one.
    while s.len() < s.capacity() {
        s.append(b"x");
    }
    let before = s.capacity();
    s.append(b"y");
    // Growth is by doubling, not by the single byte that overflowed.
    assert!(s.capacity() >= before * 2);
    assert_eq!(s.len(), before + 1);
}

#[test]
fn test_many_small_appends() {
    let mut s = ByteString::new();
    for i in 0..1000u32 {
        s.append(&[(i % 251) as u8]);
    }
    assert_eq!(s.len(), 1000);
    assert_eq!(s.as_bytes()[999], (999 % 251) as u8);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut s = ByteString::from_bytes(&[0xAB; 64]);
    let cap = s.capacity();
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.capacity(), cap);
}

// =============================================================================
// Binary Safety
// =============================================================================

#[test]
fn test_embedded_nul_bytes() {
    let s = ByteString::from_bytes(b"a\0b\0c");
    assert_eq!(s.len(), 5);
    assert_eq!(s.as_bytes(), b"a\0b\0c");
}

#[test]
fn test_invalid_utf8_payload() {
    let s = ByteString::from_bytes(&[0xFF, 0xFE, 0x00, 0x80]);
    assert_eq!(s.len(), 4);
    // Display must not panic on arbitrary bytes.
    let _ = format!("{s}");
    let _ = format!("{s:?}");
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_compare_is_bytewise_lexicographic() {
    let a = ByteString::from_bytes(b"abc");
    let b = ByteString::from_bytes(b"abd");
    let prefix = ByteString::from_bytes(b"ab");

    assert_eq!(ByteString::compare(&a, &b), Ordering::Less);
    assert_eq!(ByteString::compare(&b, &a), Ordering::Greater);
    assert_eq!(ByteString::compare(&a, &a), Ordering::Equal);
    // A strict prefix sorts first.
    assert_eq!(ByteString::compare(&prefix, &a), Ordering::Less);
}

#[test]
fn test_ordering_ignores_utf8_semantics() {
    // 0xFF is invalid UTF-8 but compares as a plain byte.
    let hi = ByteString::from_bytes(&[0xFF]);
    let lo = ByteString::from_bytes(b"z");
    assert!(lo < hi);
}

#[test]
fn test_sortable_in_collections() {
    let mut v = vec![
        ByteString::from("cherry"),
        ByteString::from("apple"),
        ByteString::from("banana"),
    ];
    v.sort();
    assert_eq!(v[0], "apple");
    assert_eq!(v[1], "banana");
    assert_eq!(v[2], "cherry");
}

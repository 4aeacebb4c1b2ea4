//! SharedSortedSet Tests
//!
//! Tests verify:
//! - Reads run concurrently without torn observations
//! - Writers never leave the list and index observably out of sync
//! - Handle cloning shares one underlying set

use std::thread;

use rankset::SharedSortedSet;
use tracing_subscriber::EnvFilter;

/// Route crate trace events through the test harness when RUST_LOG is set
fn init_diagnostics() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Basic Operations
// =============================================================================

#[test]
fn test_shared_basic_operations() {
    let set = SharedSortedSet::new();
    set.add("alice", 50.0).unwrap();
    set.add("bob", 30.0).unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.score(b"bob"), Some(30.0));
    assert_eq!(set.rank(b"alice", false), Some(1));
    assert!(set.remove(b"bob"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_clones_share_state() {
    let set = SharedSortedSet::new();
    let other = set.clone();

    set.add("alice", 50.0).unwrap();
    assert_eq!(other.score(b"alice"), Some(50.0));

    other.clear();
    assert!(set.is_empty());
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_reads() {
    let set = SharedSortedSet::new();
    for i in 0..100 {
        set.add(format!("m{i:03}").as_str(), i as f64).unwrap();
    }

    let mut handles = vec![];
    for _ in 0..8 {
        let set = set.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                assert_eq!(set.rank(b"m050", false), Some(50));
                assert_eq!(set.range_by_rank(0, 9, false).len(), 10);
                assert_eq!(set.range_by_score(10.0, 19.0, 0, None).len(), 10);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_writers_keep_views_in_sync() {
    init_diagnostics();
    let set = SharedSortedSet::new();

    let mut handles = vec![];
    for t in 0..4 {
        let set = set.clone();
        handles.push(thread::spawn(move || {
            for i in 0..250 {
                let member = format!("w{t}_{i}");
                set.add(member.as_str(), (t * 1000 + i) as f64).unwrap();
            }
        }));
    }
    // A reader interleaving with the writers: whatever it sees must be a
    // consistent pairing of both views, never a half-applied write.
    {
        let set = set.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..500 {
                set.read(|inner| assert!(inner.check_invariants()));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(set.len(), 1000);
    assert_eq!(set.rank(b"w0_0", false), Some(0));
    set.read(|inner| assert!(inner.check_invariants()));
}

#[test]
fn test_concurrent_updates_of_same_member() {
    init_diagnostics();
    let set = SharedSortedSet::new();
    set.add("contested", 0.0).unwrap();

    let mut handles = vec![];
    for t in 0..4 {
        let set = set.clone();
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                set.add("contested", (t * 100 + i) as f64).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // Exactly one entry survives, at whichever score won the final write.
    assert_eq!(set.len(), 1);
    let score = set.score(b"contested").unwrap();
    assert_eq!(set.range_by_rank(0, -1, false)[0].1, score);
}

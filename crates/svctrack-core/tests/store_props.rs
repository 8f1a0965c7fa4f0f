//! Counter store behavior under sequential and concurrent use.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use svctrack_core::CounterStore;

#[test]
fn n_increments_read_back_as_n() {
    let store = CounterStore::new();
    for n in [1u64, 2, 7, 100] {
        let name = format!("svc-{n}");
        for _ in 0..n {
            store.increment(&name);
        }
        assert_eq!(store.get_count(&name), n);
    }
}

#[test]
fn keys_are_independent() {
    let store = CounterStore::new();
    store.increment("a");
    store.increment("a");
    assert_eq!(store.get_count("a"), 2);
    assert_eq!(store.get_count("b"), 0);

    store.increment("b");
    assert_eq!(store.get_count("a"), 2);
    assert_eq!(store.get_count("b"), 1);
}

#[test]
fn names_are_case_and_space_sensitive() {
    let store = CounterStore::new();
    store.increment("Foo");
    assert_eq!(store.get_count("foo"), 0);
    assert_eq!(store.get_count(" Foo"), 0);
    assert_eq!(store.get_count("Foo"), 1);
}

#[test]
fn concurrent_increments_are_not_lost() {
    const WRITERS: u64 = 8;
    const PER_WRITER: u64 = 1_000;

    let store = CounterStore::new();
    thread::scope(|s| {
        for _ in 0..WRITERS {
            s.spawn(|| {
                for _ in 0..PER_WRITER {
                    store.increment("hot");
                }
            });
        }
        // readers alongside writers only ever see a value in range
        s.spawn(|| {
            for _ in 0..PER_WRITER {
                assert!(store.get_count("hot") <= WRITERS * PER_WRITER);
            }
        });
    });

    assert_eq!(store.get_count("hot"), WRITERS * PER_WRITER);
}

#[test]
fn concurrent_increments_across_keys() {
    let store = Arc::new(CounterStore::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let key = format!("k{i}");
                for _ in 0..500 {
                    store.increment(&key);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    for i in 0..4 {
        assert_eq!(store.get_count(&format!("k{i}")), 500);
    }
    assert_eq!(store.len(), 4);
}

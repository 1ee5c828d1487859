//! Concurrent mutation and query behavior.

use std::sync::Arc;
use std::thread;

use socialgraph::{Error, InMemory, Separation};

use crate::test_utils::*;

#[test]
fn racing_adds_store_one_edge() {
    let db = graph_from(&[]);
    register(&db, "a");
    register(&db, "b");

    let graph = Arc::new(db.graph.clone());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                if i % 2 == 0 {
                    graph.add_connection("a", "b")
                } else {
                    graph.add_connection("b", "a")
                }
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(matches!(err, Error::AlreadyConnected { .. }));
    }
    assert_eq!(db.edges.len(), 1);
}

#[test]
fn disjoint_writers_all_succeed() {
    let db = InMemory::new();
    for i in 0..64 {
        register(&db, &format!("u{}", i));
    }

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let graph = db.graph.clone();
            thread::spawn(move || {
                for i in 0..8 {
                    let a = format!("u{}", t * 8 + i);
                    let b = format!("u{}", (t * 8 + i + 1) % 64);
                    graph.add_connection(&a, &b).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // A ring of 64.
    assert_eq!(db.edges.len(), 64);
    assert_eq!(
        db.graph.degree_of_separation("u0", "u32").unwrap(),
        Separation::Degree(32)
    );
}

#[test]
fn readers_run_alongside_writers() {
    let db = graph_from(CHAIN);
    for i in 0..32 {
        register(&db, &format!("extra{}", i));
    }

    let writer = {
        let graph = db.graph.clone();
        thread::spawn(move || {
            for i in 0..32 {
                graph.add_connection("D", &format!("extra{}", i)).unwrap();
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let graph = db.graph.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    // The chain itself never changes.
                    assert_eq!(
                        graph.degree_of_separation("A", "D").unwrap(),
                        Separation::Degree(3)
                    );
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(db.graph.friends("D").unwrap().len(), 33);
}

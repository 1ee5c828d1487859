//! Degree of separation and connection paths.

use std::time::Duration;

use socialgraph::{Error, GraphConfig, InMemory, Separation, TraversalLimits, UserId};

use crate::test_utils::*;

#[test]
fn chain_degrees() {
    let db = graph_from(CHAIN);
    assert_eq!(
        db.graph.degree_of_separation("A", "D").unwrap(),
        Separation::Degree(3)
    );
    assert_eq!(
        db.graph.degree_of_separation("A", "A").unwrap(),
        Separation::Degree(0)
    );
    assert_eq!(
        db.graph.degree_of_separation("B", "D").unwrap(),
        Separation::Degree(2)
    );
}

#[test]
fn disconnected_users_are_unreachable() {
    let db = graph_from(&[("a", "b"), ("c", "d")]);
    assert_eq!(
        db.graph.degree_of_separation("a", "d").unwrap(),
        Separation::Unreachable
    );
    assert_eq!(db.graph.connection_path("a", "d").unwrap(), None);
}

#[test]
fn path_follows_shortest_route() {
    let db = graph_from(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("a", "x"), ("x", "e")]);
    let path = db.graph.connection_path("a", "e").unwrap().unwrap();
    let expected: Vec<UserId> = ["a", "x", "e"].iter().map(|s| UserId::from(*s)).collect();
    assert_eq!(path, expected);
}

#[test]
fn limits_surface_as_search_limit() {
    let edges: Vec<(String, String)> = (0..10)
        .map(|i| (format!("n{}", i), format!("n{}", i + 1)))
        .collect();
    let config = GraphConfig::default().with_traversal(TraversalLimits {
        max_depth: Some(4),
        max_visited: None,
    });
    let db = InMemory::with_config(config);
    for (a, b) in &edges {
        register(&db, a);
        register(&db, b);
        db.graph.add_connection(a, b).unwrap();
    }
    assert_eq!(
        db.graph.degree_of_separation("n0", "n4").unwrap(),
        Separation::Degree(4)
    );
    assert!(matches!(
        db.graph.degree_of_separation("n0", "n10").unwrap(),
        Separation::SearchLimitReached { .. }
    ));
    assert!(matches!(
        db.graph.connection_path("n0", "n10"),
        Err(Error::SearchLimitReached { .. })
    ));
}

#[test]
fn config_loaded_from_toml() {
    let config = GraphConfig::from_toml_str("[traversal]\nmax_visited = 2\n").unwrap();
    let db = InMemory::with_config(config);
    for (a, b) in CHAIN {
        register(&db, a);
        register(&db, b);
        db.graph.add_connection(a, b).unwrap();
    }
    assert!(matches!(
        db.graph.degree_of_separation("A", "D").unwrap(),
        Separation::SearchLimitReached { explored: 2 }
    ));
}

#[test]
fn zero_timeout_fails_fast() {
    let db = graph_from(CHAIN);
    let bounded = db.graph.clone().with_timeout(Duration::ZERO);
    assert_eq!(
        bounded.degree_of_separation("A", "D").unwrap_err(),
        Error::Timeout { budget_ms: 0 }
    );
    // Reflexive queries never touch the store.
    assert_eq!(
        bounded.degree_of_separation("A", "A").unwrap(),
        Separation::Degree(0)
    );
}

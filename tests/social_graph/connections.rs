//! Connection mutation through the public API.

use socialgraph::{Edge, Error, GraphStore, InMemory};

use crate::test_utils::*;

#[test]
fn add_is_order_independent() {
    let db = graph_from(&[]);
    register(&db, "bob");
    register(&db, "alice");
    let edge = db.graph.add_connection("bob", "alice").unwrap();
    assert_eq!(edge, Edge::new("alice", "bob").unwrap());
    assert!(db.graph.are_connected("alice", "bob").unwrap());
    assert!(db.graph.are_connected("bob", "alice").unwrap());
}

#[test]
fn one_record_per_pair() {
    let db = graph_from(&[("x", "y")]);
    assert!(matches!(
        db.graph.add_connection("y", "x"),
        Err(Error::AlreadyConnected { .. })
    ));
    assert_eq!(db.edges.len(), 1);
    assert_eq!(db.edges.edges(), vec![Edge::new("x", "y").unwrap()]);
}

#[test]
fn self_pair_never_stored() {
    let db = graph_from(&[]);
    register(&db, "solo");
    let err = db.graph.add_connection("solo", "solo").unwrap_err();
    assert_eq!(err.kind(), "invalid_connection");
    assert!(db.edges.is_empty());
    assert!(db.graph.friends("solo").unwrap().is_empty());
}

#[test]
fn unknown_users_reported() {
    let db = graph_from(&[]);
    register(&db, "known");
    let err = db.graph.add_connection("known", "ghost").unwrap_err();
    assert_eq!(
        err,
        Error::UserNotFound {
            users: vec!["ghost".into()]
        }
    );
    assert!(db.edges.is_empty());
}

#[test]
fn remove_then_re_add() {
    let db = graph_from(&[("p", "q")]);
    let removed = db.graph.remove_connection("q", "p").unwrap();
    assert_eq!(removed, Edge::new("p", "q").unwrap());
    assert!(!db.graph.are_connected("p", "q").unwrap());
    assert_eq!(
        db.graph.remove_connection("p", "q").unwrap_err().kind(),
        "not_connected"
    );
    db.graph.add_connection("p", "q").unwrap();
    assert!(db.graph.are_connected("p", "q").unwrap());
}

#[test]
fn empty_identifier_is_invalid_input() {
    let db = graph_from(&[]);
    register(&db, "a");
    assert_eq!(
        db.graph.add_connection("", "a").unwrap_err().kind(),
        "invalid_input"
    );
}

#[test]
fn store_index_tracks_mutations() {
    let db = InMemory::new();
    for u in ["a", "b", "c"] {
        register(&db, u);
    }
    db.graph.add_connection("a", "b").unwrap();
    db.graph.add_connection("a", "c").unwrap();
    assert_eq!(db.edges.find_edges_incident(&"a".into()).unwrap().len(), 2);
    db.graph.remove_connection("a", "b").unwrap();
    assert_eq!(db.edges.find_edges_incident(&"a".into()).unwrap().len(), 1);
    assert!(db.edges.find_edges_incident(&"b".into()).unwrap().is_empty());
}

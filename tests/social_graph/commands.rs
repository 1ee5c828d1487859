//! Raw commands run through a typed handle.

use socialgraph::{
    Command, GraphConfig, InMemory, Output, Separation, TraversalLimits, UserId,
};

use crate::test_utils::*;

#[test]
fn json_commands_share_state_with_typed_calls() {
    let db = graph_from(CHAIN);
    let cmd: Command =
        serde_json::from_str(r#"{"command":"remove_connection","user1":"C","user2":"B"}"#)
            .unwrap();
    db.graph.executor().execute(cmd).unwrap();

    assert!(!db.graph.are_connected("B", "C").unwrap());
    let out = db
        .graph
        .executor()
        .execute(Command::DegreeOfSeparation {
            from: UserId::from("A"),
            to: UserId::from("D"),
        })
        .unwrap();
    assert_eq!(out, Output::Separation(Separation::Unreachable));
}

#[test]
fn handle_reports_its_config() {
    let limits = TraversalLimits {
        max_depth: Some(3),
        max_visited: None,
    };
    let db = InMemory::with_config(GraphConfig::default().with_traversal(limits));
    assert_eq!(db.graph.config().traversal, limits);
    assert_eq!(db.graph.executor().service().config(), db.graph.config());
    assert!(InMemory::new().graph.config().traversal.is_unbounded());
}

//! Friend and friend-of-friend listings.

use socialgraph::Friend;

use crate::test_utils::*;

fn ids(friends: &[Friend]) -> Vec<&str> {
    friends.iter().map(|f| f.user_id.as_str()).collect()
}

#[test]
fn chain_listings() {
    let db = graph_from(CHAIN);
    let friends = db.graph.friends("B").unwrap();
    assert_eq!(ids(&friends), vec!["A", "C"]);
    assert_eq!(friends[0].display_name, "Name A");

    assert_eq!(ids(&db.graph.friends_of_friends("B").unwrap()), vec!["D"]);
    assert_eq!(ids(&db.graph.friends_of_friends("A").unwrap()), vec!["C"]);
    assert!(db.graph.friends_of_friends("nobody").unwrap().is_empty());
}

#[test]
fn friends_of_friends_on_a_star() {
    // Spokes all see each other at distance two through the hub.
    let db = graph_from(&[("hub", "s1"), ("hub", "s2"), ("hub", "s3")]);
    assert!(db.graph.friends_of_friends("hub").unwrap().is_empty());
    assert_eq!(
        ids(&db.graph.friends_of_friends("s2").unwrap()),
        vec!["s1", "s3"]
    );
}

#[test]
fn removed_user_profile_is_skipped() {
    let db = graph_from(CHAIN);
    db.users.remove_user(&"A".into());
    assert_eq!(ids(&db.graph.friends("B").unwrap()), vec!["C"]);
}

#[test]
fn listing_reflects_removals() {
    let db = graph_from(CHAIN);
    db.graph.remove_connection("B", "C").unwrap();
    assert_eq!(ids(&db.graph.friends("B").unwrap()), vec!["A"]);
    assert!(db.graph.friends_of_friends("A").unwrap().is_empty());
}

mod common;

use common::{add_event, interact, setup};
use eventpulse::domain::values::interaction_kind::InteractionKind;

#[test]
fn test_email_payload_for_active_user() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz music downtown");
    add_event(&ep, "Jazz brunch", "Smooth jazz music and brunch");

    let alice = ep
        .add_user(
            "Alice".to_string(),
            "Ng".to_string(),
            "alice@example.com".to_string(),
        )
        .unwrap();
    interact(&ep, InteractionKind::Order, &alice.id, &a);

    let emails = ep.email_recommendations(5).unwrap();
    assert_eq!(emails.len(), 1);

    let email = &emails[0];
    assert_eq!(email.first_name, "Alice");
    assert_eq!(email.user_email, "alice@example.com");
    assert_eq!(email.recommended_events.len(), 1);
    assert_eq!(email.recommended_events[0].title, "Jazz brunch");
    assert!(email.recommended_events[0]
        .link
        .starts_with("http://localhost:3000/events/"));
}

#[test]
fn test_users_without_recommendations_are_skipped() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz music downtown");

    // Bob never interacted; Carol interacted with the only event there is,
    // leaving no candidates. Neither gets an email.
    ep.add_user(
        "Bob".to_string(),
        "Lee".to_string(),
        "bob@example.com".to_string(),
    )
    .unwrap();
    let carol = ep
        .add_user(
            "Carol".to_string(),
            "Diaz".to_string(),
            "carol@example.com".to_string(),
        )
        .unwrap();
    interact(&ep, InteractionKind::Like, &carol.id, &a);

    let emails = ep.email_recommendations(5).unwrap();
    assert!(emails.is_empty());
}

#[test]
fn test_top_n_caps_recommended_events() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz music downtown");
    add_event(&ep, "Jazz brunch", "Smooth jazz music and brunch");
    add_event(&ep, "Jazz cruise", "Jazz music on the river");
    add_event(&ep, "Jazz workshop", "Learn jazz music improvisation");

    let alice = ep
        .add_user(
            "Alice".to_string(),
            "Ng".to_string(),
            "alice@example.com".to_string(),
        )
        .unwrap();
    interact(&ep, InteractionKind::Order, &alice.id, &a);

    let emails = ep.email_recommendations(2).unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recommended_events.len(), 2);
}

mod common;

use common::{add_event, add_event_in_category, interact, setup};
use eventpulse::application::recommend::RecommendOptions;
use eventpulse::domain::values::interaction_kind::InteractionKind;
use eventpulse::domain::values::weights::InteractionWeights;

fn defaults() -> (InteractionWeights, RecommendOptions) {
    (InteractionWeights::default(), RecommendOptions::default())
}

#[test]
fn test_no_interactions_yields_empty_list() {
    let ep = setup();
    add_event(&ep, "Jazz night", "Live jazz downtown");
    add_event(&ep, "Tech meetup", "Systems programming talks");

    let (weights, options) = defaults();
    let ids = ep.recommend("alice", &weights, options).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn test_recommends_similar_content_first() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night downtown", "Live jazz music with local artists");
    let b = add_event(&ep, "Jazz brunch", "Smooth jazz music and brunch specials");
    let c = add_event(&ep, "Rust conference", "Systems programming talks and workshops");

    interact(&ep, InteractionKind::Order, "alice", &a);

    let weights = InteractionWeights::default();
    let options = RecommendOptions {
        top_n: 2,
        preferred_categories_only: false,
    };
    let ids = ep.recommend("alice", &weights, options).unwrap();

    // B shares content with A, C does not; A itself is never recommended.
    assert_eq!(ids, vec![b, c]);
    assert!(!ids.contains(&a));
}

#[test]
fn test_never_returns_interacted_events() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz downtown");
    let b = add_event(&ep, "Jazz brunch", "Smooth jazz and brunch");
    let c = add_event(&ep, "Rock show", "Loud guitars all night");

    // Any interaction kind disqualifies an event from recommendation.
    interact(&ep, InteractionKind::Order, "alice", &a);
    interact(&ep, InteractionKind::Click, "alice", &b);

    let (weights, options) = defaults();
    let ids = ep.recommend("alice", &weights, options).unwrap();
    assert_eq!(ids, vec![c]);
}

#[test]
fn test_all_events_interacted_yields_empty() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz downtown");
    let b = add_event(&ep, "Jazz brunch", "Smooth jazz and brunch");
    interact(&ep, InteractionKind::Like, "alice", &a);
    interact(&ep, InteractionKind::Like, "alice", &b);

    let (weights, options) = defaults();
    let ids = ep.recommend("alice", &weights, options).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn test_top_n_truncates() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz downtown");
    add_event(&ep, "Jazz brunch", "Smooth jazz and brunch");
    add_event(&ep, "Jazz cruise", "Jazz on the river");
    add_event(&ep, "Rock show", "Loud guitars all night");

    interact(&ep, InteractionKind::Order, "alice", &a);

    let weights = InteractionWeights::default();
    let options = RecommendOptions {
        top_n: 2,
        preferred_categories_only: false,
    };
    let ids = ep.recommend("alice", &weights, options).unwrap();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_zero_weight_profile_yields_empty() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz downtown");
    add_event(&ep, "Jazz brunch", "Smooth jazz and brunch");
    interact(&ep, InteractionKind::Like, "alice", &a);

    let weights = InteractionWeights {
        order: 0.0,
        like: 0.0,
        click: 0.0,
    };
    let ids = ep
        .recommend("alice", &weights, RecommendOptions::default())
        .unwrap();
    assert!(ids.is_empty());
}

#[test]
fn test_preferred_categories_restricts_candidates() {
    let ep = setup();
    let music = ep.add_category("Music".to_string()).unwrap();
    let tech = ep.add_category("Tech".to_string()).unwrap();

    let a = add_event_in_category(&ep, "Jazz night", "Live jazz downtown", &music.id);
    let b = add_event_in_category(&ep, "Jazz brunch", "Smooth jazz and brunch", &music.id);
    let c = add_event_in_category(&ep, "Jazz talks", "Talks about jazz history", &tech.id);

    interact(&ep, InteractionKind::Order, "alice", &a);

    let weights = InteractionWeights::default();
    let restricted = RecommendOptions {
        top_n: 10,
        preferred_categories_only: true,
    };
    let ids = ep.recommend("alice", &weights, restricted).unwrap();
    assert_eq!(ids, vec![b.clone()]);

    // Without the flag the tech-category event is a candidate too.
    let open = RecommendOptions::default();
    let ids = ep.recommend("alice", &weights, open).unwrap();
    assert!(ids.contains(&b));
    assert!(ids.contains(&c));
}

mod common;

use chrono::{Duration, Utc};
use common::{
    add_event, add_event_aged, add_event_with_tickets, interact, interact_days_ago, setup,
};
use eventpulse::application::classify::BadgeAction;
use eventpulse::domain::values::badge::Badge;
use eventpulse::domain::values::interaction_kind::InteractionKind;

fn event_of(ep: &eventpulse::EventPulse, event_id: &str) -> eventpulse::domain::entities::event::Event {
    ep.events()
        .unwrap()
        .into_iter()
        .find(|e| e.id == event_id)
        .unwrap()
}

fn badges_of(ep: &eventpulse::EventPulse, event_id: &str) -> Vec<String> {
    event_of(ep, event_id).badges
}

#[test]
fn test_top_rated_goes_to_single_liked_event() {
    let ep = setup();
    let liked = add_event(&ep, "Jazz night", "Live jazz downtown");
    let mut others = Vec::new();
    for i in 0..9 {
        others.push(add_event(&ep, &format!("Event {i}"), "Something else"));
    }

    for user in ["u1", "u2", "u3", "u4", "u5"] {
        interact(&ep, InteractionKind::Like, user, &liked);
    }

    let run = ep
        .classify_badges(Some(&[Badge::TopRated]), Utc::now())
        .unwrap();
    assert_eq!(run.rules_run, 1);
    assert_eq!(run.changes.len(), 1);
    assert_eq!(run.changes[0].event_id, liked);
    assert_eq!(run.changes[0].action, BadgeAction::Added);

    assert!(event_of(&ep, &liked).has_badge(&Badge::TopRated));
    for other in &others {
        assert!(badges_of(&ep, other).is_empty());
    }
}

#[test]
fn test_classification_is_idempotent() {
    let ep = setup();
    let event = add_event(&ep, "Jazz night", "Live jazz downtown");
    interact(&ep, InteractionKind::Like, "alice", &event);
    interact(&ep, InteractionKind::Click, "alice", &event);

    let now = Utc::now();
    let first = ep.classify_badges(None, now).unwrap();
    assert!(!first.changes.is_empty());
    assert_eq!(first.rules_run, 5);
    assert_eq!(first.rules_failed, 0);

    let second = ep.classify_badges(None, now).unwrap();
    assert!(second.changes.is_empty());
}

#[test]
fn test_top_rated_moves_when_ranking_shifts() {
    let ep = setup();
    let a = add_event(&ep, "Jazz night", "Live jazz downtown");
    let b = add_event(&ep, "Rock show", "Loud guitars all night");

    for user in ["u1", "u2", "u3"] {
        interact(&ep, InteractionKind::Like, user, &a);
    }
    ep.classify_badges(Some(&[Badge::TopRated]), Utc::now())
        .unwrap();
    assert!(badges_of(&ep, &a).contains(&"top_rated".to_string()));

    // B overtakes A; two events with likes, cutoff is still one.
    for user in ["u1", "u2", "u3", "u4", "u5"] {
        interact(&ep, InteractionKind::Like, user, &b);
    }
    let run = ep
        .classify_badges(Some(&[Badge::TopRated]), Utc::now())
        .unwrap();

    assert!(event_of(&ep, &b).has_badge(&Badge::TopRated));
    assert!(!event_of(&ep, &a).has_badge(&Badge::TopRated));
    let actions: Vec<BadgeAction> = run.changes.iter().map(|c| c.action).collect();
    assert!(actions.contains(&BadgeAction::Added));
    assert!(actions.contains(&BadgeAction::Removed));
}

#[test]
fn test_popular_choice_uses_clicks() {
    let ep = setup();
    let clicked = add_event(&ep, "Jazz night", "Live jazz downtown");
    add_event(&ep, "Rock show", "Loud guitars all night");

    interact(&ep, InteractionKind::Click, "alice", &clicked);
    ep.classify_badges(Some(&[Badge::PopularChoice]), Utc::now())
        .unwrap();
    assert!(badges_of(&ep, &clicked).contains(&"popular_choice".to_string()));
}

#[test]
fn test_just_announced_tracks_creation_window() {
    let ep = setup();
    let fresh = add_event(&ep, "Jazz night", "Live jazz downtown");
    let stale = add_event_aged(&ep, "Old fair", "Long-running fair", 10);

    let now = Utc::now();
    ep.classify_badges(Some(&[Badge::JustAnnounced]), now)
        .unwrap();
    assert!(badges_of(&ep, &fresh).contains(&"just_announced".to_string()));
    assert!(badges_of(&ep, &stale).is_empty());

    // Five days later the fresh event has aged out and loses the badge.
    let run = ep
        .classify_badges(Some(&[Badge::JustAnnounced]), now + Duration::days(5))
        .unwrap();
    assert!(badges_of(&ep, &fresh).is_empty());
    assert_eq!(run.changes.len(), 1);
    assert_eq!(run.changes[0].action, BadgeAction::Removed);
}

#[test]
fn test_limited_seats_threshold() {
    let ep = setup();
    let nearly_full = add_event_with_tickets(&ep, "Hot show", "100", "95");
    let half_full = add_event_with_tickets(&ep, "Quiet show", "100", "50");
    let zero_capacity = add_event_with_tickets(&ep, "Unbounded", "0", "0");

    ep.classify_badges(Some(&[Badge::LimitedSeats]), Utc::now())
        .unwrap();
    assert!(badges_of(&ep, &nearly_full).contains(&"limited_seats".to_string()));
    assert!(badges_of(&ep, &half_full).is_empty());
    assert!(badges_of(&ep, &zero_capacity).is_empty());
}

#[test]
fn test_invalid_ticket_data_is_skipped() {
    let ep = setup();
    let broken = add_event_with_tickets(&ep, "Broken", "abc", "10");
    let valid = add_event_with_tickets(&ep, "Valid", "100", "99");

    // The malformed event neither errors nor disturbs the others.
    let run = ep
        .classify_badges(Some(&[Badge::LimitedSeats]), Utc::now())
        .unwrap();
    assert_eq!(run.rules_failed, 0);
    assert!(badges_of(&ep, &broken).is_empty());
    assert!(badges_of(&ep, &valid).contains(&"limited_seats".to_string()));
}

#[test]
fn test_fast_selling_ranks_by_sales_percentage() {
    let ep = setup();
    let fast = add_event_with_tickets(&ep, "Fast", "100", "0");
    let slow = add_event_with_tickets(&ep, "Slow", "100", "0");
    let broken = add_event_with_tickets(&ep, "Broken", "abc", "0");

    for i in 0..10 {
        interact(&ep, InteractionKind::Order, &format!("u{i}"), &fast);
    }
    interact(&ep, InteractionKind::Order, "u0", &slow);
    interact(&ep, InteractionKind::Order, "u0", &broken);

    ep.classify_badges(Some(&[Badge::FastSelling]), Utc::now())
        .unwrap();
    assert!(badges_of(&ep, &fast).contains(&"fast_selling".to_string()));
    assert!(badges_of(&ep, &slow).is_empty());
    assert!(badges_of(&ep, &broken).is_empty());
}

#[test]
fn test_fast_selling_ignores_orders_outside_window() {
    let ep = setup();
    let event = add_event_with_tickets(&ep, "Earlier hit", "100", "0");
    interact_days_ago(&ep, InteractionKind::Order, "u0", &event, 10);

    let run = ep
        .classify_badges(Some(&[Badge::FastSelling]), Utc::now())
        .unwrap();
    assert!(run.changes.is_empty());
    assert!(badges_of(&ep, &event).is_empty());
}

#[test]
fn test_fast_selling_keeps_badge_without_recent_sales() {
    let ep = setup();
    let event = add_event_with_tickets(&ep, "Weekend hit", "100", "0");
    interact(&ep, InteractionKind::Order, "u0", &event);

    let now = Utc::now();
    ep.classify_badges(Some(&[Badge::FastSelling]), now).unwrap();
    assert!(badges_of(&ep, &event).contains(&"fast_selling".to_string()));

    // A week later the orders are outside the window; with no recent sales
    // at all the rule leaves existing badges untouched.
    let run = ep
        .classify_badges(Some(&[Badge::FastSelling]), now + Duration::days(7))
        .unwrap();
    assert!(run.changes.is_empty());
    assert!(badges_of(&ep, &event).contains(&"fast_selling".to_string()));
}

#[test]
fn test_only_filter_skips_other_rules() {
    let ep = setup();
    let event = add_event(&ep, "Jazz night", "Live jazz downtown");
    interact(&ep, InteractionKind::Like, "alice", &event);

    let run = ep
        .classify_badges(Some(&[Badge::LimitedSeats]), Utc::now())
        .unwrap();
    assert_eq!(run.rules_run, 1);
    // Fresh event with likes, but neither top_rated nor just_announced ran.
    assert!(!badges_of(&ep, &event).contains(&"top_rated".to_string()));
    assert!(!badges_of(&ep, &event).contains(&"just_announced".to_string()));
}

#[test]
fn test_badges_persist_across_reopen() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    {
        let ep = eventpulse::EventPulse::new(&path).unwrap();
        let event = add_event(&ep, "Jazz night", "Live jazz downtown");
        interact(&ep, InteractionKind::Like, "alice", &event);
        ep.classify_badges(Some(&[Badge::TopRated]), Utc::now())
            .unwrap();
    }

    let reopened = eventpulse::EventPulse::new(&path).unwrap();
    let events = reopened.events().unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].badges.contains(&"top_rated".to_string()));
}

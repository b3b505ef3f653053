//! Shared test helpers.
#![allow(dead_code)]

use chrono::{Duration, Utc};
use eventpulse::domain::values::interaction_kind::InteractionKind;
use eventpulse::EventPulse;

pub fn setup() -> EventPulse {
    EventPulse::new(":memory:").unwrap()
}

pub fn add_event(ep: &EventPulse, title: &str, description: &str) -> String {
    ep.add_event(
        title.to_string(),
        description.to_string(),
        None,
        "100".to_string(),
        "0".to_string(),
        None,
    )
    .unwrap()
    .id
}

pub fn add_event_aged(ep: &EventPulse, title: &str, description: &str, days_old: i64) -> String {
    ep.add_event(
        title.to_string(),
        description.to_string(),
        None,
        "100".to_string(),
        "0".to_string(),
        Some(Utc::now() - Duration::days(days_old)),
    )
    .unwrap()
    .id
}

pub fn add_event_with_tickets(
    ep: &EventPulse,
    title: &str,
    maximum_tickets: &str,
    tickets_sold: &str,
) -> String {
    ep.add_event(
        title.to_string(),
        String::new(),
        None,
        maximum_tickets.to_string(),
        tickets_sold.to_string(),
        None,
    )
    .unwrap()
    .id
}

pub fn add_event_in_category(
    ep: &EventPulse,
    title: &str,
    description: &str,
    category: &str,
) -> String {
    ep.add_event(
        title.to_string(),
        description.to_string(),
        Some(category.to_string()),
        "100".to_string(),
        "0".to_string(),
        None,
    )
    .unwrap()
    .id
}

pub fn interact(ep: &EventPulse, kind: InteractionKind, user_id: &str, event_id: &str) {
    ep.record_interaction(kind, user_id, event_id, None, None)
        .unwrap();
}

pub fn interact_days_ago(
    ep: &EventPulse,
    kind: InteractionKind,
    user_id: &str,
    event_id: &str,
    days_ago: i64,
) {
    ep.record_interaction(
        kind,
        user_id,
        event_id,
        None,
        Some(Utc::now() - Duration::days(days_ago)),
    )
    .unwrap();
}

//! Badge rule port for classification passes.
//!
//! Defines the [`BadgeRule`] trait and supporting types. Rules are pure
//! predicates over a prefetched snapshot: each pass builds one
//! [`ClassificationContext`], every rule returns a [`RuleVerdict`], and the
//! classification use case owns the write-back to the badge sets.
//!
//! # Overview
//!
//! - Implement [`BadgeRule`] to add a new classification
//! - Percentile rules rank a counted signal across events; absolute rules
//!   check one event's own fields
//! - A verdict's `universe` bounds the write-back: events outside it neither
//!   gain nor lose the badge that pass

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::entities::event::Event;
use crate::domain::error::DomainError;
use crate::domain::values::badge::Badge;

/// Snapshot provided to rules during a classification pass.
pub struct ClassificationContext {
    /// Every event currently stored.
    pub events: Vec<Event>,
    /// Like totals per event (events with at least one like).
    pub like_counts: HashMap<String, usize>,
    /// Click totals per event (events with at least one click).
    pub click_counts: HashMap<String, usize>,
    /// Order totals per event within the trailing sales window.
    pub recent_order_counts: HashMap<String, usize>,
    /// Length of the trailing window used for `recent_order_counts` and for
    /// the recency rules, in days.
    pub window_days: i64,
    pub now: DateTime<Utc>,
}

/// Outcome of evaluating one rule against the snapshot.
pub struct RuleVerdict {
    /// Event ids the rule considered this pass. The badge is added or
    /// removed only within this set.
    pub universe: Vec<String>,
    /// Event ids that currently satisfy the rule's predicate.
    pub qualifying: HashSet<String>,
}

impl RuleVerdict {
    /// A verdict that touches nothing, used when a rule has no signal to
    /// rank (e.g. no likes anywhere yet).
    pub fn untouched() -> Self {
        Self {
            universe: Vec::new(),
            qualifying: HashSet::new(),
        }
    }
}

pub trait BadgeRule: Send + Sync {
    /// The badge this rule maintains.
    fn badge(&self) -> Badge;

    /// Evaluate the rule against the snapshot.
    fn evaluate(&self, ctx: &ClassificationContext) -> Result<RuleVerdict, DomainError>;
}

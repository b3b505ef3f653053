//! Badge classification pass: runs every registered rule against one
//! snapshot and converges each event's badge set, collecting a change log.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::ports::badge_rule::{BadgeRule, ClassificationContext, RuleVerdict};
use crate::domain::ports::event_store::EventStore;
use crate::domain::ports::interaction_store::InteractionStore;
use crate::domain::values::badge::Badge;

/// Trailing window, in days, for the sales-velocity and recency rules.
const TRAILING_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeAction {
    Added,
    Removed,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeChange {
    pub event_id: String,
    pub badge: Badge,
    pub action: BadgeAction,
}

/// Result of one classification pass. The pass is idempotent: running it
/// again on an unchanged snapshot yields an empty `changes` list.
#[derive(Debug, Serialize)]
pub struct ClassificationRun {
    pub ran_at: DateTime<Utc>,
    pub events_scanned: usize,
    pub rules_run: usize,
    pub rules_failed: usize,
    pub changes: Vec<BadgeChange>,
}

pub struct ClassifyUseCase {
    events: Arc<dyn EventStore>,
    interactions: Arc<dyn InteractionStore>,
    rules: Vec<Box<dyn BadgeRule>>,
}

impl ClassifyUseCase {
    pub fn new(
        events: Arc<dyn EventStore>,
        interactions: Arc<dyn InteractionStore>,
        rules: Vec<Box<dyn BadgeRule>>,
    ) -> Self {
        Self {
            events,
            interactions,
            rules,
        }
    }

    /// Run the rules (all of them, or the subset named by `only`) against
    /// the current snapshot. A failing rule is reported and skipped; it
    /// never aborts the pass for the others.
    pub fn execute(
        &self,
        only: Option<&[Badge]>,
        now: DateTime<Utc>,
    ) -> Result<ClassificationRun, DomainError> {
        let events = self.events.list()?;
        let events_scanned = events.len();
        let since = now - Duration::days(TRAILING_WINDOW_DAYS);

        let ctx = ClassificationContext {
            events,
            like_counts: to_map(self.interactions.like_counts()?),
            click_counts: to_map(self.interactions.click_counts()?),
            recent_order_counts: to_map(self.interactions.order_counts_since(since)?),
            window_days: TRAILING_WINDOW_DAYS,
            now,
        };

        let mut changes = Vec::new();
        let mut rules_run = 0usize;
        let mut rules_failed = 0usize;

        for rule in &self.rules {
            if let Some(only) = only {
                if !only.contains(&rule.badge()) {
                    continue;
                }
            }
            match rule.evaluate(&ctx) {
                Ok(verdict) => {
                    rules_run += 1;
                    self.apply(rule.badge(), &verdict, &mut changes);
                }
                Err(e) => {
                    rules_failed += 1;
                    eprintln!("WARNING: badge rule '{}' failed: {e}", rule.badge());
                }
            }
        }

        Ok(ClassificationRun {
            ran_at: now,
            events_scanned,
            rules_run,
            rules_failed,
            changes,
        })
    }

    /// Converge the badge toward the verdict across its universe. Store
    /// failures for one event are reported and do not stop the sweep.
    fn apply(&self, badge: Badge, verdict: &RuleVerdict, changes: &mut Vec<BadgeChange>) {
        for event_id in &verdict.universe {
            let result = if verdict.qualifying.contains(event_id) {
                self.events
                    .add_badge(event_id, &badge)
                    .map(|changed| (changed, BadgeAction::Added))
            } else {
                self.events
                    .remove_badge(event_id, &badge)
                    .map(|changed| (changed, BadgeAction::Removed))
            };
            match result {
                Ok((true, action)) => changes.push(BadgeChange {
                    event_id: event_id.clone(),
                    badge,
                    action,
                }),
                Ok((false, _)) => {}
                Err(e) => {
                    eprintln!("WARNING: badge '{badge}' update failed for event {event_id}: {e}");
                }
            }
        }
    }
}

fn to_map(counts: Vec<(String, usize)>) -> HashMap<String, usize> {
    counts.into_iter().collect()
}

//! `just_announced`: events created within the trailing window.

use std::collections::HashSet;

use chrono::Duration;

use crate::domain::error::DomainError;
use crate::domain::ports::badge_rule::{BadgeRule, ClassificationContext, RuleVerdict};
use crate::domain::values::badge::Badge;

pub struct JustAnnouncedRule;

impl BadgeRule for JustAnnouncedRule {
    fn badge(&self) -> Badge {
        Badge::JustAnnounced
    }

    fn evaluate(&self, ctx: &ClassificationContext) -> Result<RuleVerdict, DomainError> {
        let threshold = ctx.now - Duration::days(ctx.window_days);

        let qualifying: HashSet<String> = ctx
            .events
            .iter()
            .filter(|e| e.created_at >= threshold)
            .map(|e| e.id.clone())
            .collect();

        Ok(RuleVerdict {
            universe: ctx.events.iter().map(|e| e.id.clone()).collect(),
            qualifying,
        })
    }
}

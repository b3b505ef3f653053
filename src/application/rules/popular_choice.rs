//! `popular_choice`: the top 10% most clicked events.

use super::top_share;
use crate::domain::error::DomainError;
use crate::domain::ports::badge_rule::{BadgeRule, ClassificationContext, RuleVerdict};
use crate::domain::values::badge::Badge;

pub struct PopularChoiceRule;

impl BadgeRule for PopularChoiceRule {
    fn badge(&self) -> Badge {
        Badge::PopularChoice
    }

    fn evaluate(&self, ctx: &ClassificationContext) -> Result<RuleVerdict, DomainError> {
        if ctx.click_counts.is_empty() {
            return Ok(RuleVerdict::untouched());
        }

        let scored: Vec<(String, f64)> = ctx
            .click_counts
            .iter()
            .map(|(id, count)| (id.clone(), *count as f64))
            .collect();
        let population = scored.len();

        Ok(RuleVerdict {
            universe: ctx.events.iter().map(|e| e.id.clone()).collect(),
            qualifying: top_share(scored, population),
        })
    }
}

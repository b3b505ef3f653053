//! `top_rated`: the top 10% most liked events.

use super::top_share;
use crate::domain::error::DomainError;
use crate::domain::ports::badge_rule::{BadgeRule, ClassificationContext, RuleVerdict};
use crate::domain::values::badge::Badge;

pub struct TopRatedRule;

impl BadgeRule for TopRatedRule {
    fn badge(&self) -> Badge {
        Badge::TopRated
    }

    fn evaluate(&self, ctx: &ClassificationContext) -> Result<RuleVerdict, DomainError> {
        if ctx.like_counts.is_empty() {
            // Nothing liked anywhere yet; leave every badge as-is.
            return Ok(RuleVerdict::untouched());
        }

        let scored: Vec<(String, f64)> = ctx
            .like_counts
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

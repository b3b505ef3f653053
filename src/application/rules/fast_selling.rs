//! `fast_selling`: the top 10% of events by sales percentage over the
//! trailing window.
//!
//! The ranking covers only events with at least one recent order and a
//! positive, parseable `maximum_tickets`; events outside that universe keep
//! whatever badge state they had. The decile cutoff is derived from the
//! number of events with any recent sales, before ticket validation.

use std::collections::HashMap;

use super::top_share;
use crate::domain::entities::event::Event;
use crate::domain::error::DomainError;
use crate::domain::ports::badge_rule::{BadgeRule, ClassificationContext, RuleVerdict};
use crate::domain::values::badge::Badge;

pub struct FastSellingRule;

impl BadgeRule for FastSellingRule {
    fn badge(&self) -> Badge {
        Badge::FastSelling
    }

    fn evaluate(&self, ctx: &ClassificationContext) -> Result<RuleVerdict, DomainError> {
        if ctx.recent_order_counts.is_empty() {
            // No recent ticket sales anywhere.
            return Ok(RuleVerdict::untouched());
        }

        let population = ctx.recent_order_counts.len();
        let events_by_id: HashMap<&str, &Event> =
            ctx.events.iter().map(|e| (e.id.as_str(), e)).collect();

        let mut scored = Vec::new();
        for (event_id, tickets_sold) in &ctx.recent_order_counts {
            let max_tickets = events_by_id
                .get(event_id.as_str())
                .and_then(|e| e.maximum_tickets());
            match max_tickets {
                Some(max_tickets) if max_tickets > 0 => {
                    let sales_percentage = *tickets_sold as f64 / max_tickets as f64 * 100.0;
                    scored.push((event_id.clone(), sales_percentage));
                }
                _ => continue, // vanished event or invalid ticket data
            }
        }

        let universe: Vec<String> = scored.iter().map(|(id, _)| id.clone()).collect();

        Ok(RuleVerdict {
            universe,
            qualifying: top_share(scored, population),
        })
    }
}

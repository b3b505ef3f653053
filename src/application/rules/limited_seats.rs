//! `limited_seats`: events with 10% or fewer seats remaining.
//!
//! Events whose ticket fields do not parse as integers are skipped
//! entirely: they are neither ranked nor eligible for add/remove this pass.

use std::collections::HashSet;

use crate::domain::error::DomainError;
use crate::domain::ports::badge_rule::{BadgeRule, ClassificationContext, RuleVerdict};
use crate::domain::values::badge::Badge;

const REMAINING_PERCENTAGE_THRESHOLD: f64 = 10.0;

pub struct LimitedSeatsRule;

impl BadgeRule for LimitedSeatsRule {
    fn badge(&self) -> Badge {
        Badge::LimitedSeats
    }

    fn evaluate(&self, ctx: &ClassificationContext) -> Result<RuleVerdict, DomainError> {
        let mut universe = Vec::new();
        let mut qualifying = HashSet::new();

        for event in &ctx.events {
            let (max_tickets, sold) = match (event.maximum_tickets(), event.tickets_sold()) {
                (Some(max_tickets), Some(sold)) => (max_tickets, sold),
                _ => continue, // invalid ticket data
            };

            // Zero capacity counts as fully available rather than sold out.
            let remaining_percentage = if max_tickets > 0 {
                (max_tickets - sold) as f64 / max_tickets as f64 * 100.0
            } else {
                100.0
            };

            universe.push(event.id.clone());
            if remaining_percentage <= REMAINING_PERCENTAGE_THRESHOLD {
                qualifying.insert(event.id.clone());
            }
        }

        Ok(RuleVerdict {
            universe,
            qualifying,
        })
    }
}

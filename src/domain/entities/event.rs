use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::badge::Badge;

/// A recommendable, classifiable event. `badges` is the only field the
/// engine mutates; everything else arrives from the outside world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Optional reference to a [`Category`](super::category::Category).
    pub category: Option<String>,
    /// Capacity fields are carried as strings because upstream documents
    /// store them that way; parse with [`Event::maximum_tickets`] and
    /// [`Event::tickets_sold`].
    pub maximum_tickets: String,
    pub tickets_sold_count: String,
    /// Badge names currently attached. Duplicate-free; order is irrelevant.
    pub badges: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        title: String,
        description: String,
        category: Option<String>,
        maximum_tickets: String,
        tickets_sold_count: String,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            category,
            maximum_tickets,
            tickets_sold_count,
            badges: Vec::new(),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Text representation for content vectorization.
    pub fn content_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Maximum ticket count, or `None` when the field is not an integer.
    pub fn maximum_tickets(&self) -> Option<i64> {
        self.maximum_tickets.trim().parse().ok()
    }

    /// Tickets sold so far, or `None` when the field is not an integer.
    pub fn tickets_sold(&self) -> Option<i64> {
        self.tickets_sold_count.trim().parse().ok()
    }

    pub fn has_badge(&self, badge: &Badge) -> bool {
        let name = badge.to_string();
        self.badges.iter().any(|b| *b == name)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ticket purchase. Each order counts one ticket; repeat orders by the
/// same buyer are all kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub event_id: String,
    pub buyer_id: String,
    /// Amount as the upstream payment provider reported it (numeric string).
    pub amount: String,
    /// Unique payment transaction id.
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        event_id: String,
        buyer_id: String,
        amount: String,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_id,
            buyer_id,
            amount,
            transaction_id: format!("cs_{}", uuid::Uuid::new_v4().simple()),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub event_id: String,
    pub liker_id: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(event_id: String, liker_id: String, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_id,
            liker_id,
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Click {
    pub id: String,
    pub event_id: String,
    pub clicker_id: String,
    pub created_at: DateTime<Utc>,
}

impl Click {
    pub fn new(event_id: String, clicker_id: String, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_id,
            clicker_id,
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }
}

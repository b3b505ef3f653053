use chrono::{DateTime, Utc};

use crate::domain::entities::interaction::{Click, Like, Order};
use crate::domain::error::DomainError;

/// Read access to the three interaction record sets. Interactions are
/// append-only; the engine itself only reads, the `add_*` methods exist for
/// the ingestion surface that feeds records in.
pub trait InteractionStore: Send + Sync {
    fn add_order(&self, order: &Order) -> Result<(), DomainError>;
    fn add_like(&self, like: &Like) -> Result<(), DomainError>;
    fn add_click(&self, click: &Click) -> Result<(), DomainError>;

    fn orders_by_buyer(&self, buyer_id: &str) -> Result<Vec<Order>, DomainError>;
    fn likes_by_liker(&self, liker_id: &str) -> Result<Vec<Like>, DomainError>;
    fn clicks_by_clicker(&self, clicker_id: &str) -> Result<Vec<Click>, DomainError>;

    fn likes_for_event(&self, event_id: &str) -> Result<Vec<Like>, DomainError>;
    fn clicks_for_event(&self, event_id: &str) -> Result<Vec<Click>, DomainError>;

    /// Like totals grouped by event, for events with at least one like.
    fn like_counts(&self) -> Result<Vec<(String, usize)>, DomainError>;
    /// Click totals grouped by event, for events with at least one click.
    fn click_counts(&self) -> Result<Vec<(String, usize)>, DomainError>;
    /// Order totals grouped by event, restricted to orders at or after
    /// `since`. One order counts one ticket.
    fn order_counts_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(String, usize)>, DomainError>;
}

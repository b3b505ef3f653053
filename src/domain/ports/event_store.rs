use crate::domain::entities::category::Category;
use crate::domain::entities::event::Event;
use crate::domain::error::DomainError;
use crate::domain::values::badge::Badge;

/// Read access to the event and category record sets, plus the single
/// write capability the engine has: conditional badge-set updates.
pub trait EventStore: Send + Sync {
    fn add(&self, event: &Event) -> Result<(), DomainError>;
    fn list(&self) -> Result<Vec<Event>, DomainError>;
    fn get_by_id(&self, id: &str) -> Result<Option<Event>, DomainError>;

    /// Add `badge` to the event's badge set if absent. Returns whether the
    /// set changed. An unknown event id yields `Ok(false)` so classification
    /// passes can skip entities that vanished mid-pass.
    fn add_badge(&self, event_id: &str, badge: &Badge) -> Result<bool, DomainError>;

    /// Remove `badge` from the event's badge set if present. Same return
    /// contract as [`EventStore::add_badge`].
    fn remove_badge(&self, event_id: &str, badge: &Badge) -> Result<bool, DomainError>;

    fn add_category(&self, category: &Category) -> Result<(), DomainError>;
    fn list_categories(&self) -> Result<Vec<Category>, DomainError>;
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::ports::interaction_store::InteractionStore;
use crate::domain::values::weights::InteractionWeights;

/// Aggregates an actor's interaction history into a weighted score per
/// event: `weight(kind) × count(actor, event, kind)` summed over the three
/// kinds. Repeat interactions all count.
pub struct AggregateUseCase {
    interactions: Arc<dyn InteractionStore>,
}

impl AggregateUseCase {
    pub fn new(interactions: Arc<dyn InteractionStore>) -> Self {
        Self { interactions }
    }

    /// An actor with no interactions yields an empty map, a valid state,
    /// not an error.
    pub fn execute(
        &self,
        actor_id: &str,
        weights: &InteractionWeights,
    ) -> Result<HashMap<String, f64>, DomainError> {
        let mut event_weights: HashMap<String, f64> = HashMap::new();

        for order in self.interactions.orders_by_buyer(actor_id)? {
            *event_weights.entry(order.event_id).or_default() += weights.order;
        }
        for like in self.interactions.likes_by_liker(actor_id)? {
            *event_weights.entry(like.event_id).or_default() += weights.like;
        }
        for click in self.interactions.clicks_by_clicker(actor_id)? {
            *event_weights.entry(click.event_id).or_default() += weights.click;
        }

        Ok(event_weights)
    }
}

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::application::aggregate::AggregateUseCase;
use crate::application::vectorize::{cosine_similarity, VectorSpace};
use crate::domain::entities::event::Event;
use crate::domain::error::DomainError;
use crate::domain::ports::event_store::EventStore;
use crate::domain::ports::interaction_store::InteractionStore;
use crate::domain::values::weights::InteractionWeights;

/// How many of the actor's strongest categories the category restriction
/// keeps as candidates.
const PREFERRED_CATEGORY_COUNT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    pub top_n: usize,
    /// Restrict candidates to the actor's strongest categories by summed
    /// interaction weight. Off by default.
    pub preferred_categories_only: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            preferred_categories_only: false,
        }
    }
}

/// Content-based recommendation: the actor's weighted interaction history
/// becomes a profile vector in the corpus tf-idf space, and non-interacted
/// events are ranked by cosine similarity to it.
pub struct RecommendUseCase {
    events: Arc<dyn EventStore>,
    aggregator: AggregateUseCase,
}

impl RecommendUseCase {
    pub fn new(events: Arc<dyn EventStore>, interactions: Arc<dyn InteractionStore>) -> Self {
        Self {
            events,
            aggregator: AggregateUseCase::new(interactions),
        }
    }

    /// Returns up to `top_n` event ids, best match first. Every empty-input
    /// case (no interactions, no events, zero-weight profile, no candidates)
    /// resolves to an empty list, never an error.
    pub fn execute(
        &self,
        actor_id: &str,
        weights: &InteractionWeights,
        options: RecommendOptions,
    ) -> Result<Vec<String>, DomainError> {
        let event_weights = self.aggregator.execute(actor_id, weights)?;
        if event_weights.is_empty() {
            return Ok(Vec::new());
        }

        let events = self.events.list()?;
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let space = VectorSpace::build(&events);
        let profile = match build_profile(&space, &event_weights) {
            Some(profile) => profile,
            None => return Ok(Vec::new()),
        };

        let mut candidates: Vec<&str> = space
            .event_ids()
            .iter()
            .filter(|id| !event_weights.contains_key(*id))
            .map(|id| id.as_str())
            .collect();

        if options.preferred_categories_only {
            let preferred = preferred_categories(&events, &event_weights);
            let by_id: HashMap<&str, &Event> =
                events.iter().map(|e| (e.id.as_str(), e)).collect();
            candidates.retain(|id| {
                by_id
                    .get(id)
                    .and_then(|e| e.category.as_deref())
                    .map(|c| preferred.contains(c))
                    .unwrap_or(false)
            });
        }

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(String, f64)> = candidates
            .into_iter()
            .filter_map(|id| {
                space
                    .vector(id)
                    .map(|v| (id.to_string(), cosine_similarity(v, &profile)))
            })
            .collect();

        // Descending similarity; ties broken by event id for determinism.
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        Ok(scored
            .into_iter()
            .take(options.top_n)
            .map(|(id, _)| id)
            .collect())
    }
}

/// Weighted centroid of the interacted events' vectors. `None` when no
/// interacted event is in the space or the weight sum is zero; both mean
/// there is no profile to rank against.
fn build_profile(space: &VectorSpace, event_weights: &HashMap<String, f64>) -> Option<Vec<f64>> {
    let mut profile = vec![0.0_f64; space.dimension()];
    let mut total_weight = 0.0_f64;

    for (event_id, weight) in event_weights {
        if let Some(vector) = space.vector(event_id) {
            for (i, value) in vector.iter().enumerate() {
                profile[i] += weight * value;
            }
            total_weight += weight;
        }
    }

    if total_weight == 0.0 {
        return None;
    }
    for value in profile.iter_mut() {
        *value /= total_weight;
    }
    Some(profile)
}

/// The actor's strongest categories by summed interaction weight, used by
/// the opt-in candidate restriction.
fn preferred_categories(
    events: &[Event],
    event_weights: &HashMap<String, f64>,
) -> HashSet<String> {
    let mut category_weights: HashMap<String, f64> = HashMap::new();
    for event in events {
        if let (Some(weight), Some(category)) =
            (event_weights.get(&event.id), event.category.as_ref())
        {
            *category_weights.entry(category.clone()).or_default() += weight;
        }
    }

    let mut ranked: Vec<(String, f64)> = category_weights.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    ranked
        .into_iter()
        .take(PREFERRED_CATEGORY_COUNT)
        .map(|(category, _)| category)
        .collect()
}

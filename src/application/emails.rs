//! Email recommendation batch: prepares one personalized payload per user
//! with their top recommended events. Delivery belongs to an external
//! mailer; this only builds the JSON-ready content.

use std::sync::Arc;

use serde::Serialize;

use crate::application::recommend::{RecommendOptions, RecommendUseCase};
use crate::domain::error::DomainError;
use crate::domain::ports::event_store::EventStore;
use crate::domain::ports::user_store::UserStore;
use crate::domain::values::weights::InteractionWeights;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedEvent {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationEmail {
    pub first_name: String,
    pub last_name: String,
    pub user_email: String,
    pub recommended_events: Vec<RecommendedEvent>,
}

pub struct EmailsUseCase {
    users: Arc<dyn UserStore>,
    events: Arc<dyn EventStore>,
    recommender: RecommendUseCase,
    event_base_url: String,
}

impl EmailsUseCase {
    pub fn new(
        users: Arc<dyn UserStore>,
        events: Arc<dyn EventStore>,
        recommender: RecommendUseCase,
        event_base_url: String,
    ) -> Self {
        Self {
            users,
            events,
            recommender,
            event_base_url,
        }
    }

    /// One payload per user with at least one recommendation; users with an
    /// empty recommendation list are skipped.
    pub fn execute(&self, top_n: usize) -> Result<Vec<RecommendationEmail>, DomainError> {
        let weights = InteractionWeights::default();
        let options = RecommendOptions {
            top_n,
            preferred_categories_only: false,
        };

        let mut emails = Vec::new();
        for user in self.users.list()? {
            let recommended_ids = self.recommender.execute(&user.id, &weights, options)?;

            let mut recommended_events = Vec::new();
            for event_id in recommended_ids {
                if let Some(event) = self.events.get_by_id(&event_id)? {
                    recommended_events.push(RecommendedEvent {
                        title: event.title,
                        link: format!("{}/{}", self.event_base_url, event_id),
                    });
                }
            }

            if recommended_events.is_empty() {
                continue;
            }
            emails.push(RecommendationEmail {
                first_name: user.first_name,
                last_name: user.last_name,
                user_email: user.email,
                recommended_events,
            });
        }

        Ok(emails)
    }
}

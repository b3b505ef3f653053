pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::aggregate::AggregateUseCase;
use crate::application::classify::{ClassificationRun, ClassifyUseCase};
use crate::application::emails::{EmailsUseCase, RecommendationEmail};
use crate::application::insights::{EngagementReport, InsightsUseCase};
use crate::application::recommend::{RecommendOptions, RecommendUseCase};
use crate::application::rules::default_rules;
use crate::domain::entities::category::Category;
use crate::domain::entities::event::Event;
use crate::domain::entities::interaction::{Click, Like, Order};
use crate::domain::entities::user::User;
use crate::domain::error::DomainError;
use crate::domain::ports::event_store::EventStore;
use crate::domain::ports::interaction_store::InteractionStore;
use crate::domain::ports::user_store::UserStore;
use crate::domain::values::badge::Badge;
use crate::domain::values::interaction_kind::InteractionKind;
use crate::domain::values::weights::InteractionWeights;
use crate::infrastructure::sqlite::event_store::SqliteEventStore;
use crate::infrastructure::sqlite::interaction_store::SqliteInteractionStore;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::user_store::SqliteUserStore;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::Arc;

fn open_connection(db_path: &str) -> Result<Connection, DomainError> {
    let conn =
        Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    run_migrations(&conn)?;
    Ok(conn)
}

pub struct EventPulse {
    aggregate_uc: AggregateUseCase,
    recommend_uc: RecommendUseCase,
    classify_uc: ClassifyUseCase,
    insights_uc: InsightsUseCase,
    emails_uc: EmailsUseCase,
    event_store: Arc<dyn EventStore>,
    interaction_store: Arc<dyn InteractionStore>,
    user_store: Arc<dyn UserStore>,
}

impl EventPulse {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        // One connection per store; the stores touch disjoint tables, so
        // migrations run on each connection (also makes `:memory:` paths,
        // where every connection is its own database, self-contained).
        let event_conn = open_connection(db_path)?;
        let interaction_conn = open_connection(db_path)?;
        let user_conn = open_connection(db_path)?;

        let event_store: Arc<dyn EventStore> = Arc::new(SqliteEventStore::new(event_conn));
        let interaction_store: Arc<dyn InteractionStore> =
            Arc::new(SqliteInteractionStore::new(interaction_conn));
        let user_store: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(user_conn));

        Ok(Self::with_stores(event_store, interaction_store, user_store))
    }

    /// Wire the engine over externally supplied stores, the seam the
    /// surrounding service layer (and the test suite) injects through.
    pub fn with_stores(
        event_store: Arc<dyn EventStore>,
        interaction_store: Arc<dyn InteractionStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        let event_base_url = std::env::var("EVENTPULSE_EVENT_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/events".into());

        Self {
            aggregate_uc: AggregateUseCase::new(interaction_store.clone()),
            recommend_uc: RecommendUseCase::new(event_store.clone(), interaction_store.clone()),
            classify_uc: ClassifyUseCase::new(
                event_store.clone(),
                interaction_store.clone(),
                default_rules(),
            ),
            insights_uc: InsightsUseCase::new(event_store.clone(), interaction_store.clone()),
            emails_uc: EmailsUseCase::new(
                user_store.clone(),
                event_store.clone(),
                RecommendUseCase::new(event_store.clone(), interaction_store.clone()),
                event_base_url,
            ),
            event_store,
            interaction_store,
            user_store,
        }
    }

    // ── Ingestion (collaborator surface; the engine itself only reads) ──

    #[allow(clippy::too_many_arguments)]
    pub fn add_event(
        &self,
        title: String,
        description: String,
        category: Option<String>,
        maximum_tickets: String,
        tickets_sold_count: String,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Event, DomainError> {
        let event = Event::new(
            title,
            description,
            category,
            maximum_tickets,
            tickets_sold_count,
            created_at,
        );
        self.event_store.add(&event)?;
        Ok(event)
    }

    pub fn add_category(&self, name: String) -> Result<Category, DomainError> {
        let category = Category::new(name);
        self.event_store.add_category(&category)?;
        Ok(category)
    }

    pub fn add_user(
        &self,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Result<User, DomainError> {
        let user = User::new(first_name, last_name, email);
        self.user_store.add(&user)?;
        Ok(user)
    }

    /// Record one interaction. `amount` only applies to orders; `created_at`
    /// defaults to now and exists because upstream records arrive with their
    /// own timestamps. Returns the new interaction's id.
    pub fn record_interaction(
        &self,
        kind: InteractionKind,
        actor_id: &str,
        event_id: &str,
        amount: Option<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<String, DomainError> {
        if self.event_store.get_by_id(event_id)?.is_none() {
            return Err(DomainError::NotFound(format!("Event {event_id} not found")));
        }
        match kind {
            InteractionKind::Order => {
                let order = Order::new(
                    event_id.to_string(),
                    actor_id.to_string(),
                    amount.unwrap_or_else(|| "0".to_string()),
                    created_at,
                );
                self.interaction_store.add_order(&order)?;
                Ok(order.id)
            }
            InteractionKind::Like => {
                let like = Like::new(event_id.to_string(), actor_id.to_string(), created_at);
                self.interaction_store.add_like(&like)?;
                Ok(like.id)
            }
            InteractionKind::Click => {
                let click = Click::new(event_id.to_string(), actor_id.to_string(), created_at);
                self.interaction_store.add_click(&click)?;
                Ok(click.id)
            }
        }
    }

    pub fn events(&self) -> Result<Vec<Event>, DomainError> {
        self.event_store.list()
    }

    pub fn categories(&self) -> Result<Vec<Category>, DomainError> {
        self.event_store.list_categories()
    }

    // ── Core operations ──

    pub fn aggregate_weights(
        &self,
        actor_id: &str,
        weights: &InteractionWeights,
    ) -> Result<HashMap<String, f64>, DomainError> {
        self.aggregate_uc.execute(actor_id, weights)
    }

    pub fn recommend(
        &self,
        actor_id: &str,
        weights: &InteractionWeights,
        options: RecommendOptions,
    ) -> Result<Vec<String>, DomainError> {
        self.recommend_uc.execute(actor_id, weights, options)
    }

    pub fn classify_badges(
        &self,
        only: Option<&[Badge]>,
        now: DateTime<Utc>,
    ) -> Result<ClassificationRun, DomainError> {
        self.classify_uc.execute(only, now)
    }

    pub fn insights(
        &self,
        event_id: &str,
        kind: InteractionKind,
        now: DateTime<Utc>,
    ) -> Result<EngagementReport, DomainError> {
        self.insights_uc.execute(event_id, kind, now)
    }

    pub fn email_recommendations(
        &self,
        top_n: usize,
    ) -> Result<Vec<RecommendationEmail>, DomainError> {
        self.emails_uc.execute(top_n)
    }
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eventpulse",
    about = "Event recommendations, badges and engagement insights"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an event
    AddEvent {
        /// JSON data with title, description, category, maximum_tickets,
        /// tickets_sold_count, created_at
        json: String,
    },
    /// Add a category
    AddCategory {
        name: String,
    },
    /// Add a user
    AddUser {
        /// JSON data with first_name, last_name, email
        json: String,
    },
    /// Record an interaction between a user and an event
    Interact {
        /// Interaction kind (order, like, click)
        kind: String,
        user_id: String,
        event_id: String,
        /// Order amount (orders only)
        #[arg(long)]
        amount: Option<String>,
        /// Interaction timestamp (ISO-8601, defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// List all events
    Events,
    /// List all categories
    Categories,
    /// Show an actor's aggregated interaction weights per event
    Weights {
        user_id: String,
        #[arg(long, default_value = "0.6")]
        order_weight: f64,
        #[arg(long, default_value = "0.3")]
        like_weight: f64,
        #[arg(long, default_value = "0.1")]
        click_weight: f64,
    },
    /// Recommend events for a user
    Recommend {
        user_id: String,
        #[arg(long, default_value = "10")]
        top: usize,
        /// Restrict candidates to the user's strongest categories
        #[arg(long)]
        preferred_categories: bool,
        #[arg(long, default_value = "0.6")]
        order_weight: f64,
        #[arg(long, default_value = "0.3")]
        like_weight: f64,
        #[arg(long, default_value = "0.1")]
        click_weight: f64,
    },
    /// Run a badge classification pass and print the change log
    Classify {
        /// Restrict the pass to these badges (top_rated, popular_choice,
        /// fast_selling, just_announced, limited_seats); repeatable
        #[arg(long)]
        only: Vec<String>,
    },
    /// Show engagement insights for one event
    Insights {
        event_id: String,
        /// Interaction kind to report on (like, click)
        #[arg(long, default_value = "like")]
        kind: String,
    },
    /// Prepare personalized recommendation emails for all users
    Emails {
        #[arg(long, default_value = "5")]
        top: usize,
    },
}

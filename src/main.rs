use clap::Parser;
use eventpulse::application::recommend::RecommendOptions;
use eventpulse::cli::commands::{Cli, Commands};
use eventpulse::domain::values::badge::Badge;
use eventpulse::domain::values::interaction_kind::InteractionKind;
use eventpulse::domain::values::weights::InteractionWeights;
use eventpulse::EventPulse;
use std::collections::BTreeMap;

fn main() {
    let cli = Cli::parse();
    let db_path = std::env::var("EVENTPULSE_DB").unwrap_or_else(|_| "./eventpulse.db".into());

    let ep = match EventPulse::new(&db_path) {
        Ok(ep) => ep,
        Err(e) => {
            eprintln!("Error initializing EventPulse: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(ep, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(ep: EventPulse, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::AddEvent { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;

            let title = data["title"]
                .as_str()
                .ok_or("Missing required field: title")?
                .to_string();
            let description = data["description"].as_str().unwrap_or_default().to_string();
            let category = data["category"].as_str().map(String::from);
            let maximum_tickets =
                string_or_number(&data["maximum_tickets"]).unwrap_or_else(|| "0".to_string());
            let tickets_sold_count =
                string_or_number(&data["tickets_sold_count"]).unwrap_or_else(|| "0".to_string());
            let created_at = parse_date(&data["created_at"].as_str().map(String::from))?;

            let event = ep.add_event(
                title,
                description,
                category,
                maximum_tickets,
                tickets_sold_count,
                created_at,
            )?;
            println!("{}", serde_json::to_string_pretty(&event).unwrap());
        }
        Commands::AddCategory { name } => {
            let category = ep.add_category(name)?;
            println!("{}", serde_json::to_string_pretty(&category).unwrap());
        }
        Commands::AddUser { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let first_name = data["first_name"]
                .as_str()
                .ok_or("Missing required field: first_name")?
                .to_string();
            let last_name = data["last_name"].as_str().unwrap_or_default().to_string();
            let email = data["email"]
                .as_str()
                .ok_or("Missing required field: email")?
                .to_string();

            let user = ep.add_user(first_name, last_name, email)?;
            println!("{}", serde_json::to_string_pretty(&user).unwrap());
        }
        Commands::Interact {
            kind,
            user_id,
            event_id,
            amount,
            at,
        } => {
            let kind: InteractionKind = kind.parse().map_err(|e: String| e)?;
            let created_at = parse_date(&at)?;
            let id = ep.record_interaction(kind, &user_id, &event_id, amount, created_at)?;
            println!("Recorded {kind} {id} for event {event_id}");
        }
        Commands::Events => {
            let events = ep.events()?;
            println!("{}", serde_json::to_string_pretty(&events).unwrap());
        }
        Commands::Categories => {
            let categories = ep.categories()?;
            println!("{}", serde_json::to_string_pretty(&categories).unwrap());
        }
        Commands::Weights {
            user_id,
            order_weight,
            like_weight,
            click_weight,
        } => {
            let weights = InteractionWeights {
                order: order_weight,
                like: like_weight,
                click: click_weight,
            };
            let map = ep.aggregate_weights(&user_id, &weights)?;
            let sorted: BTreeMap<String, f64> = map.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&sorted).unwrap());
        }
        Commands::Recommend {
            user_id,
            top,
            preferred_categories,
            order_weight,
            like_weight,
            click_weight,
        } => {
            let weights = InteractionWeights {
                order: order_weight,
                like: like_weight,
                click: click_weight,
            };
            let options = RecommendOptions {
                top_n: top,
                preferred_categories_only: preferred_categories,
            };
            let ids = ep.recommend(&user_id, &weights, options)?;
            println!("{}", serde_json::to_string_pretty(&ids).unwrap());
        }
        Commands::Classify { only } => {
            let badges = only
                .iter()
                .map(|b| b.parse())
                .collect::<Result<Vec<Badge>, String>>()?;
            let only = if badges.is_empty() {
                None
            } else {
                Some(badges.as_slice())
            };
            let run = ep.classify_badges(only, chrono::Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&run).unwrap());
        }
        Commands::Insights { event_id, kind } => {
            let kind: InteractionKind = kind.parse().map_err(|e: String| e)?;
            let report = ep.insights(&event_id, kind, chrono::Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        Commands::Emails { top } => {
            let emails = ep.email_recommendations(top)?;
            println!("{}", serde_json::to_string_pretty(&emails).unwrap());
        }
    }
    Ok(())
}

fn string_or_number(value: &serde_json::Value) -> Option<String> {
    value
        .as_str()
        .map(String::from)
        .or_else(|| value.as_i64().map(|n| n.to_string()))
}

fn parse_date(
    s: &Option<String>,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, String> {
    match s {
        None => Ok(None),
        Some(s) => {
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
                return Ok(Some(dt.with_timezone(&chrono::Utc)));
            }
            if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                let dt = date.and_hms_opt(0, 0, 0).unwrap();
                return Ok(Some(chrono::DateTime::from_naive_utc_and_offset(
                    dt,
                    chrono::Utc,
                )));
            }
            Err(format!(
                "Invalid date format: {s}. Use YYYY-MM-DD or RFC3339"
            ))
        }
    }
}

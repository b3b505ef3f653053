use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;

use crate::domain::entities::category::Category;
use crate::domain::entities::event::Event;
use crate::domain::error::DomainError;
use crate::domain::ports::event_store::EventStore;
use crate::domain::values::badge::Badge;

const SELECT_COLS: &str =
    "id, title, description, category, maximum_tickets, tickets_sold_count, badges, created_at";

pub struct SqliteEventStore {
    conn: Mutex<Connection>,
}

impl SqliteEventStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_event(row: &rusqlite::Row) -> Result<Event, rusqlite::Error> {
        let badges_str: String = row.get(6)?;
        let created_str: String = row.get(7)?;

        Ok(Event {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            maximum_tickets: row.get(4)?,
            tickets_sold_count: row.get(5)?,
            badges: serde_json::from_str(&badges_str).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }

    /// Read-modify-write of one event's badge set under the connection
    /// lock. `mutate` returns whether it changed the set; unchanged sets
    /// are not written back. A missing event yields `Ok(false)`.
    fn update_badges<F>(&self, event_id: &str, mutate: F) -> Result<bool, DomainError>
    where
        F: FnOnce(&mut Vec<String>) -> bool,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT badges FROM events WHERE id = ?1")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![event_id], |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let badges_str = match rows.next() {
            Some(Ok(s)) => s,
            _ => return Ok(false), // event vanished mid-pass
        };
        drop(rows);
        drop(stmt);

        let mut badges: Vec<String> = serde_json::from_str(&badges_str).unwrap_or_default();
        if !mutate(&mut badges) {
            return Ok(false);
        }

        conn.execute(
            "UPDATE events SET badges = ?1 WHERE id = ?2",
            params![
                serde_json::to_string(&badges).unwrap_or_else(|_| "[]".to_string()),
                event_id
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to update badges: {e}")))?;
        Ok(true)
    }
}

impl EventStore for SqliteEventStore {
    fn add(&self, event: &Event) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO events (id, title, description, category, maximum_tickets, tickets_sold_count, badges, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                event.id,
                event.title,
                event.description,
                event.category,
                event.maximum_tickets,
                event.tickets_sold_count,
                serde_json::to_string(&event.badges).unwrap_or_default(),
                event.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add event: {e}")))?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Event>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!("SELECT {} FROM events ORDER BY created_at DESC", SELECT_COLS);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let events = stmt
            .query_map([], Self::row_to_event)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(events)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Event>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!("SELECT {} FROM events WHERE id = ?1", SELECT_COLS);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_event)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn add_badge(&self, event_id: &str, badge: &Badge) -> Result<bool, DomainError> {
        let name = badge.to_string();
        self.update_badges(event_id, |badges| {
            if badges.contains(&name) {
                false
            } else {
                badges.push(name);
                true
            }
        })
    }

    fn remove_badge(&self, event_id: &str, badge: &Badge) -> Result<bool, DomainError> {
        let name = badge.to_string();
        self.update_badges(event_id, |badges| {
            let before = badges.len();
            badges.retain(|b| *b != name);
            badges.len() != before
        })
    }

    fn add_category(&self, category: &Category) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO categories (id, name) VALUES (?1, ?2)",
            params![category.id, category.name],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add category: {e}")))?;
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, name FROM categories ORDER BY name")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(categories)
    }
}

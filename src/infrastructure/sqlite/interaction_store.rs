use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

use crate::domain::entities::interaction::{Click, Like, Order};
use crate::domain::error::DomainError;
use crate::domain::ports::interaction_store::InteractionStore;

pub struct SqliteInteractionStore {
    conn: Mutex<Connection>,
}

impl SqliteInteractionStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn parse_timestamp(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now())
    }

    fn row_to_order(row: &rusqlite::Row) -> Result<Order, rusqlite::Error> {
        let created_str: String = row.get(5)?;
        Ok(Order {
            id: row.get(0)?,
            event_id: row.get(1)?,
            buyer_id: row.get(2)?,
            amount: row.get(3)?,
            transaction_id: row.get(4)?,
            created_at: Self::parse_timestamp(&created_str),
        })
    }

    fn row_to_like(row: &rusqlite::Row) -> Result<Like, rusqlite::Error> {
        let created_str: String = row.get(3)?;
        Ok(Like {
            id: row.get(0)?,
            event_id: row.get(1)?,
            liker_id: row.get(2)?,
            created_at: Self::parse_timestamp(&created_str),
        })
    }

    fn row_to_click(row: &rusqlite::Row) -> Result<Click, rusqlite::Error> {
        let created_str: String = row.get(3)?;
        Ok(Click {
            id: row.get(0)?,
            event_id: row.get(1)?,
            clicker_id: row.get(2)?,
            created_at: Self::parse_timestamp(&created_str),
        })
    }

    fn grouped_counts(&self, sql: &str) -> Result<Vec<(String, usize)>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let counts = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, usize>(1)?))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(counts)
    }
}

impl InteractionStore for SqliteInteractionStore {
    fn add_order(&self, order: &Order) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO orders (id, event_id, buyer_id, amount, transaction_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                order.id,
                order.event_id,
                order.buyer_id,
                order.amount,
                order.transaction_id,
                order.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add order: {e}")))?;
        Ok(())
    }

    fn add_like(&self, like: &Like) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO likes (id, event_id, liker_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                like.id,
                like.event_id,
                like.liker_id,
                like.created_at.to_rfc3339()
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add like: {e}")))?;
        Ok(())
    }

    fn add_click(&self, click: &Click) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO clicks (id, event_id, clicker_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                click.id,
                click.event_id,
                click.clicker_id,
                click.created_at.to_rfc3339()
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add click: {e}")))?;
        Ok(())
    }

    fn orders_by_buyer(&self, buyer_id: &str) -> Result<Vec<Order>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, event_id, buyer_id, amount, transaction_id, created_at
                 FROM orders WHERE buyer_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let orders = stmt
            .query_map(params![buyer_id], Self::row_to_order)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(orders)
    }

    fn likes_by_liker(&self, liker_id: &str) -> Result<Vec<Like>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, event_id, liker_id, created_at
                 FROM likes WHERE liker_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let likes = stmt
            .query_map(params![liker_id], Self::row_to_like)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(likes)
    }

    fn clicks_by_clicker(&self, clicker_id: &str) -> Result<Vec<Click>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, event_id, clicker_id, created_at
                 FROM clicks WHERE clicker_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let clicks = stmt
            .query_map(params![clicker_id], Self::row_to_click)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(clicks)
    }

    fn likes_for_event(&self, event_id: &str) -> Result<Vec<Like>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, event_id, liker_id, created_at
                 FROM likes WHERE event_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let likes = stmt
            .query_map(params![event_id], Self::row_to_like)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(likes)
    }

    fn clicks_for_event(&self, event_id: &str) -> Result<Vec<Click>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, event_id, clicker_id, created_at
                 FROM clicks WHERE event_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let clicks = stmt
            .query_map(params![event_id], Self::row_to_click)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(clicks)
    }

    fn like_counts(&self) -> Result<Vec<(String, usize)>, DomainError> {
        self.grouped_counts("SELECT event_id, COUNT(*) FROM likes GROUP BY event_id")
    }

    fn click_counts(&self) -> Result<Vec<(String, usize)>, DomainError> {
        self.grouped_counts("SELECT event_id, COUNT(*) FROM clicks GROUP BY event_id")
    }

    fn order_counts_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(String, usize)>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT event_id, COUNT(*) FROM orders WHERE created_at >= ?1 GROUP BY event_id",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let counts = stmt
            .query_map(params![since.to_rfc3339()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, usize>(1)?))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(counts)
    }
}

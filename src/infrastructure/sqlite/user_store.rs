use rusqlite::{params, Connection};
use std::sync::Mutex;

use crate::domain::entities::user::User;
use crate::domain::error::DomainError;
use crate::domain::ports::user_store::UserStore;

pub struct SqliteUserStore {
    conn: Mutex<Connection>,
}

impl SqliteUserStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl UserStore for SqliteUserStore {
    fn add(&self, user: &User) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO users (id, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4)",
            params![user.id, user.first_name, user.last_name, user.email],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add user: {e}")))?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<User>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, first_name, last_name, email FROM users")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    email: row.get(3)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(users)
    }
}

use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS events (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            category TEXT,
            maximum_tickets TEXT NOT NULL DEFAULT '0',
            tickets_sold_count TEXT NOT NULL DEFAULT '0',
            badges TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY,
            event_id TEXT NOT NULL,
            buyer_id TEXT NOT NULL,
            amount TEXT NOT NULL DEFAULT '0',
            transaction_id TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS likes (
            id TEXT PRIMARY KEY,
            event_id TEXT NOT NULL,
            liker_id TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS clicks (
            id TEXT PRIMARY KEY,
            event_id TEXT NOT NULL,
            clicker_id TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_created ON events(created_at);
        CREATE INDEX IF NOT EXISTS idx_orders_buyer ON orders(buyer_id);
        CREATE INDEX IF NOT EXISTS idx_orders_event ON orders(event_id);
        CREATE INDEX IF NOT EXISTS idx_orders_created ON orders(created_at);
        CREATE INDEX IF NOT EXISTS idx_likes_liker ON likes(liker_id);
        CREATE INDEX IF NOT EXISTS idx_likes_event ON likes(event_id);
        CREATE INDEX IF NOT EXISTS idx_clicks_clicker ON clicks(clicker_id);
        CREATE INDEX IF NOT EXISTS idx_clicks_event ON clicks(event_id);
        ",
    )
    .map_err(|e| format!("Migration failed: {e}"))
}

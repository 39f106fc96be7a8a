use rusqlite::{Connection, OptionalExtension, Result, params};

/// A string key-value store on top of SQLite, one row per key.
pub struct Database {
    connection: Connection,
}

impl Database {
    pub fn new(db_path: &str) -> Result<Database> {
        Self::init(Connection::open(db_path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Database> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Database> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Database { connection: conn })
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    /// Overwrites whatever was stored under `key`.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.connection.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        Ok(())
    }

    #[cfg(test)]
    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM storage WHERE key = ?1", params![key])?;

        Ok(())
    }
}

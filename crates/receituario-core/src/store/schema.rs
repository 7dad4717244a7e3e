//! SQLite schema definition.

/// Complete local-store schema.
///
/// A single key/value table keeps the browser-storage layout: one JSON
/// array blob per collection, replaced wholesale on every write.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS local_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_key_is_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO local_store (key, value) VALUES ('k', '[]')",
            [],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO local_store (key, value) VALUES ('k', '[1]')",
            [],
        );
        assert!(result.is_err());
    }
}

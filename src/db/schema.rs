//! SQL DDL for initializing the todo storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `task` required text
/// - `created_at` stamped by the database at insertion time, with
///   millisecond precision so the display ordering stays stable
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT (STRFTIME('%Y-%m-%d %H:%M:%f', 'now'))
);
"#;

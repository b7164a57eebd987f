//! Database module: model and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a `todos` row
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool wrapper exposing the two queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Todo;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TodoStore, connect};

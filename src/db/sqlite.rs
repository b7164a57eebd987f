use crate::db::models::Todo;
use crate::db::schema::SQLITE_INIT;
use crate::error::TaskpadError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open the database behind `database_url`, creating the file if missing.
pub async fn connect(database_url: &str) -> Result<TodoStore, TaskpadError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(TaskpadError::Connect)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .map_err(TaskpadError::Connect)?;
    Ok(TodoStore::new(pool))
}

#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TaskpadError> {
        // execute statement by statement (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s)
                .execute(&self.pool)
                .await
                .map_err(TaskpadError::InitSchema)?;
        }
        Ok(())
    }

    /// Every row, newest first. `id` breaks the tie between rows stamped
    /// within the same millisecond; insertion order and `id` order coincide.
    pub async fn list_all(&self) -> Result<Vec<Todo>, TaskpadError> {
        sqlx::query_as::<_, Todo>(
            "SELECT id, task, created_at FROM todos ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(TaskpadError::ListTodos)
    }

    /// Insert one task; `id` and `created_at` are assigned by the database.
    /// A missing task is bound as NULL and rejected by the NOT NULL
    /// constraint, so presence checking stays in the database.
    pub async fn insert(&self, task: Option<&str>) -> Result<(), TaskpadError> {
        sqlx::query("INSERT INTO todos (task) VALUES (?)")
            .bind(task)
            .execute(&self.pool)
            .await
            .map_err(TaskpadError::AddTodo)?;
        Ok(())
    }
}

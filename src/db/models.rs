use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One stored todo row. Rows are immutable once written: the app has no
/// update or delete path.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub created_at: NaiveDateTime,
}

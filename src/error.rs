use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TaskpadError {
    #[error("database connection failed: {0}")]
    Connect(#[source] SqlxError),

    #[error("schema initialization failed: {0}")]
    InitSchema(#[source] SqlxError),

    #[error("failed to load todos: {0}")]
    ListTodos(#[source] SqlxError),

    #[error("failed to store todo: {0}")]
    AddTodo(#[source] SqlxError),
}

impl IntoResponse for TaskpadError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        let body = match self {
            TaskpadError::ListTodos(_) => "Error loading todos",
            TaskpadError::AddTodo(_) => "Error adding todo",
            // Startup-only variants; never produced by a route handler.
            TaskpadError::Connect(_) | TaskpadError::InitSchema(_) => "Internal server error",
        };
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

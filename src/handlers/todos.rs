use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::TaskpadError;
use crate::middleware::add_task::AddTask;
use crate::router::AppState;
use crate::view;

/// GET / -> the full todo list as one HTML page, newest first.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, TaskpadError> {
    let todos = state.store.list_all().await?;
    Ok(Html(view::render_index(&todos)))
}

/// POST /add -> insert the submitted task, then bounce back to the list.
/// The redirect is an explicit 302; axum's `Redirect` helpers only emit
/// 303/307/308.
pub async fn add_todo(
    State(state): State<AppState>,
    AddTask(task): AddTask,
) -> Result<Response, TaskpadError> {
    state.store.insert(task.as_deref()).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

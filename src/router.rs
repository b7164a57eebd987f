use axum::Router;
use axum::routing::{get, post};

use crate::db::TodoStore;
use crate::handlers::todos::{add_todo, index};

/// Shared per-request state: the storage pool wrapper, constructed once at
/// startup and cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_todo))
        .with_state(state)
}

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

/// Body accepted by `POST /add`, from either the HTML form or a JSON client.
/// `task` stays optional: presence is enforced by the storage layer's
/// NOT NULL constraint, not here.
#[derive(Debug, Deserialize)]
pub struct AddTaskBody {
    #[serde(default)]
    pub task: Option<String>,
}

/// Pulls the `task` field out of the request, dispatching on content type.
pub struct AddTask(pub Option<String>);

impl<S> FromRequest<S> for AddTask
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let task = if is_json {
            let Json(body) = Json::<AddTaskBody>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            body.task
        } else {
            let Form(body) = Form::<AddTaskBody>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            body.task
        };

        Ok(Self(task))
    }
}

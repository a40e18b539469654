use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::database::Directory;
use crate::error::{DirectoryError, ErrorKind};
use crate::services::ActivitiesService;

#[derive(Debug, Deserialize)]
pub struct RosterCommandBody {
    pub activity: String,
    pub email: String,
}

type CommandResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

pub async fn list_activities_handler(State(service): State<ActivitiesService>) -> Json<Directory> {
    Json(service.list_activities().await)
}

pub async fn signup_handler(
    State(service): State<ActivitiesService>,
    Json(body): Json<RosterCommandBody>,
) -> CommandResult {
    service
        .signup(&body.activity, &body.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %body.activity, email = %body.email, error = %e, "activity_signup_rejected");
            rejection(&e)
        })
}

pub async fn unregister_handler(
    State(service): State<ActivitiesService>,
    Json(body): Json<RosterCommandBody>,
) -> CommandResult {
    service
        .unregister(&body.activity, &body.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %body.activity, email = %body.email, error = %e, "activity_unregister_rejected");
            rejection(&e)
        })
}

fn rejection(e: &DirectoryError) -> (StatusCode, Json<Value>) {
    let kind = e.kind();
    let status = match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(serde_json::json!({
            "error": kind.as_str(),
            "detail": e.to_string(),
        })),
    )
}

pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::services::ActivitiesService;
use routes::activities;

pub const LANDING_PAGE: &str = "/static/index.html";

/// Full application router: roster API, landing redirect and static assets.
pub fn app(service: ActivitiesService, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(LANDING_PAGE) }))
        .route("/activities", get(activities::list_activities_handler))
        .route("/signup", post(activities::signup_handler))
        .route("/unregister", post(activities::unregister_handler))
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        // Rosters change between requests.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(service)
}

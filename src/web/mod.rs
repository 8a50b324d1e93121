pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityStore;

/// Build the application router around a shared activity store.
pub fn router(store: Arc<ActivityStore>) -> Router {
    Router::new()
        // Landing page lives under /static; the root just points at it.
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route(
            "/activities",
            get(routes::activities::list_activities_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/participants/:email",
            delete(routes::activities::remove_participant_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(store)
}

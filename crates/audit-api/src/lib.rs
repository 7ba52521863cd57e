//! audit-api
//!
//! Serverless HTTP function in front of the compliance scoring engine. The
//! client calls it for live previews while a form is filled in and once more
//! at submit time to obtain the record it persists.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use state::AppState;

/// Build the router with all routes and layers.
pub fn app(state: AppState) -> Router {
    let origin = match &state.config.cors_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/audit-types", get(routes::audit_types::list_audit_types))
        .route(
            "/audit-types/{id}",
            get(routes::audit_types::get_audit_type_detail),
        )
        .route("/score/{audit_type}", post(routes::scoring::score_form))
        .route("/audits", post(routes::scoring::create_audit_record))
        .route("/levels/{score}", get(routes::levels::get_level))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}

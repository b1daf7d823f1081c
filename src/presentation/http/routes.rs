// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, modules},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/modules/entry/{identifier}",
            get(modules::get_module_by_identifier),
        )
        .route(
            "/api/v1/modules/{module_type}",
            get(modules::list_public_modules),
        )
        .route(
            "/api/v1/categories/{module_type}",
            get(categories::list_categories),
        )
        .route(
            "/api/v1/admin/modules",
            get(modules::list_admin_modules).post(modules::create_module),
        )
        .route(
            "/api/v1/admin/modules/{id}",
            put(modules::update_module).delete(modules::delete_module),
        )
        .route(
            "/api/v1/admin/modules/{id}/publish",
            post(modules::set_publish_state),
        )
        .route("/api/v1/admin/categories", post(categories::create_category))
        .route(
            "/api/v1/admin/categories/{id}",
            axum::routing::delete(categories::delete_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

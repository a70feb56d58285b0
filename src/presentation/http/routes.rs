// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{delete, get, put},
};
use serde_json::json;
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
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::submit_article),
        )
        .route("/api/v1/articles/mine", get(articles::list_my_articles))
        .route(
            "/api/v1/articles/pending",
            get(articles::list_pending_articles),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article).delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/approve",
            put(articles::approve_article),
        )
        .route(
            "/api/v1/articles/{id}/reject",
            put(articles::reject_article),
        )
        .route("/api/v1/users", get(users::list_users))
        .route(
            "/api/v1/users/dashboard/stats",
            get(users::dashboard_stats),
        )
        .route("/api/v1/users/{id}", delete(users::delete_user))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

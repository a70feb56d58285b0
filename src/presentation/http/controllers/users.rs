// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::DeleteUserCommand,
    dto::{DashboardStatsDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::json;

pub async fn dashboard_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .user_queries
        .get_dashboard_stats(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .delete_user(&user, DeleteUserCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

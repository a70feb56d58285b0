// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ApproveArticleCommand, DeleteArticleCommand, RejectArticleCommand, SubmitArticleCommand,
    },
    dto::{ArticleDto, ArticlePageDto},
    queries::articles::{GetArticleQuery, ListingParams},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl From<ArticleListParams> for ListingParams {
    fn from(params: ArticleListParams) -> Self {
        Self {
            category: params.category,
            search: params.search,
            page: params.page,
            limit: params.limit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct RejectArticleRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .list_public_articles(params.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(actor.0.as_ref(), GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_my_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .list_my_articles(&user, params.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn list_pending_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .list_pending_articles(&user, params.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubmitArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = SubmitArticleCommand {
        title: payload.title,
        content: payload.content,
        abstract_text: payload.abstract_text,
        keywords: payload.keywords,
        category: payload.category,
    };

    let article = state
        .services
        .article_commands
        .submit_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .approve_article(&user, ApproveArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    payload: Option<Json<RejectArticleRequest>>,
) -> HttpResult<Json<ArticleDto>> {
    let reason = payload.and_then(|Json(body)| body.reason);

    state
        .services
        .article_commands
        .reject_article(&user, RejectArticleCommand { id, reason })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

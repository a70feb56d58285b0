use crate::domain::article::{Article, PageRequest};
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public projection of an article's author, resolved by id through the
/// user repository. Email is only filled in on admin-facing views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    pub institution: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthorDto {
    pub fn from_user(user: &User, include_email: bool) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            institution: user.institution.clone(),
            bio: user.bio.clone(),
            email: include_email.then(|| user.email.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
    pub status: String,
    pub rejection_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    pub category: String,
    pub read_time: i32,
    pub views: i64,
    pub likes: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn with_author(mut self, author: Option<AuthorDto>) -> Self {
        self.author = author;
        self
    }

    pub fn with_views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            abstract_text: article.abstract_text.into(),
            keywords: article.keywords,
            author_id: article.author_id.into(),
            author: None,
            status: article.status.as_str().to_owned(),
            rejection_reason: article.rejection_reason,
            approved_by: article.approved_by.map(Into::into),
            approved_at: article.approved_at,
            category: article.category.as_str().to_owned(),
            read_time: article.read_time,
            views: article.views,
            likes: article.likes.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// One page of a listing, with the totals the pagination contract
/// promises: `total_pages = ceil(total / limit)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePageDto {
    pub articles: Vec<ArticleDto>,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: i64,
}

impl ArticlePageDto {
    pub fn new(articles: Vec<ArticleDto>, total: u64, page: &PageRequest) -> Self {
        Self {
            articles,
            total,
            total_pages: page.total_pages(total),
            current_page: page.page(),
        }
    }
}

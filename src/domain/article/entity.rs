// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    AbstractText, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Placeholder stored when a rejection arrives without a reason.
pub const DEFAULT_REJECTION_REASON: &str = "No reason provided";

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub abstract_text: AbstractText,
    pub keywords: Vec<String>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub rejection_reason: String,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub category: Category,
    pub read_time: i32,
    pub views: i64,
    pub likes: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn approve(&mut self, approver: UserId, now: DateTime<Utc>) {
        self.status = ArticleStatus::Approved;
        self.approved_by = Some(approver);
        self.approved_at = Some(now);
        self.rejection_reason.clear();
        self.updated_at = now;
    }

    pub fn reject(&mut self, reason: Option<String>, now: DateTime<Utc>) {
        self.status = ArticleStatus::Rejected;
        self.rejection_reason = reason
            .map(|r| r.trim().to_owned())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_owned());
        self.approved_by = None;
        self.approved_at = None;
        self.updated_at = now;
    }

    /// Snapshot of the full transition field set, applied by the write
    /// repository as a single atomic update.
    pub fn status_update(&self) -> StatusUpdate {
        StatusUpdate {
            id: self.id,
            status: self.status,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
            rejection_reason: self.rejection_reason.clone(),
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub abstract_text: AbstractText,
    pub keywords: Vec<String>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub category: Category,
    pub read_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// A freshly submitted article always enters review as pending, with
    /// its read time derived from the supplied content.
    pub fn submitted(
        title: ArticleTitle,
        content: ArticleContent,
        abstract_text: AbstractText,
        keywords: Vec<String>,
        category: Category,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        let read_time = content.read_time_minutes();
        let keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .collect();
        Self {
            title,
            content,
            abstract_text,
            keywords,
            author_id,
            status: ArticleStatus::Pending,
            category,
            read_time,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One status transition, carried as a whole so partial field writes can
/// never become visible.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub id: ArticleId,
    pub status: ArticleStatus,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: String,
    pub updated_at: DateTime<Utc>,
}

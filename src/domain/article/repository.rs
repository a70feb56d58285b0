use crate::domain::article::entity::{Article, NewArticle, StatusUpdate};
use crate::domain::article::query::ArticleQuery;
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Apply one status transition as a single atomic write; the full
    /// field set in [`StatusUpdate`] must never be partially visible.
    async fn apply_status(&self, update: StatusUpdate) -> DomainResult<Article>;

    /// Atomic in-place increment; returns the new counter value. Must
    /// not be implemented as read-then-write.
    async fn increment_views(&self, id: ArticleId) -> DomainResult<i64>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Cascade hook for user deletion; returns the number of articles
    /// removed.
    async fn delete_by_author(&self, author_id: UserId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// One page of matches (creation time descending) together with the
    /// total count for the same filter.
    async fn list_page(&self, query: &ArticleQuery) -> DomainResult<(Vec<Article>, u64)>;

    async fn count_all(&self) -> DomainResult<u64>;
    async fn count_with_status(&self, status: ArticleStatus) -> DomainResult<u64>;
    async fn count_by_author(
        &self,
        author_id: UserId,
        status: Option<ArticleStatus>,
    ) -> DomainResult<u64>;
}

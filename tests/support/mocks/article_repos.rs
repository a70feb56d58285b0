// tests/support/mocks/article_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use scholarly_core::domain::article::{
    Article, ArticleId, ArticleQuery, ArticleReadRepository, ArticleStatus,
    ArticleWriteRepository, NewArticle, StatusUpdate,
};
use scholarly_core::domain::errors::{DomainError, DomainResult};
use scholarly_core::domain::user::UserId;

/// In-memory article store implementing both repository traits. The
/// mutex stands in for the storage layer's single-document atomicity.
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<i64, Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seeded(articles: Vec<Article>) -> Self {
        let next = articles
            .iter()
            .map(|a| i64::from(a.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Mutex::new(
                articles
                    .into_iter()
                    .map(|a| (i64::from(a.id), a))
                    .collect(),
            ),
            next_id: AtomicI64::new(next),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            abstract_text: article.abstract_text,
            keywords: article.keywords,
            author_id: article.author_id,
            status: article.status,
            rejection_reason: String::new(),
            approved_by: None,
            approved_at: None,
            category: article.category,
            read_time: article.read_time,
            views: 0,
            likes: vec![],
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.inner.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn apply_status(&self, update: StatusUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let article = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        article.status = update.status;
        article.approved_by = update.approved_by;
        article.approved_at = update.approved_at;
        article.rejection_reason = update.rejection_reason;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<i64> {
        let mut map = self.inner.lock().unwrap();
        let article = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.views += 1;
        Ok(article.views)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let mut map = self.inner.lock().unwrap();
        let before = map.len();
        map.retain(|_, article| article.author_id != author_id);
        Ok((before - map.len()) as u64)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_page(&self, query: &ArticleQuery) -> DomainResult<(Vec<Article>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut matches: Vec<Article> = map
            .values()
            .filter(|article| query.matches(article))
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn count_all(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn count_with_status(&self, status: ArticleStatus) -> DomainResult<u64> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().filter(|a| a.status == status).count() as u64)
    }

    async fn count_by_author(
        &self,
        author_id: UserId,
        status: Option<ArticleStatus>,
    ) -> DomainResult<u64> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .filter(|a| a.author_id == author_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count() as u64)
    }
}

// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    AbstractText, Article, ArticleContent, ArticleId, ArticleQuery, ArticleReadRepository,
    ArticleStatus, ArticleTitle, ArticleWriteRepository, ListingScope, NewArticle, StatusUpdate,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, content, abstract, keywords, author_id, status, \
     rejection_reason, approved_by, approved_at, category, read_time, views, likes, \
     created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    #[sqlx(rename = "abstract")]
    abstract_text: String,
    keywords: Vec<String>,
    author_id: i64,
    status: String,
    rejection_reason: String,
    approved_by: Option<i64>,
    approved_at: Option<DateTime<Utc>>,
    category: String,
    read_time: i32,
    views: i64,
    likes: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            abstract_text: AbstractText::new(row.abstract_text)?,
            keywords: row.keywords,
            author_id: UserId::new(row.author_id)?,
            status: row.status.parse()?,
            rejection_reason: row.rejection_reason,
            approved_by: row.approved_by.map(UserId::new).transpose()?,
            approved_at: row.approved_at,
            category: row.category.parse()?,
            read_time: row.read_time,
            views: row.views,
            likes: row
                .likes
                .into_iter()
                .map(UserId::new)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            abstract_text,
            keywords,
            author_id,
            status,
            category,
            read_time,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, abstract, keywords, author_id, status, \
             rejection_reason, category, read_time, views, likes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, '', $7, $8, 0, '{{}}', $9, $10)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(abstract_text.as_str())
            .bind(keywords)
            .bind(i64::from(author_id))
            .bind(status.as_str())
            .bind(category.as_str())
            .bind(read_time)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn apply_status(&self, update: StatusUpdate) -> DomainResult<Article> {
        let StatusUpdate {
            id,
            status,
            approved_by,
            approved_at,
            rejection_reason,
            updated_at,
        } = update;

        // One statement carries the whole transition field set, so a
        // concurrent reader can never observe a partial transition.
        let sql = format!(
            "UPDATE articles
             SET status = $2, approved_by = $3, approved_at = $4, rejection_reason = $5,
                 updated_at = $6
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );

        let maybe_row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .bind(status.as_str())
            .bind(approved_by.map(i64::from))
            .bind(approved_at)
            .bind(rejection_reason)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<i64> {
        // In-place increment; a read-then-write sequence would lose
        // updates under concurrent fetches.
        let views = sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        views.ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn delete_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM articles WHERE author_id = $1")
            .bind(i64::from(author_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        query: &'a ArticleQuery,
        pattern: Option<&'a str>,
    ) {
        builder.push(" WHERE ");
        match query.scope {
            ListingScope::Public => {
                builder.push("status = ");
                builder.push_bind(ArticleStatus::Approved.as_str());
            }
            ListingScope::AuthoredBy(author_id) => {
                builder.push("author_id = ");
                builder.push_bind(i64::from(author_id));
            }
            ListingScope::PendingReview => {
                builder.push("status = ");
                builder.push_bind(ArticleStatus::Pending.as_str());
            }
        }

        if let Some(category) = query.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }

        if let Some(pattern) = pattern {
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern);
            builder.push(" OR abstract ILIKE ");
            builder.push_bind(pattern);
            builder.push(
                " OR EXISTS (SELECT 1 FROM unnest(keywords) AS keyword WHERE keyword ILIKE ",
            );
            builder.push_bind(pattern);
            builder.push("))");
        }
    }

    async fn count_matching(
        &self,
        query: &ArticleQuery,
        pattern: Option<&str>,
    ) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_filter(&mut builder, query, pattern);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total as u64)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(&self, query: &ArticleQuery) -> DomainResult<(Vec<Article>, u64)> {
        let pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let total = self.count_matching(query, pattern.as_deref()).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_filter(&mut builder, query, pattern.as_deref());
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(query.page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(query.page.offset());

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total))
    }

    async fn count_all(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn count_with_status(&self, status: ArticleStatus) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn count_by_author(
        &self,
        author_id: UserId,
        status: Option<ArticleStatus>,
    ) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles WHERE author_id = ");
        builder.push_bind(i64::from(author_id));
        if let Some(status) = status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total as u64)
    }
}

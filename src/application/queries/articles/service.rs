// src/application/queries/articles/service.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, ArticlePageDto, AuthorDto},
    },
    domain::{
        article::{
            Article, ArticleQuery, ArticleReadRepository, ArticleWriteRepository, Category,
            ListingScope, PageRequest, query::DEFAULT_PAGE_LIMIT,
        },
        user::{UserId, UserRepository},
    },
};

/// Caller-supplied listing parameters before composition: raw category
/// and search text, 1-indexed page, row limit.
#[derive(Debug, Clone, Default)]
pub struct ListingParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Sentinel category meaning "do not filter".
const CATEGORY_ALL: &str = "all";

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            user_repo,
        }
    }

    /// Translate raw caller parameters into a bounded, validated filter.
    pub(super) fn compose_query(
        &self,
        scope: ListingScope,
        params: ListingParams,
    ) -> ApplicationResult<ArticleQuery> {
        let page = PageRequest::new(
            params.page.unwrap_or(1),
            params.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )?;

        let category = match params.category.as_deref() {
            None | Some(CATEGORY_ALL) => None,
            Some(raw) => Some(raw.parse::<Category>()?),
        };

        Ok(ArticleQuery::new(scope, page)
            .with_category(category)
            .with_search(params.search))
    }

    pub(super) async fn fetch_page(
        &self,
        query: &ArticleQuery,
        include_author_email: bool,
    ) -> ApplicationResult<ArticlePageDto> {
        let (articles, total) = self.read_repo.list_page(query).await?;
        let authors = self.resolve_authors(&articles, include_author_email).await?;

        let items = articles
            .into_iter()
            .map(|article| {
                let author = authors.get(&i64::from(article.author_id)).cloned();
                ArticleDto::from(article).with_author(author)
            })
            .collect();

        Ok(ArticlePageDto::new(items, total, &query.page))
    }

    /// Authors are weak references: resolve their public projections in
    /// one batch lookup keyed by id.
    pub(super) async fn resolve_authors(
        &self,
        articles: &[Article],
        include_email: bool,
    ) -> ApplicationResult<HashMap<i64, AuthorDto>> {
        let mut ids: Vec<UserId> = articles.iter().map(|a| a.author_id).collect();
        ids.sort_by_key(|id| i64::from(*id));
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = self.user_repo.find_by_ids(&ids).await?;
        Ok(users
            .iter()
            .map(|user| {
                (
                    i64::from(user.id),
                    AuthorDto::from_user(user, include_email),
                )
            })
            .collect())
    }
}

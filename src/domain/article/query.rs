// src/domain/article/query.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleStatus, Category};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Which slice of the corpus a listing is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingScope {
    /// Approved articles only.
    Public,
    /// Everything authored by the given user, any status.
    AuthoredBy(UserId),
    /// The moderation queue: pending articles, any author.
    PendingReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Page and limit must both be positive; out-of-range values are
    /// rejected rather than clamped so pagination stays testable.
    pub fn new(page: i64, limit: i64) -> DomainResult<Self> {
        if page < 1 {
            return Err(DomainError::Validation(
                "page must be a positive integer".into(),
            ));
        }
        if limit < 1 {
            return Err(DomainError::Validation(
                "limit must be a positive integer".into(),
            ));
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(DomainError::Validation(format!(
                "limit cannot exceed {MAX_PAGE_LIMIT}"
            )));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// A fully composed listing filter: scope, optional category and
/// free-text constraints, plus pagination. Results are ordered by
/// creation time descending (id descending as a stable tiebreak).
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    pub scope: ListingScope,
    pub category: Option<Category>,
    pub search: Option<String>,
    pub page: PageRequest,
}

impl ArticleQuery {
    pub fn new(scope: ListingScope, page: PageRequest) -> Self {
        Self {
            scope,
            category: None,
            search: None,
            page,
        }
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());
        self
    }

    /// Reference predicate for the filter. The SQL repository must agree
    /// with this; in-memory repositories evaluate it directly.
    pub fn matches(&self, article: &Article) -> bool {
        let in_scope = match self.scope {
            ListingScope::Public => article.status == ArticleStatus::Approved,
            ListingScope::AuthoredBy(author) => article.author_id == author,
            ListingScope::PendingReview => article.status == ArticleStatus::Pending,
        };
        if !in_scope {
            return false;
        }

        if let Some(category) = self.category {
            if article.category != category {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystacks = [article.title.as_str(), article.abstract_text.as_str()];
            let in_text = haystacks
                .iter()
                .any(|text| text.to_lowercase().contains(&needle));
            let in_keywords = article
                .keywords
                .iter()
                .any(|kw| kw.to_lowercase().contains(&needle));
            if !in_text && !in_keywords {
                return false;
            }
        }

        true
    }
}

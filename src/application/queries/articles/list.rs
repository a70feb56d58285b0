// src/application/queries/articles/list.rs
use super::{ArticleQueryService, service::ListingParams};
use crate::{
    application::{ApplicationResult, dto::ArticlePageDto},
    domain::article::ListingScope,
};

impl ArticleQueryService {
    /// The anonymous listing: approved articles only, with optional
    /// category filter and case-insensitive free-text search.
    pub async fn list_public_articles(
        &self,
        params: ListingParams,
    ) -> ApplicationResult<ArticlePageDto> {
        let query = self.compose_query(ListingScope::Public, params)?;
        self.fetch_page(&query, false).await
    }
}

// src/application/queries/articles/mine.rs
use super::{ArticleQueryService, service::ListingParams};
use crate::{
    application::{
        ApplicationResult,
        dto::{ArticlePageDto, AuthenticatedUser},
    },
    domain::article::ListingScope,
};

impl ArticleQueryService {
    /// A contributor's own articles, any status.
    pub async fn list_my_articles(
        &self,
        actor: &AuthenticatedUser,
        params: ListingParams,
    ) -> ApplicationResult<ArticlePageDto> {
        let query = self.compose_query(ListingScope::AuthoredBy(actor.id), params)?;
        self.fetch_page(&query, false).await
    }
}

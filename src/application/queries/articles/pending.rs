// src/application/queries/articles/pending.rs
use super::{ArticleQueryService, service::ListingParams};
use crate::{
    application::{
        ApplicationResult,
        dto::{ArticlePageDto, AuthenticatedUser},
        error::ApplicationError,
    },
    domain::article::{ListingScope, specifications::can_modify_status},
};

impl ArticleQueryService {
    /// The moderation queue. Admin-only; author projections here include
    /// the email address for contacting contributors.
    pub async fn list_pending_articles(
        &self,
        actor: &AuthenticatedUser,
        params: ListingParams,
    ) -> ApplicationResult<ArticlePageDto> {
        if !can_modify_status(actor.caller()) {
            return Err(ApplicationError::forbidden(
                "administrator privileges are required to view the review queue",
            ));
        }

        let query = self.compose_query(ListingScope::PendingReview, params)?;
        self.fetch_page(&query, true).await
    }
}

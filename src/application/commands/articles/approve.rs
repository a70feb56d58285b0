// src/application/commands/articles/approve.rs
use super::{ArticleCommandService, authorize::ensure_can_moderate};
use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationError,
    },
    domain::article::ArticleId,
};

pub struct ApproveArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_can_moderate(actor)?;
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        article.approve(actor.id, now);

        let updated = self.write_repo.apply_status(article.status_update()).await?;
        tracing::info!(
            article_id = i64::from(updated.id),
            approved_by = i64::from(actor.id),
            "article approved"
        );
        self.into_dto_with_author(updated, true).await
    }
}

// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        ApplicationResult,
        dto::AuthenticatedUser,
        error::ApplicationError,
    },
    domain::article::{ArticleId, specifications::CanDeleteArticleSpec},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let delete_spec = CanDeleteArticleSpec::new(&article, actor.caller());
        if !delete_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author or an administrator may delete this article",
            ));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = i64::from(id), deleted_by = i64::from(actor.id), "article deleted");
        Ok(())
    }
}

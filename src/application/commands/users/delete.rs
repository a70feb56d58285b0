// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::{
    application::{
        ApplicationResult,
        dto::AuthenticatedUser,
        error::ApplicationError,
    },
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Removing a user also removes every article they authored,
    /// keyed on the deleted user's own id.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        if !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "administrator privileges are required to delete users",
            ));
        }

        let id = UserId::new(command.id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let removed = self.article_write_repo.delete_by_author(id).await?;
        self.user_repo.delete(id).await?;
        tracing::info!(
            user_id = i64::from(id),
            cascaded_articles = removed,
            deleted_by = i64::from(actor.id),
            "user and authored articles deleted"
        );
        Ok(())
    }
}

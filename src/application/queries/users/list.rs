// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::{
    application::{
        ApplicationResult,
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationError,
    },
    domain::user::Role,
};

impl UserQueryService {
    /// Contributor roster for administrators. The DTO carries no
    /// password field, so credentials can never leak through this path.
    pub async fn list_users(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<UserDto>> {
        if !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "administrator privileges are required to list users",
            ));
        }

        let users = self.user_repo.list_with_role(Role::User).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}

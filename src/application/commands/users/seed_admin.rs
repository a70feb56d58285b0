// src/application/commands/users/seed_admin.rs
use super::UserCommandService;
use crate::{
    application::ApplicationResult,
    domain::user::{Email, NewUser, PasswordHash, Role, Username},
};

pub struct SeedAdminCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub institution: String,
}

impl UserCommandService {
    /// Idempotent administrator seeding, safe under concurrent process
    /// startup: the repository performs an atomic insert-if-absent, so
    /// two racing processes can never both create the account.
    pub async fn seed_admin(&self, command: SeedAdminCommand) -> ApplicationResult<bool> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            username,
            email,
            password_hash,
            Role::Admin,
            command.institution,
            "Platform administrator",
            self.clock.now(),
        );

        match self.user_repo.insert_if_absent(new_user).await? {
            Some(admin) => {
                tracing::info!(admin_id = i64::from(admin.id), "administrator account created");
                Ok(true)
            }
            None => {
                tracing::debug!("administrator account already present");
                Ok(false)
            }
        }
    }
}

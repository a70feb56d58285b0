// tests/support/helpers.rs
use scholarly_core::application::dto::AuthenticatedUser;
use scholarly_core::domain::user::{Role, UserId};

pub fn user_actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("user{id}"),
        role: Role::User,
    }
}

pub fn admin_actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("admin{id}"),
        role: Role::Admin,
    }
}

// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub institution: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub institution: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        role: Role,
        institution: impl Into<String>,
        bio: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            role,
            institution: institution.into(),
            bio: bio.into(),
            created_at,
        }
    }
}

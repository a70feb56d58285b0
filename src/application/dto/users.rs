use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The password hash never leaves the credential collaborator; this DTO
/// simply has no field for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub institution: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            role: user.role,
            institution: user.institution,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

/// Dashboard counters; the shape depends on who is asking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashboardStatsDto {
    Admin {
        total_users: u64,
        total_articles: u64,
        pending_articles: u64,
        approved_articles: u64,
    },
    Contributor {
        user_articles: u64,
        pending_articles: u64,
        approved_articles: u64,
    },
}

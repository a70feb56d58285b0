use crate::domain::article::specifications::Caller;
use crate::domain::user::{Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Resolved caller identity attached to a request once the credential
/// collaborator has verified the bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn caller(&self) -> Caller {
        Caller::new(self.id, self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// What goes into a token at issuance time.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

impl TokenSubject {
    pub fn from_authenticated(auth: &AuthenticatedUser) -> Self {
        Self {
            user_id: auth.id,
            username: auth.username.clone(),
            role: auth.role,
        }
    }
}

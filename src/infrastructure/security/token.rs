// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration as ChronoDuration;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

const MIN_KEY_BYTES: usize = 32;

/// Bearer tokens are an HMAC-SHA256 signed JSON payload:
/// `base64url(claims) "." base64url(mac)`. The payload is the narrow
/// identity contract: user id, username, role, validity window.
#[derive(Clone)]
pub struct HmacTokenManager {
    key: Vec<u8>,
    ttl: ChronoDuration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    username: String,
    role: Role,
    iat: i64,
    exp: i64,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_KEY_BYTES {
            return Err(ApplicationError::infrastructure(format!(
                "token signing key must be at least {MIN_KEY_BYTES} bytes"
            )));
        }
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            key: secret.as_bytes().to_vec(),
            ttl,
            clock,
        })
    }

    fn mac(&self, payload: &str) -> ApplicationResult<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn verify_mac(&self, payload: &str, signature: &[u8]) -> ApplicationResult<()> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload.as_bytes());
        mac.verify_slice(signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: subject.user_id.into(),
            username: subject.username,
            role: subject.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&claims)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?,
        );
        let signature = URL_SAFE_NO_PAD.encode(self.mac(&payload)?);

        Ok(AuthTokenDto {
            token: format!("{payload}.{signature}"),
            issued_at,
            expires_at,
            expires_in: (expires_at - issued_at).num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        self.verify_mac(payload, &signature)?;

        let claims: Claims = URL_SAFE_NO_PAD
            .decode(payload)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let now = self.clock.now().timestamp();
        if claims.exp < now {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        Ok(AuthenticatedUser {
            id: UserId::new(claims.sub)?,
            username: claims.username,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;
    use chrono::{DateTime, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    fn manager_at(now: DateTime<Utc>) -> HmacTokenManager {
        HmacTokenManager::new(KEY, Duration::from_secs(3600), Arc::new(FixedClock(now))).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(7).unwrap(),
            username: "reviewer".into(),
            role: Role::Admin,
        }
    }

    #[tokio::test]
    async fn issued_tokens_authenticate() {
        let manager = manager_at(Utc::now());
        let token = manager.issue(subject()).await.unwrap();

        let user = manager.authenticate(&token.token).await.unwrap();
        assert_eq!(i64::from(user.id), 7);
        assert_eq!(user.username, "reviewer");
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn tampered_tokens_are_rejected() {
        let manager = manager_at(Utc::now());
        let token = manager.issue(subject()).await.unwrap().token;
        let mut tampered = token.clone();
        tampered.replace_range(0..1, if token.starts_with('A') { "B" } else { "A" });

        assert!(manager.authenticate(&tampered).await.is_err());
        assert!(manager.authenticate("no-separator").await.is_err());
    }

    #[tokio::test]
    async fn expired_tokens_are_rejected() {
        let issued = Utc::now();
        let token = manager_at(issued).issue(subject()).await.unwrap().token;

        let later = issued + ChronoDuration::seconds(7200);
        let manager = manager_at(later);
        assert!(manager.authenticate(&token).await.is_err());
    }

    #[test]
    fn short_keys_are_refused() {
        let clock = Arc::new(FixedClock(Utc::now()));
        assert!(HmacTokenManager::new("short", Duration::from_secs(60), clock).is_err());
    }
}

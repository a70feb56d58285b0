// tests/support/mocks/security.rs
use async_trait::async_trait;

use scholarly_core::application::error::{ApplicationError, ApplicationResult};
use scholarly_core::application::ports::security::PasswordHasher;

/// Transparent stand-in for the Argon2 hasher; tests only care that the
/// hash round-trips, not that it is slow.
#[derive(Default, Clone)]
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

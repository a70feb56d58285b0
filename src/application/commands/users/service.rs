// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::PasswordHasher, time::Clock},
    domain::{article::ArticleWriteRepository, user::UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            article_write_repo,
            password_hasher,
            clock,
        }
    }
}

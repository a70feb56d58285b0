// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, AuthorDto},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            clock,
        }
    }

    /// Attach the author's public projection to a freshly written
    /// article. Moderation responses are admin-facing and include the
    /// author's email.
    pub(super) async fn into_dto_with_author(
        &self,
        article: Article,
        include_email: bool,
    ) -> ApplicationResult<ArticleDto> {
        let author = self
            .user_repo
            .find_by_id(article.author_id)
            .await?
            .map(|user| AuthorDto::from_user(&user, include_email));
        Ok(ArticleDto::from(article).with_author(author))
    }
}

// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, AuthenticatedUser, AuthorDto},
        error::ApplicationError,
    },
    domain::article::{ArticleId, specifications::CanReadArticleSpec},
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Single-article fetch. A caller who may not see the article gets
    /// "not found", never "forbidden"; a caller who may see it counts as
    /// one view, applied as an atomic increment at the storage layer.
    pub async fn get_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = CanReadArticleSpec::new(&article, actor.map(|a| a.caller()));
        if !spec.is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let views = self.write_repo.increment_views(id).await?;

        let author = self
            .user_repo
            .find_by_id(article.author_id)
            .await?
            .map(|user| AuthorDto::from_user(&user, false));

        Ok(ArticleDto::from(article)
            .with_views(views)
            .with_author(author))
    }
}

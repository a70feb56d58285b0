// src/application/commands/articles/submit.rs
use super::ArticleCommandService;
use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, AuthenticatedUser},
    },
    domain::article::{AbstractText, ArticleContent, ArticleTitle, Category, NewArticle},
};

pub struct SubmitArticleCommand {
    pub title: String,
    pub content: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub category: String,
}

impl ArticleCommandService {
    /// Any authenticated contributor may submit; the article enters the
    /// review queue as pending with the caller recorded as its author.
    pub async fn submit_article(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let abstract_text = AbstractText::new(command.abstract_text)?;
        let category: Category = command.category.parse()?;
        let now = self.clock.now();

        let new_article = NewArticle::submitted(
            title,
            content,
            abstract_text,
            command.keywords,
            category,
            actor.id,
            now,
        );

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), author_id = i64::from(actor.id), "article submitted for review");
        self.into_dto_with_author(created, false).await
    }
}

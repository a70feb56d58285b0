// src/application/commands/articles/mod.rs
mod approve;
mod authorize;
mod delete;
mod reject;
mod service;
mod submit;

pub use approve::ApproveArticleCommand;
pub use delete::DeleteArticleCommand;
pub use reject::RejectArticleCommand;
pub use service::ArticleCommandService;
pub use submit::SubmitArticleCommand;

mod get_by_id;
mod list;
mod mine;
mod pending;
mod service;

pub use get_by_id::GetArticleQuery;
pub use service::{ArticleQueryService, ListingParams};

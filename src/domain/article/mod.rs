pub mod entity;
pub mod query;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, DEFAULT_REJECTION_REASON, NewArticle, StatusUpdate};
pub use query::{ArticleQuery, ListingScope, PageRequest};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    AbstractText, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category,
};

pub mod articles;
pub mod auth;
pub mod users;

pub use articles::{ArticleDto, ArticlePageDto, AuthorDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use users::{DashboardStatsDto, UserDto};

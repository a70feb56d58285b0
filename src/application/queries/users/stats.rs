// src/application/queries/users/stats.rs
use super::UserQueryService;
use crate::{
    application::{
        ApplicationResult,
        dto::{AuthenticatedUser, DashboardStatsDto},
    },
    domain::{article::ArticleStatus, user::Role},
};

impl UserQueryService {
    /// Dashboard counters. Administrators see corpus-wide totals;
    /// contributors see counts scoped to their own articles.
    pub async fn get_dashboard_stats(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<DashboardStatsDto> {
        if actor.is_admin() {
            let total_users = self.user_repo.count_with_role(Role::User).await?;
            let total_articles = self.article_repo.count_all().await?;
            let pending_articles = self
                .article_repo
                .count_with_status(ArticleStatus::Pending)
                .await?;
            let approved_articles = self
                .article_repo
                .count_with_status(ArticleStatus::Approved)
                .await?;

            Ok(DashboardStatsDto::Admin {
                total_users,
                total_articles,
                pending_articles,
                approved_articles,
            })
        } else {
            let user_articles = self.article_repo.count_by_author(actor.id, None).await?;
            let pending_articles = self
                .article_repo
                .count_by_author(actor.id, Some(ArticleStatus::Pending))
                .await?;
            let approved_articles = self
                .article_repo
                .count_by_author(actor.id, Some(ArticleStatus::Approved))
                .await?;

            Ok(DashboardStatsDto::Contributor {
                user_articles,
                pending_articles,
                approved_articles,
            })
        }
    }
}

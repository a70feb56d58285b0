// tests/dashboard_stats_test.rs
use std::sync::Arc;

mod support;

use scholarly_core::application::dto::DashboardStatsDto;
use scholarly_core::application::queries::users::UserQueryService;

use support::builders::{ArticleBuilder, UserBuilder};
use support::helpers::{admin_actor, user_actor};
use support::mocks::article_repos::InMemoryArticleRepo;
use support::mocks::user_repo::InMemoryUserRepo;

fn seeded_services() -> UserQueryService {
    let users = Arc::new(InMemoryUserRepo::seeded(vec![
        UserBuilder::new().id(1).username("moderator").admin().build(),
        UserBuilder::new().id(7).username("alice").build(),
        UserBuilder::new().id(8).username("brook").build(),
    ]));
    let articles = Arc::new(InMemoryArticleRepo::seeded(vec![
        ArticleBuilder::new().id(1).author(7).build(),
        ArticleBuilder::new().id(2).author(7).approved().build(),
        ArticleBuilder::new().id(3).author(7).rejected().build(),
        ArticleBuilder::new().id(4).author(8).approved().build(),
        ArticleBuilder::new().id(5).author(8).build(),
    ]));
    UserQueryService::new(users, articles)
}

#[tokio::test]
async fn admins_see_corpus_wide_totals() {
    let service = seeded_services();

    let stats = service.get_dashboard_stats(&admin_actor(1)).await.unwrap();
    match stats {
        DashboardStatsDto::Admin {
            total_users,
            total_articles,
            pending_articles,
            approved_articles,
        } => {
            // Admin accounts are not counted among users.
            assert_eq!(total_users, 2);
            assert_eq!(total_articles, 5);
            assert_eq!(pending_articles, 2);
            assert_eq!(approved_articles, 2);
        }
        other => panic!("expected admin stats, got {other:?}"),
    }
}

#[tokio::test]
async fn contributors_see_only_their_own_counts() {
    let service = seeded_services();

    let stats = service.get_dashboard_stats(&user_actor(7)).await.unwrap();
    match stats {
        DashboardStatsDto::Contributor {
            user_articles,
            pending_articles,
            approved_articles,
        } => {
            assert_eq!(user_articles, 3);
            assert_eq!(pending_articles, 1);
            assert_eq!(approved_articles, 1);
        }
        other => panic!("expected contributor stats, got {other:?}"),
    }
}

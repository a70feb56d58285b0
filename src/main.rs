use scholarly_core::application::{
    commands::users::SeedAdminCommand,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use scholarly_core::config::AppConfig;
use scholarly_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use scholarly_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::HmacTokenManager},
    time::SystemClock,
};
use scholarly_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(HmacTokenManager::new(
        config.auth_token_key(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&user_repo),
        Arc::clone(&article_write_repo),
        Arc::clone(&article_read_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_manager),
        Arc::clone(&clock),
    ));

    seed_admin(&services, &config).await?;

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn seed_admin(services: &ApplicationServices, config: &AppConfig) -> Result<()> {
    let Some(bootstrap) = config.admin_bootstrap() else {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not configured, skipping administrator seeding");
        return Ok(());
    };

    let created = services
        .user_commands
        .seed_admin(SeedAdminCommand {
            username: bootstrap.username.clone(),
            email: bootstrap.email.clone(),
            password: bootstrap.password.clone(),
            institution: bootstrap.institution.clone(),
        })
        .await
        .map_err(|err| anyhow::anyhow!("administrator seeding failed: {err}"))?;

    if created {
        tracing::info!(email = %bootstrap.email, "administrator account seeded");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

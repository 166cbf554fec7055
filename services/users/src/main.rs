use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

mod cache_key;
mod config;
mod error;
mod messages;
mod models;
mod repositories;
mod routes;
mod state;

use common::{cache, database};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting users service");

    let service_config = config::UsersConfig::from_env()?;

    // Initialize database connection pool
    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Initialize Redis; lookups degrade to plain database reads when the
    // cache is unreachable
    let redis_config = cache::RedisConfig::from_env()?;
    let redis_pool = cache::RedisPool::new(&redis_config)?;

    match redis_pool.health_check().await {
        Ok(true) => info!("Redis connection established"),
        Ok(false) | Err(_) => {
            warn!("Redis unreachable, lookups will be served without cache")
        }
    }

    let user_repository = repositories::UserRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        redis_pool,
        user_repository,
        config: service_config.clone(),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(service_config.bind_addr()).await?;
    info!("Users service listening on {}", service_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}

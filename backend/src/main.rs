//! Backend entry-point: loads settings, prepares storage, and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tokio::task;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bloglist::config::AppSettings;
use bloglist::inbound::http::health::HealthState;
use bloglist::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let secret = settings.signing_secret()?;

    let mut config = ServerConfig::new(
        (settings.host().to_owned(), settings.port()),
        secret,
        settings.token_ttl_secs(),
        settings.bcrypt_cost(),
    );

    if let Some(database_url) = settings.database_url.clone() {
        let migration_url = database_url.clone();
        let applied = task::spawn_blocking(move || run_pending_migrations(&migration_url))
            .await
            .wrap_err("migration task panicked")??;
        info!(applied, "database migrations applied");

        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
        )
        .await?;
        config = config.with_db_pool(pool);
    }

    info!(host = settings.host(), port = settings.port(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await?;
    Ok(())
}

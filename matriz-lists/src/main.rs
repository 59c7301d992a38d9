use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use matriz_lists::config::Config;
use matriz_lists::db;
use matriz_lists::http;

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let config = Config::from_env();
    tracing::info!("Connecting to MariaDB at {}:{}", config.db_host, config.db_port);

    let pool = db::create_pool(&config.database_url()).await?;
    db::schema::init(&pool).await?;

    http::run_server(pool, config.bind_addr()).await?;
    Ok(())
}

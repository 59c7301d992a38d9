use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use matriz_gateway::config::Config;
use matriz_gateway::db::{HospitalDb, LibraryDb};
use matriz_gateway::http::{self, AppState};
use matriz_gateway::outbound::PurchasingClient;

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
    tracing::info!(
        "Library pools: read={} write={}",
        config.db_host_read,
        config.db_host_write
    );

    // Lazy pools: a backend that is down at boot shows up as "down" on
    // /api/system-status instead of preventing startup.
    let library = LibraryDb::connect_lazy(&config.library_read_url(), &config.library_write_url())?;
    let hospital = HospitalDb::connect_lazy(&config.hospital_url())?;
    let purchasing = PurchasingClient::new(config.app1_url.clone());

    let state = AppState {
        library,
        hospital,
        purchasing,
    };

    http::run_server(state, config.bind_addr()).await?;
    Ok(())
}

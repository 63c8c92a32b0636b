use tracing_subscriber::EnvFilter;

use yeppuda_api::{catalog::Catalog, config::Config, routes::create_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load the catalog once; every request reads this snapshot
    let catalog = Catalog::builtin()?;
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let state = AppState::new(catalog, config.default_budget());
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

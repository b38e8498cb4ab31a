use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use biblias::error::Result;
use biblias::persist::Persistor;
use biblias::server::router;
use biblias::settings::{Settings, DEFAULT_CONFIG};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biblias=info,tower_http=debug")),
        )
        .init();

    let settings = Settings::load(DEFAULT_CONFIG)?;
    // the store must be usable before any connection is accepted
    let persistor = Arc::new(Persistor::new(settings.persistence_mode())?);
    info!(database = %settings.database, "record store opened");

    let listener = TcpListener::bind(settings.socket_addr()).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(persistor)).await?;
    Ok(())
}

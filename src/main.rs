use std::sync::Arc;
use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;
use lifetrack::{
    config::{Config, StoreBackend},
    services::{mailer_from_config, MemoryStore, Notifier, RedisStore, Store},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let store: Arc<dyn Store> = match config.store.backend {
        StoreBackend::Redis => {
            let client = redis::Client::open(config.redis.url.as_str())
                .context("Invalid Redis connection string")?;
            let store = RedisStore::connect(&client)
                .await
                .context("Failed to connect to Redis")?;
            Arc::new(store)
        }
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::info!("Using {} store", store.backend_tag());

    let mailer = mailer_from_config(&config.mail).context("Failed to configure mail transport")?;
    let notifier = Notifier::new(Arc::from(mailer), config.mail.sender.clone());

    let state = AppState::new(store, notifier, config.auth.bcrypt_cost)
        .context("Failed to initialize password hashing")?;
    let app = lifetrack::router(state, &config.server);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Server running on http://{}", address);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

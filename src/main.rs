//! Property Listings - a property listing service with read-through caching
//!
//! Serves a property collection from a TTL-bound cache entry backed by
//! Redis or an in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use property_listings::api::{create_router, AppState};
use property_listings::cache::PropertyCache;
use property_listings::config::Config;
use property_listings::events::PropertyEvents;
use property_listings::repository::InMemoryPropertyRepository;
use property_listings::store::{CacheStore, MemoryStore, RedisStore, StoreAdmin};
use property_listings::tasks::{spawn_invalidation_hooks, spawn_purge_task};

/// Main entry point for the property listing service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Select the store backend (Redis when configured, in-memory otherwise)
/// 4. Wire the repository, event channel, and invalidation hooks
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_listings=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Property Listing Service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cleanup_interval={}s",
        config.server_port, config.cache_ttl, config.cleanup_interval
    );

    // Mutation event channel shared by the repository and the hooks
    let events = PropertyEvents::new();
    let repo = Arc::new(InMemoryPropertyRepository::new(events.clone()));

    // Select the store backend
    let (store, admin, purge_handle): (
        Arc<dyn CacheStore>,
        Arc<dyn StoreAdmin>,
        Option<JoinHandle<()>>,
    ) = match &config.redis_url {
        Some(url) => {
            let redis = Arc::new(RedisStore::connect(url).await?);
            info!("Connected to Redis store at {}", url);
            let store: Arc<dyn CacheStore> = redis.clone();
            let admin: Arc<dyn StoreAdmin> = redis;
            (store, admin, None)
        }
        None => {
            let memory = Arc::new(MemoryStore::new());
            info!("No REDIS_URL configured, using in-memory store backend");
            let purge = spawn_purge_task(
                memory.clone(),
                Duration::from_secs(config.cleanup_interval),
            );
            let store: Arc<dyn CacheStore> = memory.clone();
            let admin: Arc<dyn StoreAdmin> = memory;
            (store, admin, Some(purge))
        }
    };

    // Read-through cache and invalidation hooks
    let cache = Arc::new(PropertyCache::with_ttl(
        store.clone(),
        repo.clone(),
        Duration::from_secs(config.cache_ttl),
    ));
    let hooks_handle = spawn_invalidation_hooks(store, events.subscribe());
    info!("Cache invalidation hooks started");

    // Create router with all endpoints
    let state = AppState::new(cache, repo, admin);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(hooks_handle, purge_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the background tasks and allows graceful
/// shutdown.
async fn shutdown_signal(hooks_handle: JoinHandle<()>, purge_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort background tasks
    hooks_handle.abort();
    if let Some(handle) = purge_handle {
        handle.abort();
    }
    warn!("Background tasks aborted");
}

//! Reusable server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the server lifecycle:
//! repository and service wiring, the REST API listener, and graceful
//! shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::application::UserService;
use crate::config::AppConfig;
use crate::infrastructure::InMemoryUserRepository;
use crate::interfaces::http::create_api_router;
use crate::shared::{listen_for_shutdown_signals, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
#[derive(Default)]
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// # Examples
///
/// ```rust,no_run
/// use user_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     // ... wait for shutdown signal ...
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The user collection shared by every request.
    pub repo: Arc<InMemoryUserRepository>,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the API is actually bound to (resolves port 0).
    pub local_addr: std::net::SocketAddr,

    shutdown: ShutdownSignal,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Build the repository and service, bind the listener and spawn the API.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let config = opts.config;

        info!("Starting user service...");

        let repo = Arc::new(InMemoryUserRepository::with_users(
            config.storage.seed.iter().cloned(),
        ));
        if !config.storage.seed.is_empty() {
            info!("Seeded {} user(s) from configuration", repo.len().await);
        }

        let service = Arc::new(UserService::with_policy(
            repo.clone(),
            config.api.failure_status,
        ));
        info!("Failure status policy: {:?}", service.policy());

        let router = create_api_router(service, repo.clone(), config.api.docs);

        let listener = TcpListener::bind(config.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        if config.api.docs {
            info!("Swagger UI available at http://{}/docs/", local_addr);
        }

        let shutdown = ShutdownSignal::new();
        let api_shutdown = shutdown.clone();
        let api_task = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    api_shutdown.wait().await;
                    info!("REST API server received shutdown signal");
                })
                .await;
            if let Err(e) = result {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repo,
            config,
            local_addr,
            shutdown,
            api_task,
        })
    }

    /// Trigger shutdown on SIGINT / SIGTERM.
    pub fn install_signal_handler(&self) {
        let signal = self.shutdown.clone();
        tokio::spawn(async move {
            listen_for_shutdown_signals(signal).await;
        });
    }

    /// A clone of the shutdown signal, for triggering shutdown from elsewhere.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Wait for the API task to finish, bounded by the configured timeout
    /// once shutdown has been triggered.
    pub async fn wait(self) {
        let timeout = std::time::Duration::from_secs(self.config.server.shutdown_timeout);
        let mut api_task = self.api_task;

        tokio::select! {
            _ = &mut api_task => {
                info!("REST API server stopped");
                return;
            }
            _ = self.shutdown.wait() => {}
        }

        info!(
            "Starting graceful shutdown (timeout: {}s)...",
            self.config.server.shutdown_timeout
        );
        match tokio::time::timeout(timeout, &mut api_task).await {
            Ok(_) => info!("Graceful shutdown completed"),
            Err(_) => {
                warn!("Graceful shutdown timed out after {}s", timeout.as_secs());
                api_task.abort();
            }
        }
    }

    /// Trigger shutdown and wait for the server to stop.
    pub async fn shutdown(self) {
        self.shutdown.trigger();
        self.wait().await;
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use crate::api;
use crate::core::tasks::BackgroundTasks;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Register background tasks for the given state
    pub fn start_background_tasks(state: &ServerState) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        let period = Duration::from_secs(state.config.expiry_sweep_interval_secs);
        let sweep_state = state.clone();
        tasks.spawn_periodic("discount_expiry_sweep", period, move || {
            let state = sweep_state.clone();
            async move {
                state.sweep_expired_discounts().await;
            }
        });

        tracing::info!("Background tasks registered: {}", tasks.len());
        tasks
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let tasks = Self::start_background_tasks(&state);
        let app = api::build_app(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("Catalog server listening on {}", addr);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        tasks
            .shutdown(Duration::from_millis(self.config.shutdown_timeout_ms))
            .await;

        served.map_err(|e| ServerError::Internal(e.into()))
    }
}

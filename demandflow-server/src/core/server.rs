//! HTTP server startup and shutdown

use crate::core::{Config, ServerState};
use crate::routes;

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> anyhow::Result<()> {
        let state = ServerState::initialize(&self.config).await?;

        let app = routes::build_app(&state).with_state(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            environment = %self.config.environment,
            debug = self.config.debug,
            "demandflow-server listening on {addr}"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        Ok(())
    }
}

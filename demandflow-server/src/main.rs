use demandflow_server::core::{Config, Server};
use demandflow_server::init_logger_with_file;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        "Starting demandflow-server v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    if config.debug {
        tracing::warn!("DEBUG is on: /debug/* endpoints are reachable without login");
        if config.is_production() {
            tracing::warn!("DEBUG should not be enabled in production");
        }
    }

    Server::new(config).run().await
}

//! Seed the database with the admin account, roles, staff and the viewer

use demandflow_server::core::{Config, ServerState};
use demandflow_server::{init_logger, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    let config = Config::from_env()?;
    init_logger(&config.log_level);

    let state = ServerState::initialize(&config).await?;
    let summary = seed::run(&state.pool, &config).await?;

    println!(
        "Seeding complete: admin {}, viewer {}, {} role(s) and {} staff member(s) added.",
        if summary.admin_created { "created" } else { "password reset" },
        if summary.viewer_created { "created" } else { "password reset" },
        summary.roles_created,
        summary.staff_created,
    );
    Ok(())
}

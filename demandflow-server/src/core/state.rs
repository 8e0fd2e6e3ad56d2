use std::sync::Arc;

use shared::AppError;
use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Server state, cheap to clone
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | pool | SQLite connection pool |
/// | jwt_service | token issue/validation |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config: Arc::new(config),
            pool,
            jwt_service,
        }
    }

    /// Open the database (applying migrations) and build the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db.pool))
    }
}

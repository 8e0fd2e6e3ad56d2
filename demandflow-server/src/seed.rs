//! Bootstrap data: admin account, settings row, roles, staff and the viewer
//!
//! Safe to run repeatedly; existing rows are kept and the two accounts get
//! their passwords reset.

use shared::AppError;
use shared::models::{DemandType, User};
use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::core::Config;
use crate::db::repository::{hotel_settings, staff_member, staff_role, user};

pub const VIEWER_USERNAME: &str = "viewer";
pub const VIEWER_PASSWORD: &str = "viewer12345";

/// One member per role
const STAFF: [(&str, &str); 5] = [
    ("Ramesh", "Waiter"),
    ("Sita", "Cleaner"),
    ("Karan", "Maintenance Staff"),
    ("Meera", "Billing Staff"),
    ("Ajay", "Room Service Staff"),
];

/// What a seed run changed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub admin_created: bool,
    pub viewer_created: bool,
    pub roles_created: usize,
    pub staff_created: usize,
}

/// Create or reset an account with a known password
pub async fn ensure_account(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    is_staff: bool,
) -> Result<(User, bool), AppError> {
    let hash = hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    Ok(user::upsert(pool, username, &hash, is_staff).await?)
}

/// Create or reset the non-staff viewer account
pub async fn ensure_viewer(pool: &SqlitePool) -> Result<bool, AppError> {
    let (_, created) = ensure_account(pool, VIEWER_USERNAME, VIEWER_PASSWORD, false).await?;
    Ok(created)
}

pub async fn run(pool: &SqlitePool, config: &Config) -> Result<SeedSummary, AppError> {
    let mut summary = SeedSummary::default();

    let (_, admin_created) =
        ensure_account(pool, &config.admin_username, &config.admin_password, true).await?;
    summary.admin_created = admin_created;
    if admin_created {
        tracing::info!(username = %config.admin_username, "Superuser created");
    } else {
        tracing::info!(username = %config.admin_username, "Superuser updated: password reset");
    }

    hotel_settings::ensure(pool).await?;

    for demand_type in DemandType::ALL {
        let (_, created) = staff_role::get_or_create(pool, demand_type.required_role()).await?;
        summary.roles_created += usize::from(created);
    }

    for (name, role_name) in STAFF {
        let (role, _) = staff_role::get_or_create(pool, role_name).await?;
        let (_, created) = staff_member::get_or_create(pool, name, role.id).await?;
        summary.staff_created += usize::from(created);
    }

    summary.viewer_created = ensure_viewer(pool).await?;

    tracing::info!(
        roles_created = summary.roles_created,
        staff_created = summary.staff_created,
        viewer_created = summary.viewer_created,
        "Seeding complete"
    );
    Ok(summary)
}

//! Hotel Settings Repository (singleton row, id = 1)

use super::RepoResult;
use shared::models::HotelSettings;
use sqlx::SqlitePool;

/// Current settings; a missing row reads as the defaults
pub async fn get(pool: &SqlitePool) -> RepoResult<HotelSettings> {
    let settings = sqlx::query_as::<_, HotelSettings>(
        "SELECT num_tables, num_rooms FROM hotel_settings WHERE id = 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(settings.unwrap_or_default())
}

/// Make sure the singleton row exists (10 tables, 10 rooms when created)
pub async fn ensure(pool: &SqlitePool) -> RepoResult<HotelSettings> {
    let defaults = HotelSettings::default();
    sqlx::query("INSERT OR IGNORE INTO hotel_settings (id, num_tables, num_rooms) VALUES (1, ?, ?)")
        .bind(defaults.num_tables)
        .bind(defaults.num_rooms)
        .execute(pool)
        .await?;
    get(pool).await
}

/// Update the counts; `None` keeps the current value
pub async fn update_counts(
    pool: &SqlitePool,
    num_tables: Option<i64>,
    num_rooms: Option<i64>,
) -> RepoResult<HotelSettings> {
    ensure(pool).await?;
    sqlx::query(
        "UPDATE hotel_settings SET num_tables = COALESCE(?1, num_tables), num_rooms = COALESCE(?2, num_rooms) WHERE id = 1",
    )
    .bind(num_tables)
    .bind(num_rooms)
    .execute(pool)
    .await?;
    get(pool).await
}

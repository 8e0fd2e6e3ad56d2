//! User Repository

use super::RepoResult;
use shared::models::User;
use shared::util::now_millis;
use sqlx::SqlitePool;

/// User row including the password hash; never leaves the server
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub username: String,
    pub hash_pass: String,
    pub is_staff: bool,
    pub is_active: bool,
}

impl From<UserCredentials> for User {
    fn from(row: UserCredentials) -> Self {
        Self {
            id: row.id,
            username: row.username,
            is_staff: row.is_staff,
            is_active: row.is_active,
        }
    }
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<UserCredentials>> {
    let user = sqlx::query_as::<_, UserCredentials>(
        "SELECT id, username, hash_pass, is_staff, is_active FROM users WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, is_staff, is_active FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Create the account or reset it: password, staff flag, active again
///
/// Returns the user and whether it was newly created.
pub async fn upsert(
    pool: &SqlitePool,
    username: &str,
    hash_pass: &str,
    is_staff: bool,
) -> RepoResult<(User, bool)> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(&mut *tx)
        .await?;

    let id = match existing {
        Some(id) => {
            sqlx::query(
                "UPDATE users SET hash_pass = ?, is_staff = ?, is_active = 1 WHERE id = ?",
            )
            .bind(hash_pass)
            .bind(is_staff)
            .bind(id)
            .execute(&mut *tx)
            .await?;
            id
        }
        None => {
            sqlx::query_scalar(
                "INSERT INTO users (username, hash_pass, is_staff, is_active, created_at) VALUES (?, ?, ?, 1, ?) RETURNING id",
            )
            .bind(username)
            .bind(hash_pass)
            .bind(is_staff)
            .bind(now_millis())
            .fetch_one(&mut *tx)
            .await?
        }
    };

    tx.commit().await?;

    let user = User {
        id,
        username: username.to_string(),
        is_staff,
        is_active: true,
    };
    Ok((user, existing.is_none()))
}

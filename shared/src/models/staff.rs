//! Staff Role / Staff Member Models

use serde::{Deserialize, Serialize};

/// Staff role (e.g. "Waiter")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffRole {
    pub id: i64,
    pub name: String,
}

/// Staff member together with its role name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub role_id: i64,
    pub role_name: String,
}

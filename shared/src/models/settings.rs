//! Hotel Settings Model

use serde::{Deserialize, Serialize};

use super::{StaffMember, StaffRole};

pub const DEFAULT_NUM_TABLES: i64 = 10;
pub const DEFAULT_NUM_ROOMS: i64 = 10;

/// Singleton settings row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HotelSettings {
    pub num_tables: i64,
    pub num_rooms: i64,
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            num_tables: DEFAULT_NUM_TABLES,
            num_rooms: DEFAULT_NUM_ROOMS,
        }
    }
}

impl HotelSettings {
    /// Location choices: `Table 1..=N` followed by `Room 101..=100+M`
    pub fn locations(&self) -> Vec<String> {
        let tables = (1..=self.num_tables).map(|i| format!("Table {i}"));
        let rooms = (1..=self.num_rooms).map(|i| format!("Room {}", 100 + i));
        tables.chain(rooms).collect()
    }

    pub fn is_valid_location(&self, location: &str) -> bool {
        self.locations().iter().any(|l| l == location)
    }
}

/// Settings page actions, keyed by the `action` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SettingsAction {
    /// Counts left out keep their current value
    UpdateCounts {
        #[serde(default)]
        num_tables: Option<i64>,
        #[serde(default)]
        num_rooms: Option<i64>,
    },
    AddRole {
        #[serde(default)]
        role_name: Option<String>,
    },
    DeleteRole {
        role_id: i64,
    },
    AddStaff {
        #[serde(default)]
        staff_name: Option<String>,
        #[serde(default)]
        staff_role_id: Option<i64>,
    },
    DeleteStaff {
        staff_id: i64,
    },
}

/// Everything the settings page shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsPage {
    pub settings: HotelSettings,
    pub roles: Vec<StaffRole>,
    pub staff: Vec<StaffMember>,
}

//! Demand Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Food items offered for Food demands
pub const FOOD_ITEMS: &[&str] = &[
    "Pizza",
    "Burger",
    "Sandwich",
    "Pasta",
    "Coffee",
    "Tea",
    "Juice",
    "Rice Plate",
    "Salad",
];

/// Kind of guest request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum DemandType {
    Food,
    Cleaning,
    Maintenance,
    Billing,
    #[serde(rename = "Room Service")]
    #[cfg_attr(feature = "db", sqlx(rename = "Room Service"))]
    RoomService,
}

impl DemandType {
    pub const ALL: [DemandType; 5] = [
        DemandType::Food,
        DemandType::Cleaning,
        DemandType::Maintenance,
        DemandType::Billing,
        DemandType::RoomService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Cleaning => "Cleaning",
            Self::Maintenance => "Maintenance",
            Self::Billing => "Billing",
            Self::RoomService => "Room Service",
        }
    }

    /// Name of the staff role allowed to carry out this kind of demand
    pub fn required_role(&self) -> &'static str {
        match self {
            Self::Food => "Waiter",
            Self::Cleaning => "Cleaner",
            Self::Maintenance => "Maintenance Staff",
            Self::Billing => "Billing Staff",
            Self::RoomService => "Room Service Staff",
        }
    }
}

impl fmt::Display for DemandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemandType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown demand type: {s}"))
    }
}

/// Lifecycle state of a demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum DemandStatus {
    Pending,
    #[serde(rename = "In Progress")]
    #[cfg_attr(feature = "db", sqlx(rename = "In Progress"))]
    InProgress,
    Completed,
}

impl DemandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Pending and In Progress demands keep their assignee busy
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for DemandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Demand row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Demand {
    pub id: i64,
    pub demand_type: DemandType,
    pub description: String,
    pub status: DemandStatus,
    /// Epoch millis, set once on insert
    pub created_at: i64,
    pub expected_completion: Option<i64>,
    /// Set exactly when status becomes Completed
    pub completed_at: Option<i64>,
    pub created_by: i64,
    pub fulfilled_by: Option<i64>,
    pub quantity: Option<i64>,
    pub room_or_table: Option<String>,
    pub assigned_to: Option<i64>,
}

/// Demand joined with the names of the people attached to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DemandView {
    pub id: i64,
    pub demand_type: DemandType,
    pub description: String,
    pub status: DemandStatus,
    pub created_at: i64,
    pub expected_completion: Option<i64>,
    pub completed_at: Option<i64>,
    pub quantity: Option<i64>,
    pub room_or_table: Option<String>,
    pub created_by: i64,
    pub created_by_username: String,
    pub fulfilled_by: Option<i64>,
    pub fulfilled_by_username: Option<String>,
    pub assigned_to: Option<i64>,
    pub assigned_to_name: Option<String>,
    pub assigned_role_name: Option<String>,
}

/// Create demand payload
///
/// Every field is optional at the wire level; the intake rules decide what
/// each demand type actually requires.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandCreate {
    pub demand_type: Option<String>,
    pub description: Option<String>,
    pub food_item: Option<String>,
    pub quantity: Option<i64>,
    pub room_or_table: Option<String>,
    pub assigned_to: Option<i64>,
    /// RFC 3339 or `YYYY-MM-DDTHH:MM` (UTC)
    pub expected_completion: Option<String>,
}

/// Completed demand with its elapsed time rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedDemand {
    #[serde(flatten)]
    pub demand: DemandView,
    pub time_taken: String,
}

/// Eligible role for one demand type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub demand_type: DemandType,
    pub role: String,
}

/// Choices offered by the demand form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandFormOptions {
    pub demand_types: Vec<DemandType>,
    pub food_items: Vec<String>,
    pub locations: Vec<String>,
    /// Staff not assigned to any open demand when the form was built
    pub available_staff: Vec<super::StaffMember>,
    pub role_requirements: Vec<RoleRequirement>,
}

/// Dashboard payload: open demands plus everything needed to file a new one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub demands: Vec<DemandView>,
    pub form: DemandFormOptions,
    pub settings: super::HotelSettings,
}

/// Clear-completed confirmation prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearConfirmation {
    pub count: i64,
    pub prompt: String,
}

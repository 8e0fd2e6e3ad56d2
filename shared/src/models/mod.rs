//! Domain models shared between the server and its clients

pub mod demand;
pub mod settings;
pub mod staff;
pub mod user;

pub use demand::{
    ClearConfirmation, CompletedDemand, Dashboard, Demand, DemandCreate, DemandFormOptions,
    DemandStatus, DemandType, DemandView, FOOD_ITEMS, RoleRequirement,
};
pub use settings::{HotelSettings, SettingsAction, SettingsPage};
pub use staff::{StaffMember, StaffRole};
pub use user::{LoginRequest, LoginResponse, User, UserInfo};

//! Demand intake rules
//!
//! Turns a raw [`DemandCreate`] into a [`ValidDemand`] or a set of
//! field-scoped errors. Everything the rules need from the store is gathered
//! by the caller into an [`IntakeContext`], so the rules themselves are pure.

use std::collections::BTreeMap;

use shared::AppError;
use shared::models::{DemandCreate, DemandType, FOOD_ITEMS, HotelSettings, StaffMember, StaffRole};

use crate::utils::time::parse_timestamp;
use crate::utils::validation::{MAX_DESCRIPTION_LEN, non_blank};

pub const FORM_ERROR_NOTICE: &str = "Please correct the errors below.";

const REQUIRED: &str = "This field is required.";
const INVALID_ASSIGNEE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// Field name -> message, keyed alphabetically by field name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Keeps the first error per field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::validation(FORM_ERROR_NOTICE).with_detail("errors", serde_json::json!(errors.0))
    }
}

/// Store state the rules look at
#[derive(Debug, Clone, Copy)]
pub struct IntakeContext<'a> {
    pub settings: &'a HotelSettings,
    pub roles: &'a [StaffRole],
    /// The requested assignee, if `assigned_to` named an existing member
    pub assignee: Option<&'a StaffMember>,
    /// Whether that assignee already holds an open demand
    pub assignee_busy: bool,
}

/// Demand that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDemand {
    pub demand_type: DemandType,
    pub description: String,
    pub quantity: Option<i64>,
    pub room_or_table: String,
    pub assigned_to: Option<i64>,
    pub expected_completion: Option<i64>,
}

fn invalid_choice(value: &str) -> String {
    format!("Select a valid choice. {value} is not one of the available choices.")
}

/// Apply the intake rules to a submission
pub fn validate(input: &DemandCreate, ctx: IntakeContext<'_>) -> Result<ValidDemand, FieldErrors> {
    let mut errors = FieldErrors::default();

    let demand_type = match non_blank(input.demand_type.as_deref()) {
        None => {
            errors.add("demand_type", REQUIRED);
            None
        }
        Some(raw) => match raw.parse::<DemandType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.add("demand_type", invalid_choice(raw));
                None
            }
        },
    };

    if let Some(q) = input.quantity
        && q < 1
    {
        errors.add("quantity", "Ensure this value is greater than or equal to 1.");
    }

    let room_or_table = match non_blank(input.room_or_table.as_deref()) {
        None => {
            errors.add("room_or_table", "Please enter room/table number.");
            None
        }
        Some(loc) if !ctx.settings.is_valid_location(loc) => {
            errors.add("room_or_table", invalid_choice(loc));
            None
        }
        Some(loc) => Some(loc.to_string()),
    };

    let expected_completion = match non_blank(input.expected_completion.as_deref()) {
        None => None,
        Some(raw) => {
            let parsed = parse_timestamp(raw);
            if parsed.is_none() {
                errors.add("expected_completion", "Enter a valid date/time.");
            }
            parsed
        }
    };

    if input.assigned_to.is_some() && (ctx.assignee.is_none() || ctx.assignee_busy) {
        errors.add("assigned_to", INVALID_ASSIGNEE);
    }

    let mut quantity = input.quantity;
    let mut description = non_blank(input.description.as_deref()).map(str::to_string);

    match demand_type {
        Some(DemandType::Food) => {
            let qty = *quantity.get_or_insert(1);
            match non_blank(input.food_item.as_deref()) {
                None => errors.add("food_item", "Please choose a food item."),
                Some(item) if !FOOD_ITEMS.contains(&item) => {
                    errors.add("food_item", invalid_choice(item))
                }
                Some(item) => description = Some(format!("{item} (x{qty})")),
            }
        }
        Some(_) => {
            if description.is_none() {
                errors.add("description", "Please enter a short description.");
            }
        }
        None => {}
    }

    if let Some(desc) = &description {
        let len = desc.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            errors.add(
                "description",
                format!("Ensure this value has at most {MAX_DESCRIPTION_LEN} characters (it has {len})."),
            );
        }
    }

    if let (Some(demand_type), Some(assignee)) = (demand_type, ctx.assignee) {
        let required = demand_type.required_role();
        // Only enforced when the required role exists at all
        if let Some(role) = ctx.roles.iter().find(|r| r.name == required)
            && assignee.role_id != role.id
        {
            errors.add(
                "assigned_to",
                format!("Please choose a staff member with role {required}."),
            );
        }
    }

    match (demand_type, description, room_or_table) {
        (Some(demand_type), Some(description), Some(room_or_table)) if errors.is_empty() => {
            Ok(ValidDemand {
                demand_type,
                description,
                quantity,
                room_or_table,
                assigned_to: ctx.assignee.map(|a| a.id),
                expected_completion,
            })
        }
        _ => Err(errors),
    }
}

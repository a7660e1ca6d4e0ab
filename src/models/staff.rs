//! Staff assignment models.
//!
//! A list of assignments represents the full field crew for one estimation.
//! The same role may appear in more than one entry; calculators aggregate
//! per-role costs by summing matching entries' contributions before
//! multiplying by the catalog rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::numeric::{lenient_count, lenient_decimal};

/// A staff role and headcount for the HRS and Logistics modules.
///
/// Legacy single-role inputs are equivalent to one assignment with
/// `count = 1`.
///
/// # Example
///
/// ```
/// use fieldcost_engine::models::StaffAssignment;
///
/// let assignment = StaffAssignment::new("Technician", 2);
/// assert_eq!(assignment.role, "Technician");
/// assert_eq!(assignment.count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAssignment {
    /// The labor role name, matched against the catalog.
    pub role: String,
    /// The number of staff in this role.
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u32,
}

impl StaffAssignment {
    /// Creates a new assignment.
    pub fn new(role: impl Into<String>, count: u32) -> Self {
        Self {
            role: role.into(),
            count,
        }
    }
}

/// A staff role, headcount, and per-person hours for the Lab Fees module.
///
/// Lab Fees staff labor is costed as `count × hours_per_person × rate`,
/// with no rate multiplier applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabStaffAssignment {
    /// The labor role name, matched against the catalog.
    pub role: String,
    /// The number of staff in this role.
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u32,
    /// Field-collection hours per person.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub hours_per_person: Decimal,
}

impl LabStaffAssignment {
    /// Creates a new assignment.
    pub fn new(role: impl Into<String>, count: u32, hours_per_person: Decimal) -> Self {
        Self {
            role: role.into(),
            count,
            hours_per_person,
        }
    }

    /// Total hours contributed by this assignment.
    pub fn total_hours(&self) -> Decimal {
        Decimal::from(self.count) * self.hours_per_person
    }
}

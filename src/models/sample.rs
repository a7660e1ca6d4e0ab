//! Sample line models for the HRS module.
//!
//! Each line carries raw user-entered quantities for one component row.
//! Default rows and user-added custom rows share the same shapes; the HRS
//! calculator sums unit quantities across all lines of a category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::numeric::{lenient_count, lenient_decimal};

/// The unit-of-measure label for an asbestos component row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitLabel {
    /// Counted per room.
    Rooms,
    /// Counted per linear foot.
    #[serde(rename = "LF")]
    Lf,
    /// Counted per each.
    #[serde(rename = "EA")]
    Ea,
}

/// An asbestos component row.
///
/// The bulk-sample quantity for a row is `actuals × bulks_per_unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsbestosLine {
    /// The building component this row describes (e.g., "Ceiling Tile").
    pub component_name: String,
    /// The unit of measure for `actuals`.
    pub unit_label: UnitLabel,
    /// The surveyed quantity in `unit_label` units.
    #[serde(default, deserialize_with = "lenient_count")]
    pub actuals: u32,
    /// Bulk samples collected per unit.
    #[serde(default, deserialize_with = "lenient_count")]
    pub bulks_per_unit: u32,
}

impl AsbestosLine {
    /// Bulk samples for this row.
    pub fn bulk_samples(&self) -> u32 {
        self.actuals.saturating_mul(self.bulks_per_unit)
    }
}

/// A lead component row.
///
/// XRF shots and chips/wipes are independent quantities; the calculator
/// totals each across all lines separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadLine {
    /// The component this row describes.
    pub component_name: String,
    /// Number of XRF shots (field analysis, never sent to the lab).
    #[serde(default, deserialize_with = "lenient_count")]
    pub xrf_shots: u32,
    /// Number of paint chip / dust wipe samples.
    #[serde(default, deserialize_with = "lenient_count")]
    pub chips_wipes: u32,
}

/// A mold component row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoldLine {
    /// The component or location this row describes.
    pub component_name: String,
    /// Number of tape-lift samples.
    #[serde(default, deserialize_with = "lenient_count")]
    pub tape_lift: u32,
    /// Number of spore-trap samples.
    #[serde(default, deserialize_with = "lenient_count")]
    pub spore_trap: u32,
    /// Number of culturable samples.
    #[serde(default, deserialize_with = "lenient_count")]
    pub culturable: u32,
}

impl MoldLine {
    /// Total mold samples for this row.
    pub fn total_samples(&self) -> u32 {
        self.tape_lift
            .saturating_add(self.spore_trap)
            .saturating_add(self.culturable)
    }
}

/// A flat manual-hours category (e.g., Program Manager oversight).
///
/// These are costed independently as `hours × rate(role)` and never pass
/// through the efficiency factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalLaborLine {
    /// The labor role to cost these hours against.
    pub role: String,
    /// The flat hours entered for this category.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub hours: Decimal,
}

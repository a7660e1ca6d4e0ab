//! Result models for the estimation engine.
//!
//! Each calculator returns a flat result record containing every line-item
//! total it computed. The serialized field names are a data contract relied
//! on by downstream snapshot storage and must not change. Results are
//! immutable once computed: a new input set always produces a new result.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::staff::StaffAssignment;

/// A warning generated during a calculation.
///
/// Warnings surface conditions that do not stop the calculation but that the
/// caller needs to see — most importantly a role or test with no catalog
/// rate, whose cost contribution is a legitimate $0 that must be
/// distinguishable from "rate exists and is zero".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl CalculationWarning {
    /// Warning for a staff role with no labor-rate catalog entry.
    pub fn missing_labor_rate(role: &str) -> Self {
        Self {
            code: "MISSING_LABOR_RATE".to_string(),
            message: format!("No hourly rate found for role '{}'; cost contribution is $0", role),
            severity: "medium".to_string(),
        }
    }

    /// Warning for a test/turnaround pair with no catalog price.
    pub fn missing_test_rate(test_name: &str, turnaround_label: &str) -> Self {
        Self {
            code: "MISSING_TEST_RATE".to_string(),
            message: format!(
                "No catalog price found for test '{}' at turnaround '{}'",
                test_name, turnaround_label
            ),
            severity: "medium".to_string(),
        }
    }
}

/// The result of an HRS sample-hours calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrsResult {
    /// Hours for asbestos bulk sampling.
    pub asbestos_hours: Decimal,
    /// Hours for lead XRF field analysis.
    pub xrf_hours: Decimal,
    /// Hours for lead chip/wipe sampling.
    pub lead_hours: Decimal,
    /// Hours for mold sampling.
    pub mold_hours: Decimal,
    /// Total field sampling hours (sum of the four categories).
    pub field_hours: Decimal,
    /// Flat ORM (Other Regulated Materials) hours.
    pub orm_hours: Decimal,
    /// `field_hours + orm_hours`, before the efficiency factor.
    pub suggested_hours_base: Decimal,
    /// `field_hours × efficiency_factor + orm_hours`.
    pub suggested_hours_final: Decimal,
    /// The efficiency factor that was applied to field hours.
    pub efficiency_factor: Decimal,
    /// Per-role staff labor cost, aggregated across duplicate role entries.
    pub staff_labor_costs: BTreeMap<String, Decimal>,
    /// Sum of all per-role staff labor costs.
    pub total_staff_labor_cost: Decimal,
    /// Cost of flat additional-labor categories (not efficiency-scaled).
    pub additional_labor_cost: Decimal,
    /// `total_staff_labor_cost + additional_labor_cost`.
    pub total_labor_cost: Decimal,
    /// Sample-count totals by output key, consumed by the Lab Fees
    /// derivation (e.g., `asbestos_bulk_samples`).
    pub sample_totals: BTreeMap<String, u32>,
    /// Echo of the staff input for downstream display.
    pub staff_breakdown: Vec<StaffAssignment>,
    /// Warnings raised during calculation.
    pub warnings: Vec<CalculationWarning>,
}

/// The result of a logistics calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsResult {
    /// Total roundtrip-leg miles.
    pub roundtrip_miles: Decimal,
    /// Total daily-leg miles.
    pub daily_miles: Decimal,
    /// `roundtrip_miles + daily_miles`.
    pub total_miles: Decimal,
    /// Roundtrip-leg drive hours (explicit or auto-calculated).
    pub roundtrip_drive_hours: Decimal,
    /// Daily-leg drive hours (explicit or auto-calculated).
    pub daily_drive_hours: Decimal,
    /// `roundtrip_drive_hours + daily_drive_hours`.
    pub total_driving_labor_hours: Decimal,
    /// Fuel cost for the roundtrip leg.
    pub roundtrip_fuel_cost: Decimal,
    /// Fuel cost for the daily leg.
    pub daily_fuel_cost: Decimal,
    /// Driving labor cost across all staff, after the rate multiplier.
    pub total_driving_labor_cost: Decimal,
    /// Fuel plus driving labor.
    pub total_driving_cost: Decimal,
    /// Flight ticket cost.
    pub ticket_cost: Decimal,
    /// Travel time per person in hours, including the ground buffer.
    pub travel_time_per_person: Decimal,
    /// Flight travel labor cost across all staff, after the multiplier.
    pub flight_labor_cost: Decimal,
    /// Overnight layover room cost.
    pub layover_cost: Decimal,
    /// `ticket_cost + flight_labor_cost + layover_cost`.
    pub total_flight_cost: Decimal,
    /// Vehicle rental cost including any fuel estimate.
    pub total_rental_cost: Decimal,
    /// Lodging room cost.
    pub room_cost: Decimal,
    /// Per-diem cost.
    pub per_diem_cost: Decimal,
    /// The rate multiplier applied to staff labor cost terms.
    pub rate_multiplier: Decimal,
    /// Per-role staff labor cost (driving + flight travel), aggregated.
    pub staff_labor_costs: BTreeMap<String, Decimal>,
    /// Echo of the staff input for downstream display.
    pub staff_breakdown: Vec<StaffAssignment>,
    /// Warnings raised during calculation.
    pub warnings: Vec<CalculationWarning>,
    /// Sum of driving, flight, rental, room, and per-diem costs.
    pub grand_total: Decimal,
}

/// The result of a Lab Fees calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabFeesResult {
    /// Total ordered samples across lines with a positive quantity.
    pub total_samples: u32,
    /// Sum of `quantity × unit_price` across all lines.
    pub total_lab_fees_cost: Decimal,
    /// Per-role field-collection labor cost, aggregated.
    pub staff_labor_costs: BTreeMap<String, Decimal>,
    /// Sum of all per-role labor costs.
    pub total_staff_labor_cost: Decimal,
    /// `total_lab_fees_cost + total_staff_labor_cost`.
    pub total_cost: Decimal,
    /// Echo of the staff input for downstream display.
    pub staff_breakdown: Vec<StaffAssignment>,
    /// Warnings raised during calculation.
    pub warnings: Vec<CalculationWarning>,
}

/// The combined result of all modules for one project estimation.
///
/// # Example
///
/// ```
/// use fieldcost_engine::models::EstimationSummary;
///
/// let summary = EstimationSummary::assemble(None, None, None);
/// assert_eq!(summary.grand_total, rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationSummary {
    /// Unique identifier for this estimation run.
    pub estimation_id: Uuid,
    /// When the estimation was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
    /// The HRS module result, if computed.
    pub hrs: Option<HrsResult>,
    /// The Logistics module result, if computed.
    pub logistics: Option<LogisticsResult>,
    /// The Lab Fees module result, if computed.
    pub lab_fees: Option<LabFeesResult>,
    /// Sum of the module totals present.
    pub grand_total: Decimal,
}

impl EstimationSummary {
    /// Combines per-module results into a project summary.
    ///
    /// The grand total sums exactly the module totals that are present:
    /// HRS `total_labor_cost`, Logistics `grand_total`, and Lab Fees
    /// `total_cost`.
    pub fn assemble(
        hrs: Option<HrsResult>,
        logistics: Option<LogisticsResult>,
        lab_fees: Option<LabFeesResult>,
    ) -> Self {
        let mut grand_total = Decimal::ZERO;
        if let Some(hrs) = &hrs {
            grand_total += hrs.total_labor_cost;
        }
        if let Some(logistics) = &logistics {
            grand_total += logistics.grand_total;
        }
        if let Some(lab_fees) = &lab_fees {
            grand_total += lab_fees.total_cost;
        }

        Self {
            estimation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            hrs,
            logistics,
            lab_fees,
            grand_total,
        }
    }
}

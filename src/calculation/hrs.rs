//! HRS sample-hours calculation.
//!
//! Converts sample-type quantities into labor hours and labor cost. Each
//! category's hours are `minutes_used × total_units / 60`; the efficiency
//! factor scales field (sampling) hours only, never the flat ORM hours and
//! never the additional manual-hours categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::catalog::RateCatalog;
use crate::models::numeric::lenient_decimal;
use crate::models::{
    AdditionalLaborLine, AsbestosLine, CalculationWarning, HrsResult, LeadLine, MoldLine,
    StaffAssignment,
};

use super::sample_minutes::{OverrideMinutes, SampleCategory, SampleMinutes};

/// Sample-total output key for asbestos bulk samples.
pub const KEY_ASBESTOS_BULK_SAMPLES: &str = "asbestos_bulk_samples";
/// Sample-total output key for lead XRF shots (field analysis only).
pub const KEY_LEAD_XRF_SHOTS: &str = "lead_xrf_shots";
/// Sample-total output key for lead chips/wipes.
pub const KEY_LEAD_CHIPS_WIPES: &str = "lead_chips_wipes";
/// Sample-total output key for mold tape lifts.
pub const KEY_MOLD_TAPE_LIFT: &str = "mold_tape_lift";
/// Sample-total output key for mold spore traps.
pub const KEY_MOLD_SPORE_TRAP: &str = "mold_spore_trap";
/// Sample-total output key for mold culturable samples.
pub const KEY_MOLD_CULTURABLE: &str = "mold_culturable";

/// The input snapshot for one HRS calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrsInput {
    /// Asbestos component rows (defaults plus user-added custom rows).
    #[serde(default)]
    pub asbestos_lines: Vec<AsbestosLine>,
    /// Lead component rows.
    #[serde(default)]
    pub lead_lines: Vec<LeadLine>,
    /// Mold component rows.
    #[serde(default)]
    pub mold_lines: Vec<MoldLine>,
    /// Per-category minutes-per-sample overrides.
    #[serde(default)]
    pub override_minutes: OverrideMinutes,
    /// Flat ORM hours, independent of per-sample unit counts.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub orm_hours: Decimal,
    /// The efficiency factor applied to field hours (default 1.0).
    #[serde(default = "default_efficiency_factor")]
    pub efficiency_factor: Decimal,
    /// The field crew for this estimation.
    #[serde(default)]
    pub staff: Vec<StaffAssignment>,
    /// Flat additional-labor categories (e.g., Program Manager).
    #[serde(default)]
    pub additional_labor: Vec<AdditionalLaborLine>,
}

fn default_efficiency_factor() -> Decimal {
    Decimal::ONE
}

// The serde attribute only covers deserialization; programmatic construction
// must also start at the 1.0 (no change) factor.
impl Default for HrsInput {
    fn default() -> Self {
        Self {
            asbestos_lines: vec![],
            lead_lines: vec![],
            mold_lines: vec![],
            override_minutes: OverrideMinutes::default(),
            orm_hours: Decimal::ZERO,
            efficiency_factor: default_efficiency_factor(),
            staff: vec![],
            additional_labor: vec![],
        }
    }
}

fn hours_for(minutes: Decimal, units: u64) -> Decimal {
    minutes * Decimal::from(units) / Decimal::from(60)
}

/// Computes the HRS result for one input snapshot.
///
/// Missing labor rates contribute $0 and are surfaced as warnings; they are
/// never an error.
///
/// # Example
///
/// ```
/// use fieldcost_engine::calculation::{SampleMinutes, compute_hrs, HrsInput};
/// use fieldcost_engine::catalog::RateCatalog;
/// use fieldcost_engine::models::{AsbestosLine, UnitLabel};
/// use rust_decimal::Decimal;
///
/// let input = HrsInput {
///     asbestos_lines: vec![AsbestosLine {
///         component_name: "Floor Tile".to_string(),
///         unit_label: UnitLabel::Rooms,
///         actuals: 4,
///         bulks_per_unit: 3,
///     }],
///     ..Default::default()
/// };
/// let catalog = RateCatalog::new(vec![], vec![]);
///
/// let result = compute_hrs(&input, &catalog, &SampleMinutes::default());
/// // 12 bulk samples at 15 min each = 3.0 hours
/// assert_eq!(result.asbestos_hours, Decimal::from(3));
/// ```
pub fn compute_hrs(
    input: &HrsInput,
    catalog: &RateCatalog,
    defaults: &SampleMinutes,
) -> HrsResult {
    let overrides = &input.override_minutes;

    let asbestos_units: u64 = input
        .asbestos_lines
        .iter()
        .map(|l| l.bulk_samples() as u64)
        .sum();
    let xrf_units: u64 = input.lead_lines.iter().map(|l| l.xrf_shots as u64).sum();
    let lead_units: u64 = input.lead_lines.iter().map(|l| l.chips_wipes as u64).sum();
    let tape_lift_units: u64 = input.mold_lines.iter().map(|l| l.tape_lift as u64).sum();
    let spore_trap_units: u64 = input.mold_lines.iter().map(|l| l.spore_trap as u64).sum();
    let culturable_units: u64 = input.mold_lines.iter().map(|l| l.culturable as u64).sum();
    let mold_units = tape_lift_units + spore_trap_units + culturable_units;

    let asbestos_hours = hours_for(
        overrides.resolve(SampleCategory::Asbestos, defaults),
        asbestos_units,
    );
    let xrf_hours = hours_for(overrides.resolve(SampleCategory::Xrf, defaults), xrf_units);
    let lead_hours = hours_for(overrides.resolve(SampleCategory::Lead, defaults), lead_units);
    let mold_hours = hours_for(overrides.resolve(SampleCategory::Mold, defaults), mold_units);

    let field_hours = asbestos_hours + xrf_hours + lead_hours + mold_hours;
    let suggested_hours_base = field_hours + input.orm_hours;
    let suggested_hours_final = field_hours * input.efficiency_factor + input.orm_hours;

    let mut warnings = Vec::new();
    let mut staff_labor_costs: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_staff_labor_cost = Decimal::ZERO;

    for assignment in &input.staff {
        let cost = match catalog.labor_rate(&assignment.role) {
            Some(rate) => suggested_hours_final * rate * Decimal::from(assignment.count),
            None => {
                warn!(role = %assignment.role, "No labor rate for HRS staff role");
                warnings.push(CalculationWarning::missing_labor_rate(&assignment.role));
                Decimal::ZERO
            }
        };
        *staff_labor_costs
            .entry(assignment.role.clone())
            .or_insert(Decimal::ZERO) += cost;
        total_staff_labor_cost += cost;
    }

    let mut additional_labor_cost = Decimal::ZERO;
    for line in &input.additional_labor {
        match catalog.labor_rate(&line.role) {
            Some(rate) => additional_labor_cost += line.hours * rate,
            None => {
                warn!(role = %line.role, "No labor rate for additional labor role");
                warnings.push(CalculationWarning::missing_labor_rate(&line.role));
            }
        }
    }

    let mut sample_totals = BTreeMap::new();
    sample_totals.insert(KEY_ASBESTOS_BULK_SAMPLES.to_string(), asbestos_units as u32);
    sample_totals.insert(KEY_LEAD_XRF_SHOTS.to_string(), xrf_units as u32);
    sample_totals.insert(KEY_LEAD_CHIPS_WIPES.to_string(), lead_units as u32);
    sample_totals.insert(KEY_MOLD_TAPE_LIFT.to_string(), tape_lift_units as u32);
    sample_totals.insert(KEY_MOLD_SPORE_TRAP.to_string(), spore_trap_units as u32);
    sample_totals.insert(KEY_MOLD_CULTURABLE.to_string(), culturable_units as u32);

    HrsResult {
        asbestos_hours,
        xrf_hours,
        lead_hours,
        mold_hours,
        field_hours,
        orm_hours: input.orm_hours,
        suggested_hours_base,
        suggested_hours_final,
        efficiency_factor: input.efficiency_factor,
        staff_labor_costs,
        total_staff_labor_cost,
        additional_labor_cost,
        total_labor_cost: total_staff_labor_cost + additional_labor_cost,
        sample_totals,
        staff_breakdown: input.staff.clone(),
        warnings,
    }
}

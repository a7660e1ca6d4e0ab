//! Laboratory analysis fee calculation.
//!
//! Order lines carry a `(test_name, turnaround_label)` key; unit prices
//! resolve against the catalog across all loaded categories, since derived or
//! previously-entered rows may belong to a different category than the one a
//! caller is currently working in. Field-collection staff labor is costed at
//! full rate, with no project multiplier.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::catalog::RateCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationWarning, LabFeesResult, LabOrderLine, LabStaffAssignment, StaffAssignment};

/// Resolves the unit price for one order line.
///
/// A test present in the catalog prices from its own rates list; a turnaround
/// label absent from that list is a caller bug and fails the calculation. A
/// test absent from the catalog entirely (a legacy or hand-entered row) keeps
/// the price stored on the line.
fn resolve_unit_price(
    line: &LabOrderLine,
    catalog: &RateCatalog,
    warnings: &mut Vec<CalculationWarning>,
) -> EngineResult<Decimal> {
    match catalog.find_test_by_name(&line.test_name) {
        Some(test) => match test.rate_for(&line.turnaround_label) {
            Some(price) => Ok(price),
            None => Err(EngineError::UnknownTurnaround {
                test_name: line.test_name.clone(),
                turnaround_label: line.turnaround_label.clone(),
            }),
        },
        None => {
            if line.unit_price.is_zero() {
                warn!(
                    test = %line.test_name,
                    turnaround = %line.turnaround_label,
                    "No catalog rate for lab order line"
                );
                warnings.push(CalculationWarning::missing_test_rate(
                    &line.test_name,
                    &line.turnaround_label,
                ));
            }
            Ok(line.unit_price)
        }
    }
}

/// Computes the lab fees result for a set of order lines and the
/// field-collection crew.
///
/// Lines with zero quantity contribute nothing to the sample count or cost.
/// Fails only on an order line whose test exists in the catalog but whose
/// turnaround label is absent from that test's own rates list.
pub fn compute_lab_fees(
    order_lines: &[LabOrderLine],
    staff: &[LabStaffAssignment],
    catalog: &RateCatalog,
) -> EngineResult<LabFeesResult> {
    let mut warnings = Vec::new();

    let mut total_samples: u32 = 0;
    let mut total_lab_fees_cost = Decimal::ZERO;

    for line in order_lines {
        if line.quantity == 0 {
            continue;
        }
        let unit_price = resolve_unit_price(line, catalog, &mut warnings)?;
        total_samples = total_samples.saturating_add(line.quantity);
        total_lab_fees_cost += Decimal::from(line.quantity) * unit_price;
    }

    let mut staff_labor_costs: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_staff_labor_cost = Decimal::ZERO;

    for assignment in staff {
        let cost = match catalog.labor_rate(&assignment.role) {
            Some(rate) => assignment.total_hours() * rate,
            None => {
                warn!(role = %assignment.role, "No labor rate for lab staff role");
                warnings.push(CalculationWarning::missing_labor_rate(&assignment.role));
                Decimal::ZERO
            }
        };
        *staff_labor_costs
            .entry(assignment.role.clone())
            .or_insert(Decimal::ZERO) += cost;
        total_staff_labor_cost += cost;
    }

    let total_cost = total_lab_fees_cost + total_staff_labor_cost;

    debug!(%total_cost, total_samples, "Computed lab fees estimate");

    Ok(LabFeesResult {
        total_samples,
        total_lab_fees_cost,
        staff_labor_costs,
        total_staff_labor_cost,
        total_cost,
        staff_breakdown: staff
            .iter()
            .map(|a| StaffAssignment::new(&a.role, a.count))
            .collect(),
        warnings,
    })
}

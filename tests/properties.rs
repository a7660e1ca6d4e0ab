//! Property-based tests for the calculation invariants.
//!
//! These exercise the algebraic properties the calculators guarantee for
//! arbitrary non-negative inputs, rather than specific worked examples.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use fieldcost_engine::calculation::{
    DerivationMapping, HrsInput, KEY_ASBESTOS_BULK_SAMPLES, KEY_LEAD_XRF_SHOTS, SampleMinutes,
    apply_derivation, compute_hrs, compute_lab_fees, derive,
};
use fieldcost_engine::catalog::{LabTest, LaborRate, RateCatalog, TestRate, Turnaround};
use fieldcost_engine::models::{AsbestosLine, LabOrderLine, LabStaffAssignment, UnitLabel};

fn catalog() -> RateCatalog {
    RateCatalog::new(
        vec![LaborRate {
            labor_role: "Technician".to_string(),
            hourly_rate: Decimal::from(40),
        }],
        vec![LabTest {
            id: "asb_plm_bulk".to_string(),
            name: "PLM Bulk Asbestos".to_string(),
            category: "Asbestos".to_string(),
            rates: vec![TestRate {
                turn_time: Turnaround {
                    label: "3-5 Day".to_string(),
                    hours: Decimal::from(96),
                },
                price: Decimal::new(950, 2),
            }],
        }],
    )
}

fn asbestos_input(actuals: u32, bulks_per_unit: u32) -> HrsInput {
    HrsInput {
        asbestos_lines: vec![AsbestosLine {
            component_name: "Component".to_string(),
            unit_label: UnitLabel::Ea,
            actuals,
            bulks_per_unit,
        }],
        ..Default::default()
    }
}

proptest! {
    // Doubling actuals (bulks_per_unit fixed) doubles the bulk-sample total
    // and the category hours.
    #[test]
    fn hrs_hours_are_linear_in_quantity(actuals in 0u32..5_000, bulks in 0u32..20) {
        let catalog = catalog();
        let defaults = SampleMinutes::default();

        let single = compute_hrs(&asbestos_input(actuals, bulks), &catalog, &defaults);
        let doubled = compute_hrs(&asbestos_input(actuals * 2, bulks), &catalog, &defaults);

        prop_assert_eq!(
            doubled.sample_totals[KEY_ASBESTOS_BULK_SAMPLES],
            2 * single.sample_totals[KEY_ASBESTOS_BULK_SAMPLES]
        );
        prop_assert_eq!(doubled.asbestos_hours, Decimal::from(2) * single.asbestos_hours);
    }

    // suggested_hours_final == suggested_hours_base whenever the efficiency
    // factor is exactly 1.0.
    #[test]
    fn hrs_final_equals_base_at_unit_efficiency(
        actuals in 0u32..5_000,
        bulks in 0u32..20,
        orm_tenths in 0u32..500,
    ) {
        let mut input = asbestos_input(actuals, bulks);
        input.orm_hours = Decimal::new(orm_tenths as i64, 1);

        let result = compute_hrs(&input, &catalog(), &SampleMinutes::default());
        prop_assert_eq!(result.suggested_hours_base, result.suggested_hours_final);
    }

    // Derivation is idempotent: the same totals always yield an identical map.
    #[test]
    fn derivation_is_idempotent(bulks in 0u32..100_000, xrf in 0u32..100_000) {
        let mut totals = BTreeMap::new();
        totals.insert(KEY_ASBESTOS_BULK_SAMPLES.to_string(), bulks);
        totals.insert(KEY_LEAD_XRF_SHOTS.to_string(), xrf);

        let catalog = catalog();
        let mapping = DerivationMapping::default();

        let first = derive(&totals, &catalog, &mapping);
        let second = derive(&totals, &catalog, &mapping);
        prop_assert_eq!(first, second);
    }

    // Empty-target mapping entries never appear in the derived set.
    #[test]
    fn derivation_never_emits_field_analysis_rows(xrf in 1u32..100_000) {
        let mut totals = BTreeMap::new();
        totals.insert(KEY_LEAD_XRF_SHOTS.to_string(), xrf);

        let derived = derive(&totals, &catalog(), &DerivationMapping::default());
        prop_assert!(derived.is_empty());
    }

    // A manually-edited row survives any subsequent re-derivation unchanged.
    #[test]
    fn manual_rows_survive_rederivation(bulks in 1u32..100_000, edited in 0u32..100_000) {
        let catalog = catalog();
        let mapping = DerivationMapping::default();
        let mut totals = BTreeMap::new();
        totals.insert(KEY_ASBESTOS_BULK_SAMPLES.to_string(), bulks);
        let derived = derive(&totals, &catalog, &mapping);

        let mut lines = Vec::new();
        apply_derivation(&mut lines, &derived, &catalog);
        prop_assert_eq!(lines.len(), 1);

        lines[0].manual_edit(edited);
        apply_derivation(&mut lines, &derived, &catalog);

        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].quantity, edited);
        prop_assert!(!lines[0].derived_from_hrs);
    }

    // total_cost decomposes exactly into lab fees plus staff labor.
    #[test]
    fn lab_fees_total_is_exactly_fees_plus_labor(
        quantity in 0u32..10_000,
        price_cents in 0u32..100_000,
        count in 0u32..20,
        hours_tenths in 0u32..500,
    ) {
        let lines = vec![LabOrderLine::manual(
            "custom",
            "Custom Panel",
            "24 hr",
            Decimal::new(price_cents as i64, 2),
            quantity,
        )];
        let staff = vec![LabStaffAssignment::new(
            "Technician",
            count,
            Decimal::new(hours_tenths as i64, 1),
        )];

        let result = compute_lab_fees(&lines, &staff, &catalog()).unwrap();
        prop_assert_eq!(
            result.total_cost,
            result.total_lab_fees_cost + result.total_staff_labor_cost
        );
    }
}

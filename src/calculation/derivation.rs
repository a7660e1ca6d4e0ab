//! HRS → Lab Fees quantity derivation.
//!
//! A fixed mapping table ties each HRS sample-total key to one catalog
//! `(category, test, turnaround)` triple. Derivation is a pure function of
//! the HRS sample totals, the catalog, and the mapping; it is invoked only on
//! explicit caller action and never runs automatically. Quantities pass
//! through one-to-one, with no rounding or scaling.

use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::RateCatalog;
use crate::models::{LabOrderLine, OrderKey};

use super::hrs::{
    KEY_ASBESTOS_BULK_SAMPLES, KEY_LEAD_CHIPS_WIPES, KEY_LEAD_XRF_SHOTS, KEY_MOLD_CULTURABLE,
    KEY_MOLD_SPORE_TRAP, KEY_MOLD_TAPE_LIFT,
};

/// The catalog triple an HRS output key derives into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTarget {
    /// The catalog service category (e.g., "Asbestos").
    pub service_category: String,
    /// The test name within that category.
    pub test_name: String,
    /// The turnaround label within that test.
    pub turnaround_label: String,
}

impl MappingTarget {
    fn new(
        service_category: impl Into<String>,
        test_name: impl Into<String>,
        turnaround_label: impl Into<String>,
    ) -> Self {
        Self {
            service_category: service_category.into(),
            test_name: test_name.into(),
            turnaround_label: turnaround_label.into(),
        }
    }
}

/// One row of the derivation mapping table.
///
/// An entry with no target marks an HRS output that never becomes a lab line
/// item (field-analysis-only categories such as lead XRF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// The HRS sample-totals key this entry reads.
    pub hrs_output_key: String,
    /// The catalog triple to derive into, or `None` for field-analysis keys.
    pub target: Option<MappingTarget>,
}

/// The full HRS → Lab Fees mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationMapping {
    entries: Vec<MappingEntry>,
}

impl DerivationMapping {
    /// Creates a mapping from explicit entries.
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    /// The mapping entries, in table order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }
}

impl Default for DerivationMapping {
    /// The standard mapping table.
    ///
    /// XRF shots are analyzed in the field and have no lab counterpart.
    fn default() -> Self {
        Self::new(vec![
            MappingEntry {
                hrs_output_key: KEY_ASBESTOS_BULK_SAMPLES.to_string(),
                target: Some(MappingTarget::new("Asbestos", "PLM Bulk Asbestos", "3-5 Day")),
            },
            MappingEntry {
                hrs_output_key: KEY_LEAD_XRF_SHOTS.to_string(),
                target: None,
            },
            MappingEntry {
                hrs_output_key: KEY_LEAD_CHIPS_WIPES.to_string(),
                target: Some(MappingTarget::new("Lead", "Lead Paint Chip", "3-5 Day")),
            },
            MappingEntry {
                hrs_output_key: KEY_MOLD_TAPE_LIFT.to_string(),
                target: Some(MappingTarget::new("Mold", "Tape Lift", "48 hr")),
            },
            MappingEntry {
                hrs_output_key: KEY_MOLD_SPORE_TRAP.to_string(),
                target: Some(MappingTarget::new("Mold", "Spore Trap", "48 hr")),
            },
            MappingEntry {
                hrs_output_key: KEY_MOLD_CULTURABLE.to_string(),
                target: Some(MappingTarget::new("Mold", "Culturable Air", "3-5 Day")),
            },
        ])
    }
}

/// Derives Lab Fees quantities from HRS sample totals.
///
/// Pure and idempotent: the same totals, catalog, and mapping always yield an
/// identical map. Entries with no target are skipped, zero quantities are
/// skipped, and entries whose catalog triple cannot be located are silently
/// omitted rather than failing the derivation.
pub fn derive(
    sample_totals: &BTreeMap<String, u32>,
    catalog: &RateCatalog,
    mapping: &DerivationMapping,
) -> BTreeMap<OrderKey, u32> {
    let mut quantities = BTreeMap::new();

    for entry in mapping.entries() {
        let Some(target) = &entry.target else {
            continue;
        };
        let quantity = sample_totals
            .get(&entry.hrs_output_key)
            .copied()
            .unwrap_or(0);
        if quantity == 0 {
            continue;
        }
        if catalog
            .find_triple(
                &target.service_category,
                &target.test_name,
                &target.turnaround_label,
            )
            .is_none()
        {
            debug!(
                key = %entry.hrs_output_key,
                test = %target.test_name,
                "Derivation target not in catalog; entry omitted"
            );
            continue;
        }
        quantities.insert(
            OrderKey::new(target.test_name.clone(), target.turnaround_label.clone()),
            quantity,
        );
    }

    quantities
}

/// Applies a derived quantity map to an order-line list in place.
///
/// Rows still flagged as derived are replaced by the new set: updated when
/// their key is present, removed when it is not. Manual rows are never
/// touched, even when a derived key collides with them; the colliding derived
/// quantity is dropped so no key is double-counted.
pub fn apply_derivation(
    lines: &mut Vec<LabOrderLine>,
    derived: &BTreeMap<OrderKey, u32>,
    catalog: &RateCatalog,
) {
    let mut remaining = derived.clone();

    // Manual rows win their key regardless of where they sit in the list,
    // so their keys come out of the derived set before any derived row can
    // claim them.
    for line in lines.iter() {
        if !line.derived_from_hrs {
            remaining.remove(&line.key());
        }
    }

    // Update surviving derived rows, drop the stale ones.
    lines.retain_mut(|line| {
        if !line.derived_from_hrs {
            return true;
        }
        match remaining.remove(&line.key()) {
            Some(quantity) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    });

    // New derived rows, priced from the catalog.
    for (key, quantity) in remaining {
        let Some(test) = catalog.find_test_by_name(&key.test_name) else {
            continue;
        };
        let Some(price) = test.rate_for(&key.turnaround_label) else {
            continue;
        };
        lines.push(LabOrderLine::derived(
            test.id.clone(),
            key.test_name,
            key.turnaround_label,
            price,
            quantity,
        ));
    }
}

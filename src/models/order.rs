//! Lab Fees order line models.
//!
//! The derived-vs-manual distinction lives on the line itself so the
//! overwrite invariant is enforced by the data model: derivation may replace
//! rows still flagged as derived, and must leave manually-edited rows alone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::numeric::{lenient_count, lenient_decimal};

/// The canonical identity of an order line: `(test_name, turnaround_label)`.
///
/// Ordered so derivation output maps iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderKey {
    /// The test name.
    pub test_name: String,
    /// The turnaround label.
    pub turnaround_label: String,
}

impl OrderKey {
    /// Creates a new key.
    pub fn new(test_name: impl Into<String>, turnaround_label: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            turnaround_label: turnaround_label.into(),
        }
    }
}

/// A single Lab Fees order line.
///
/// Rows with `derived_from_hrs = true` were produced by the HRS derivation
/// and are read-only upstream until a user explicitly edits them. A manual
/// edit flips the flag permanently; the row never re-locks.
///
/// # Example
///
/// ```
/// use fieldcost_engine::models::LabOrderLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut line = LabOrderLine::derived(
///     "asb_plm_bulk",
///     "PLM Bulk Asbestos",
///     "3-5 Day",
///     Decimal::from_str("9.50").unwrap(),
///     12,
/// );
/// assert!(line.derived_from_hrs);
///
/// line.manual_edit(15);
/// assert!(!line.derived_from_hrs);
/// assert_eq!(line.quantity, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabOrderLine {
    /// The catalog identifier of the test.
    pub test_id: String,
    /// The test name.
    pub test_name: String,
    /// The selected turnaround label.
    pub turnaround_label: String,
    /// The unit price per sample.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub unit_price: Decimal,
    /// The ordered sample quantity.
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: u32,
    /// Whether this row's quantity came from the HRS derivation.
    #[serde(default)]
    pub derived_from_hrs: bool,
}

impl LabOrderLine {
    /// Creates a manually-entered line.
    pub fn manual(
        test_id: impl Into<String>,
        test_name: impl Into<String>,
        turnaround_label: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            test_name: test_name.into(),
            turnaround_label: turnaround_label.into(),
            unit_price,
            quantity,
            derived_from_hrs: false,
        }
    }

    /// Creates a derivation-produced line.
    pub fn derived(
        test_id: impl Into<String>,
        test_name: impl Into<String>,
        turnaround_label: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            derived_from_hrs: true,
            ..Self::manual(test_id, test_name, turnaround_label, unit_price, quantity)
        }
    }

    /// The key identifying this line for derivation and matching.
    pub fn key(&self) -> OrderKey {
        OrderKey::new(self.test_name.clone(), self.turnaround_label.clone())
    }

    /// The extended cost of this line.
    pub fn line_cost(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// Applies an explicit user edit to the quantity.
    ///
    /// Editing unlocks a derived row: the flag flips to manual and stays
    /// manual through any later re-derivation.
    pub fn manual_edit(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.derived_from_hrs = false;
    }
}

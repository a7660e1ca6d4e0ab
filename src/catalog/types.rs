//! Rate catalog types for the estimation engine.
//!
//! This module contains the strongly-typed catalog structures that are
//! deserialized from YAML catalog files or handed to the engine directly by
//! the persistence layer. The catalog is read-only reference data: the
//! calculators look rates up but never mutate it.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A labor role and its hourly billing rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRate {
    /// The labor role name (e.g., "Industrial Hygienist").
    pub labor_role: String,
    /// The hourly rate for this role.
    pub hourly_rate: Decimal,
}

/// A turnaround tier for a laboratory test.
///
/// Upstream data sources are inconsistent about this shape: some records
/// carry a bare label string, others a full `{label, hours}` object. Both
/// forms deserialize into this one canonical shape so the calculators never
/// have to branch on it. A bare label deserializes with `hours` of zero.
///
/// # Example
///
/// ```
/// use fieldcost_engine::catalog::Turnaround;
///
/// let from_object: Turnaround =
///     serde_json::from_str(r#"{"label": "24 hr", "hours": "24"}"#).unwrap();
/// let from_string: Turnaround = serde_json::from_str(r#""24 hr""#).unwrap();
/// assert_eq!(from_object.label, from_string.label);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turnaround {
    /// The turnaround label (e.g., "24 hr", "3-5 Day").
    pub label: String,
    /// The nominal turnaround time in hours.
    pub hours: Decimal,
}

impl<'de> Deserialize<'de> for Turnaround {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum TurnTimeRepr {
            Full {
                label: String,
                #[serde(default)]
                hours: Decimal,
            },
            Label(String),
        }

        Ok(match TurnTimeRepr::deserialize(deserializer)? {
            TurnTimeRepr::Full { label, hours } => Turnaround { label, hours },
            TurnTimeRepr::Label(label) => Turnaround {
                label,
                hours: Decimal::ZERO,
            },
        })
    }
}

/// The unit price for one turnaround tier of a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRate {
    /// The turnaround tier this price applies to.
    pub turn_time: Turnaround,
    /// The unit price per sample at this turnaround.
    pub price: Decimal,
}

/// A laboratory test and its per-turnaround prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    /// The catalog identifier of the test.
    pub id: String,
    /// The test name (e.g., "PLM Bulk Asbestos").
    pub name: String,
    /// The service category the test belongs to (e.g., "Asbestos").
    pub category: String,
    /// The available turnaround tiers and their prices.
    pub rates: Vec<TestRate>,
}

impl LabTest {
    /// Returns the unit price for a turnaround label, if this test offers it.
    pub fn rate_for(&self, turnaround_label: &str) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|r| r.turn_time.label == turnaround_label)
            .map(|r| r.price)
    }
}

/// Labor rates file structure (`labor_rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct LaborRatesFile {
    /// All labor roles and their hourly rates.
    pub labor_rates: Vec<LaborRate>,
}

/// Tests file structure (`tests.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TestsFile {
    /// All laboratory tests across every service category.
    pub tests: Vec<LabTest>,
}

/// The complete read-only rate catalog.
///
/// Aggregates the labor-rate table and the laboratory test table. Each
/// calculation receives a snapshot of this catalog; no lookup result is
/// memoized across calls, so a fresh snapshot always yields fresh results.
///
/// # Example
///
/// ```
/// use fieldcost_engine::catalog::{LaborRate, RateCatalog};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let catalog = RateCatalog::new(
///     vec![LaborRate {
///         labor_role: "Technician".to_string(),
///         hourly_rate: Decimal::from_str("40.00").unwrap(),
///     }],
///     vec![],
/// );
/// assert_eq!(
///     catalog.labor_rate("Technician"),
///     Some(Decimal::from_str("40.00").unwrap())
/// );
/// assert_eq!(catalog.labor_rate("Unknown"), None);
/// ```
#[derive(Debug, Clone)]
pub struct RateCatalog {
    /// All labor rates as supplied.
    labor_rates: Vec<LaborRate>,
    /// Role name to hourly rate, built once at construction.
    rates_by_role: HashMap<String, Decimal>,
    /// All laboratory tests across every category.
    tests: Vec<LabTest>,
}

impl RateCatalog {
    /// Creates a new catalog from its component tables.
    ///
    /// The tables may arrive in any fetch order; no ordering is assumed.
    /// When the same role appears more than once, the first entry wins.
    pub fn new(labor_rates: Vec<LaborRate>, tests: Vec<LabTest>) -> Self {
        let mut rates_by_role = HashMap::new();
        for rate in &labor_rates {
            rates_by_role
                .entry(rate.labor_role.clone())
                .or_insert(rate.hourly_rate);
        }
        Self {
            labor_rates,
            rates_by_role,
            tests,
        }
    }

    /// Returns the hourly rate for a labor role, or `None` if the role has
    /// no catalog entry.
    ///
    /// A missing role is a reportable condition for the calculators, not an
    /// error: callers need to distinguish "no rate" from "rate is zero".
    pub fn labor_rate(&self, role: &str) -> Option<Decimal> {
        self.rates_by_role.get(role).copied()
    }

    /// Returns all labor rates.
    pub fn labor_rates(&self) -> &[LaborRate] {
        &self.labor_rates
    }

    /// Returns all laboratory tests.
    pub fn tests(&self) -> &[LabTest] {
        &self.tests
    }

    /// Finds a test by name, searching every loaded category.
    ///
    /// Derived or previously-entered order lines may belong to a different
    /// category than the one currently displayed upstream, so resolution
    /// must never be limited to a single category.
    pub fn find_test_by_name(&self, test_name: &str) -> Option<&LabTest> {
        self.tests.iter().find(|t| t.name == test_name)
    }

    /// Finds the unit price for a `(test_name, turnaround_label)` pair,
    /// searching every loaded category.
    pub fn find_test_price(&self, test_name: &str, turnaround_label: &str) -> Option<Decimal> {
        self.tests
            .iter()
            .filter(|t| t.name == test_name)
            .find_map(|t| t.rate_for(turnaround_label))
    }

    /// Finds a test matching the full `(category, test_name, turnaround)`
    /// triple used by the HRS derivation mapping.
    ///
    /// Returns the test and its unit price at that turnaround, or `None` if
    /// any part of the triple is absent (e.g., a lab or category was
    /// deleted).
    pub fn find_triple(
        &self,
        category: &str,
        test_name: &str,
        turnaround_label: &str,
    ) -> Option<(&LabTest, Decimal)> {
        self.tests
            .iter()
            .filter(|t| t.category == category && t.name == test_name)
            .find_map(|t| t.rate_for(turnaround_label).map(|price| (t, price)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_tests() -> Vec<LabTest> {
        vec![
            LabTest {
                id: "asb_plm".to_string(),
                name: "PLM Bulk Asbestos".to_string(),
                category: "Asbestos".to_string(),
                rates: vec![
                    TestRate {
                        turn_time: Turnaround {
                            label: "24 hr".to_string(),
                            hours: dec("24"),
                        },
                        price: dec("18.00"),
                    },
                    TestRate {
                        turn_time: Turnaround {
                            label: "3-5 Day".to_string(),
                            hours: dec("96"),
                        },
                        price: dec("9.50"),
                    },
                ],
            },
            LabTest {
                id: "mold_spore".to_string(),
                name: "Spore Trap".to_string(),
                category: "Mold".to_string(),
                rates: vec![TestRate {
                    turn_time: Turnaround {
                        label: "48 hr".to_string(),
                        hours: dec("48"),
                    },
                    price: dec("35.00"),
                }],
            },
        ]
    }

    #[test]
    fn test_turnaround_deserializes_from_object() {
        let t: Turnaround = serde_json::from_str(r#"{"label": "24 hr", "hours": "24"}"#).unwrap();
        assert_eq!(t.label, "24 hr");
        assert_eq!(t.hours, dec("24"));
    }

    #[test]
    fn test_turnaround_deserializes_from_bare_string() {
        let t: Turnaround = serde_json::from_str(r#""3-5 Day""#).unwrap();
        assert_eq!(t.label, "3-5 Day");
        assert_eq!(t.hours, Decimal::ZERO);
    }

    #[test]
    fn test_turnaround_object_without_hours_defaults_to_zero() {
        let t: Turnaround = serde_json::from_str(r#"{"label": "RUSH"}"#).unwrap();
        assert_eq!(t.label, "RUSH");
        assert_eq!(t.hours, Decimal::ZERO);
    }

    #[test]
    fn test_labor_rate_lookup() {
        let catalog = RateCatalog::new(
            vec![
                LaborRate {
                    labor_role: "Technician".to_string(),
                    hourly_rate: dec("40.00"),
                },
                LaborRate {
                    labor_role: "Project Manager".to_string(),
                    hourly_rate: dec("95.00"),
                },
            ],
            vec![],
        );

        assert_eq!(catalog.labor_rate("Technician"), Some(dec("40.00")));
        assert_eq!(catalog.labor_rate("Project Manager"), Some(dec("95.00")));
        assert_eq!(catalog.labor_rate("Geologist"), None);
    }

    #[test]
    fn test_labor_rate_first_entry_wins_on_duplicate_role() {
        let catalog = RateCatalog::new(
            vec![
                LaborRate {
                    labor_role: "Technician".to_string(),
                    hourly_rate: dec("40.00"),
                },
                LaborRate {
                    labor_role: "Technician".to_string(),
                    hourly_rate: dec("55.00"),
                },
            ],
            vec![],
        );

        assert_eq!(catalog.labor_rate("Technician"), Some(dec("40.00")));
    }

    #[test]
    fn test_zero_rate_is_distinguishable_from_missing_rate() {
        let catalog = RateCatalog::new(
            vec![LaborRate {
                labor_role: "Intern".to_string(),
                hourly_rate: Decimal::ZERO,
            }],
            vec![],
        );

        assert_eq!(catalog.labor_rate("Intern"), Some(Decimal::ZERO));
        assert_eq!(catalog.labor_rate("Missing"), None);
    }

    #[test]
    fn test_find_test_price_searches_all_categories() {
        let catalog = RateCatalog::new(vec![], sample_tests());

        // Spore Trap lives in the Mold category; resolution by name alone
        // must still find it.
        assert_eq!(catalog.find_test_price("Spore Trap", "48 hr"), Some(dec("35.00")));
        assert_eq!(
            catalog.find_test_price("PLM Bulk Asbestos", "3-5 Day"),
            Some(dec("9.50"))
        );
    }

    #[test]
    fn test_find_test_price_missing_turnaround_returns_none() {
        let catalog = RateCatalog::new(vec![], sample_tests());
        assert_eq!(catalog.find_test_price("Spore Trap", "2 hr"), None);
    }

    #[test]
    fn test_find_triple_requires_matching_category() {
        let catalog = RateCatalog::new(vec![], sample_tests());

        assert!(catalog.find_triple("Mold", "Spore Trap", "48 hr").is_some());
        assert!(catalog.find_triple("Asbestos", "Spore Trap", "48 hr").is_none());
    }

    #[test]
    fn test_find_triple_returns_price() {
        let catalog = RateCatalog::new(vec![], sample_tests());

        let (test, price) = catalog
            .find_triple("Asbestos", "PLM Bulk Asbestos", "24 hr")
            .unwrap();
        assert_eq!(test.id, "asb_plm");
        assert_eq!(price, dec("18.00"));
    }

    #[test]
    fn test_rate_for_on_lab_test() {
        let tests = sample_tests();
        assert_eq!(tests[0].rate_for("24 hr"), Some(dec("18.00")));
        assert_eq!(tests[0].rate_for("nope"), None);
    }

    #[test]
    fn test_test_rate_deserializes_duck_typed_turn_time() {
        let json = r#"{"turn_time": "24 hr", "price": "18.00"}"#;
        let rate: TestRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.turn_time.label, "24 hr");
        assert_eq!(rate.price, dec("18.00"));
    }
}

//! Flight cost calculation for non-local projects.
//!
//! Travel time per person is the roundtrip air time plus a fixed 1.5 hour
//! ground/connection buffer. Travel labor is costed per staff role under the
//! project rate multiplier; the layover room cost applies only when an
//! overnight is flagged and both layover fields are present.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::warn;

use crate::catalog::RateCatalog;
use crate::models::{CalculationWarning, FlightPlan, RateMultiplier, StaffAssignment};

/// The fixed ground/connection buffer added to roundtrip air time, in
/// tenths of an hour (1.5 h).
const GROUND_BUFFER_TENTHS: i64 = 15;

/// The component costs of a flight plan.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightCosts {
    /// `num_tickets × cost_per_ticket`.
    pub ticket_cost: Decimal,
    /// Roundtrip air time plus the ground buffer, per person.
    pub travel_time_per_person: Decimal,
    /// Per-role travel labor cost, after the rate multiplier.
    pub labor_costs: BTreeMap<String, Decimal>,
    /// Sum of the per-role labor costs.
    pub labor_cost_total: Decimal,
    /// Overnight layover room cost.
    pub layover_cost: Decimal,
    /// `ticket_cost + labor_cost_total + layover_cost`.
    pub total: Decimal,
    /// Warnings raised during calculation.
    pub warnings: Vec<CalculationWarning>,
}

impl FlightCosts {
    /// A zero-cost result, used when the project has no flights.
    pub fn zero() -> Self {
        Self {
            ticket_cost: Decimal::ZERO,
            travel_time_per_person: Decimal::ZERO,
            labor_costs: BTreeMap::new(),
            labor_cost_total: Decimal::ZERO,
            layover_cost: Decimal::ZERO,
            total: Decimal::ZERO,
            warnings: vec![],
        }
    }
}

/// Computes flight costs for a plan and staff crew.
///
/// # Example
///
/// ```
/// use fieldcost_engine::calculation::compute_flight_costs;
/// use fieldcost_engine::catalog::{LaborRate, RateCatalog};
/// use fieldcost_engine::models::{FlightPlan, RateMultiplier, StaffAssignment};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let catalog = RateCatalog::new(
///     vec![LaborRate {
///         labor_role: "Tech".to_string(),
///         hourly_rate: Decimal::from(40),
///     }],
///     vec![],
/// );
/// let plan = FlightPlan {
///     num_tickets: 2,
///     cost_per_ticket: Decimal::from(450),
///     one_way_hours: Decimal::from(3),
///     has_overnight: false,
///     layover_cost_per_night: None,
///     layover_rooms: None,
/// };
/// let staff = vec![StaffAssignment::new("Tech", 2)];
///
/// let costs = compute_flight_costs(&plan, &staff, RateMultiplier::ThreeQuarters, &catalog);
/// assert_eq!(costs.ticket_cost, Decimal::from(900));
/// assert_eq!(costs.travel_time_per_person, Decimal::from_str("7.5").unwrap());
/// assert_eq!(costs.labor_cost_total, Decimal::from(450));
/// assert_eq!(costs.total, Decimal::from(1350));
/// ```
pub fn compute_flight_costs(
    plan: &FlightPlan,
    staff: &[StaffAssignment],
    multiplier: RateMultiplier,
    catalog: &RateCatalog,
) -> FlightCosts {
    let ticket_cost = Decimal::from(plan.num_tickets) * plan.cost_per_ticket;

    let travel_time_per_person =
        plan.one_way_hours * Decimal::from(2) + Decimal::new(GROUND_BUFFER_TENTHS, 1);

    let mut warnings = Vec::new();
    let mut labor_costs: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut labor_cost_total = Decimal::ZERO;

    for assignment in staff {
        let cost = match catalog.labor_rate(&assignment.role) {
            Some(rate) => {
                travel_time_per_person
                    * rate
                    * Decimal::from(assignment.count)
                    * multiplier.as_decimal()
            }
            None => {
                warn!(role = %assignment.role, "No labor rate for flight travel role");
                warnings.push(CalculationWarning::missing_labor_rate(&assignment.role));
                Decimal::ZERO
            }
        };
        *labor_costs
            .entry(assignment.role.clone())
            .or_insert(Decimal::ZERO) += cost;
        labor_cost_total += cost;
    }

    let layover_cost = match (
        plan.has_overnight,
        plan.layover_cost_per_night,
        plan.layover_rooms,
    ) {
        (true, Some(cost_per_night), Some(rooms)) => cost_per_night * Decimal::from(rooms),
        _ => Decimal::ZERO,
    };

    FlightCosts {
        ticket_cost,
        travel_time_per_person,
        labor_cost_total,
        layover_cost,
        total: ticket_cost + labor_cost_total + layover_cost,
        labor_costs,
        warnings,
    }
}

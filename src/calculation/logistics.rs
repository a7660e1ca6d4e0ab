//! Field logistics cost calculation.
//!
//! Combines the driving legs, flights, rental, and lodging/per-diem terms
//! into one result. Every staff labor cost term shares the same project rate
//! multiplier, applied once per term and never compounded; fuel, tickets,
//! rental, rooms, and per diem are never multiplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::catalog::RateCatalog;
use crate::error::EngineResult;
use crate::models::{
    CalculationWarning, DailyLeg, FlightPlan, LogisticsResult, RateMultiplier, RentalPlan,
    RoundtripLeg, StaffAssignment, StayPlan,
};

use super::driving::{LegCost, daily_leg_cost, roundtrip_leg_cost};
use super::flights::{FlightCosts, compute_flight_costs};
use super::lodging::{StayCosts, compute_stay_costs};
use super::rental::compute_rental_cost;

/// The input snapshot for one logistics calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsInput {
    /// The field crew for this estimation.
    #[serde(default)]
    pub staff: Vec<StaffAssignment>,
    /// The project-wide staff labor multiplier (1.0, 0.75, or 0.5).
    #[serde(default = "default_rate_multiplier")]
    pub rate_multiplier: Decimal,
    /// Local projects skip flights, rental, lodging, and per diem.
    #[serde(default)]
    pub is_local_project: bool,
    /// The office-to-site roundtrip driving leg, if any.
    #[serde(default)]
    pub roundtrip_driving: Option<RoundtripLeg>,
    /// The lodging-to-site daily driving leg, if any.
    #[serde(default)]
    pub daily_driving: Option<DailyLeg>,
    /// Flight inputs, if flying.
    #[serde(default)]
    pub flights: Option<FlightPlan>,
    /// Vehicle rental inputs, if renting at the destination.
    #[serde(default)]
    pub rental: Option<RentalPlan>,
    /// Lodging and per-diem inputs.
    #[serde(default)]
    pub stay: Option<StayPlan>,
}

fn default_rate_multiplier() -> Decimal {
    Decimal::ONE
}

/// Computes the logistics result for one input snapshot.
///
/// Fails fast only when `rate_multiplier` is outside the enumerated
/// {1.0, 0.75, 0.5} set, which indicates a caller bug. Missing labor rates
/// contribute $0 and are surfaced as warnings.
pub fn compute_logistics(
    input: &LogisticsInput,
    catalog: &RateCatalog,
) -> EngineResult<LogisticsResult> {
    let multiplier = RateMultiplier::try_from(input.rate_multiplier)?;

    let roundtrip = input
        .roundtrip_driving
        .as_ref()
        .map(roundtrip_leg_cost)
        .unwrap_or_else(LegCost::zero);
    let daily = input
        .daily_driving
        .as_ref()
        .map(daily_leg_cost)
        .unwrap_or_else(LegCost::zero);

    let total_miles = roundtrip.miles + daily.miles;
    let total_driving_labor_hours = roundtrip.drive_hours + daily.drive_hours;

    let mut warnings = Vec::new();
    let mut staff_labor_costs: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_driving_labor_cost = Decimal::ZERO;

    for assignment in &input.staff {
        let cost = match catalog.labor_rate(&assignment.role) {
            Some(rate) => {
                total_driving_labor_hours
                    * rate
                    * Decimal::from(assignment.count)
                    * multiplier.as_decimal()
            }
            None => {
                warn!(role = %assignment.role, "No labor rate for logistics staff role");
                warnings.push(CalculationWarning::missing_labor_rate(&assignment.role));
                Decimal::ZERO
            }
        };
        *staff_labor_costs
            .entry(assignment.role.clone())
            .or_insert(Decimal::ZERO) += cost;
        total_driving_labor_cost += cost;
    }

    let total_driving_cost = roundtrip.fuel_cost + daily.fuel_cost + total_driving_labor_cost;

    // Flights, rental, and the stay only apply to non-local projects.
    let flight = match (&input.flights, input.is_local_project) {
        (Some(plan), false) => compute_flight_costs(plan, &input.staff, multiplier, catalog),
        _ => FlightCosts::zero(),
    };
    for (role, cost) in &flight.labor_costs {
        *staff_labor_costs.entry(role.clone()).or_insert(Decimal::ZERO) += *cost;
    }
    warnings.extend(flight.warnings.iter().cloned());

    let total_rental_cost = match (&input.rental, &input.flights, input.is_local_project) {
        (Some(plan), Some(_), false) if !plan.use_client_vehicle => compute_rental_cost(plan),
        _ => Decimal::ZERO,
    };

    let stay = match (&input.stay, input.is_local_project) {
        (Some(plan), false) => compute_stay_costs(plan),
        _ => StayCosts::zero(),
    };

    let grand_total = total_driving_cost
        + flight.total
        + total_rental_cost
        + stay.room_cost
        + stay.per_diem_cost;

    debug!(%grand_total, "Computed logistics estimate");

    Ok(LogisticsResult {
        roundtrip_miles: roundtrip.miles,
        daily_miles: daily.miles,
        total_miles,
        roundtrip_drive_hours: roundtrip.drive_hours,
        daily_drive_hours: daily.drive_hours,
        total_driving_labor_hours,
        roundtrip_fuel_cost: roundtrip.fuel_cost,
        daily_fuel_cost: daily.fuel_cost,
        total_driving_labor_cost,
        total_driving_cost,
        ticket_cost: flight.ticket_cost,
        travel_time_per_person: flight.travel_time_per_person,
        flight_labor_cost: flight.labor_cost_total,
        layover_cost: flight.layover_cost,
        total_flight_cost: flight.total,
        total_rental_cost,
        room_cost: stay.room_cost,
        per_diem_cost: stay.per_diem_cost,
        rate_multiplier: multiplier.as_decimal(),
        staff_labor_costs,
        staff_breakdown: input.staff.clone(),
        warnings,
        grand_total,
    })
}

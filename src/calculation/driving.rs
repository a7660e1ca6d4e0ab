//! Driving leg mileage, drive-time, and fuel cost calculation.
//!
//! Two leg shapes exist: a roundtrip leg (office to site and back, per day)
//! and a daily leg (lodging to site, where the entered miles are already a
//! round-trip figure). Auto-calculated drive hours divide total miles by the
//! 55 mph average speed; an explicit drive-time entry replaces the
//! auto-calculation for the whole leg.

use rust_decimal::Decimal;

use crate::models::{DailyLeg, FuelModel, RoundtripLeg};

/// The average driving speed used for auto-calculated drive time.
pub const AVERAGE_SPEED_MPH: u32 = 55;

/// The computed mileage, drive-time, and fuel cost of one driving leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LegCost {
    /// Total miles driven over the leg's duration.
    pub miles: Decimal,
    /// Total drive-time labor hours for the leg.
    pub drive_hours: Decimal,
    /// Total fuel cost for the leg.
    pub fuel_cost: Decimal,
}

impl LegCost {
    /// A zero-cost leg, used when the leg is absent from the input.
    pub fn zero() -> Self {
        Self {
            miles: Decimal::ZERO,
            drive_hours: Decimal::ZERO,
            fuel_cost: Decimal::ZERO,
        }
    }
}

fn auto_drive_hours(miles: Decimal) -> Decimal {
    miles / Decimal::from(AVERAGE_SPEED_MPH)
}

fn mileage_fuel_cost(fuel_model: &FuelModel, miles: Decimal, num_vehicles: u32) -> Decimal {
    match fuel_model {
        FuelModel::CostPerMile { rate } => miles * *rate * Decimal::from(num_vehicles),
        FuelModel::MpgAndGallonCost {
            mpg,
            cost_per_gallon,
        } => {
            if mpg.is_zero() {
                Decimal::ZERO
            } else {
                (miles / *mpg) * *cost_per_gallon * Decimal::from(num_vehicles)
            }
        }
        // Flat-fee and no-cost models are not mileage-based.
        FuelModel::AnchorageFlat { .. } | FuelModel::None => Decimal::ZERO,
    }
}

/// Computes the cost of a roundtrip driving leg.
///
/// `miles = one_way_miles × 2 × duration_days`. When the fuel model is the
/// Anchorage flat fee, `fuel_cost = fee × duration_days` and any supplied
/// per-mile or MPG values are ignored entirely.
pub fn roundtrip_leg_cost(leg: &RoundtripLeg) -> LegCost {
    let days = Decimal::from(leg.effective_duration_days());
    let miles = leg.one_way_miles * Decimal::from(2) * days;

    let drive_hours = leg.drive_time_hours.unwrap_or_else(|| auto_drive_hours(miles));

    let fuel_cost = match &leg.fuel_model {
        FuelModel::AnchorageFlat { fee_per_day } => *fee_per_day * days,
        other => mileage_fuel_cost(other, miles, leg.num_vehicles.max(1)),
    };

    LegCost {
        miles,
        drive_hours,
        fuel_cost,
    }
}

/// Computes the cost of a daily driving leg.
///
/// `daily_miles_roundtrip` is already a round-trip figure, so auto hours
/// divide by the average speed exactly once. When either end of the drive is
/// Anchorage, fuel cost is forced to zero (covered by the roundtrip flat
/// fee) but drive-time labor hours still apply.
pub fn daily_leg_cost(leg: &DailyLeg) -> LegCost {
    let miles = leg.daily_miles_roundtrip * Decimal::from(leg.duration_days);

    let drive_hours = leg.drive_time_hours.unwrap_or_else(|| auto_drive_hours(miles));

    let fuel_cost = if leg.touches_anchorage() {
        Decimal::ZERO
    } else {
        mileage_fuel_cost(&leg.fuel_model, miles, 1)
    };

    LegCost {
        miles,
        drive_hours,
        fuel_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn roundtrip(location: &str, one_way_miles: &str, days: Option<u32>) -> RoundtripLeg {
        RoundtripLeg {
            location: location.to_string(),
            num_vehicles: 1,
            one_way_miles: dec(one_way_miles),
            drive_time_hours: None,
            duration_days: days,
            fuel_model: FuelModel::None,
        }
    }

    #[test]
    fn test_roundtrip_miles_double_one_way_per_day() {
        let leg = roundtrip("Fairbanks", "100", Some(3));
        let cost = roundtrip_leg_cost(&leg);
        assert_eq!(cost.miles, dec("600"));
    }

    #[test]
    fn test_roundtrip_auto_hours_use_total_miles() {
        let leg = roundtrip("Fairbanks", "110", Some(1));
        let cost = roundtrip_leg_cost(&leg);
        // 220 miles / 55 = 4.0 total roundtrip hours
        assert_eq!(cost.drive_hours, dec("4"));
    }

    #[test]
    fn test_roundtrip_explicit_hours_win_over_auto() {
        let mut leg = roundtrip("Fairbanks", "110", Some(1));
        leg.drive_time_hours = Some(dec("5.5"));
        let cost = roundtrip_leg_cost(&leg);
        assert_eq!(cost.drive_hours, dec("5.5"));
    }

    #[test]
    fn test_anchorage_flat_fee_ignores_mileage_inputs() {
        // Worked example: durationDays=2, fee=45 => fuel = 90,
        // irrespective of any supplied one-way miles.
        let leg = RoundtripLeg {
            location: "Anchorage".to_string(),
            num_vehicles: 2,
            one_way_miles: dec("500"),
            drive_time_hours: None,
            duration_days: Some(2),
            fuel_model: FuelModel::AnchorageFlat {
                fee_per_day: dec("45"),
            },
        };
        let cost = roundtrip_leg_cost(&leg);
        assert_eq!(cost.fuel_cost, dec("90"));
    }

    #[test]
    fn test_anchorage_duration_defaults_to_one_day() {
        let leg = RoundtripLeg {
            location: "Anchorage".to_string(),
            num_vehicles: 1,
            one_way_miles: dec("40"),
            drive_time_hours: None,
            duration_days: None,
            fuel_model: FuelModel::AnchorageFlat {
                fee_per_day: dec("45"),
            },
        };
        let cost = roundtrip_leg_cost(&leg);
        assert_eq!(cost.fuel_cost, dec("45"));
        assert_eq!(cost.miles, dec("80"));
    }

    #[test]
    fn test_non_anchorage_duration_defaults_to_zero() {
        let leg = roundtrip("Fairbanks", "100", None);
        let cost = roundtrip_leg_cost(&leg);
        assert_eq!(cost.miles, Decimal::ZERO);
        assert_eq!(cost.fuel_cost, Decimal::ZERO);
    }

    #[test]
    fn test_cost_per_mile_fuel() {
        let mut leg = roundtrip("Fairbanks", "100", Some(2));
        leg.fuel_model = FuelModel::CostPerMile { rate: dec("0.67") };
        let cost = roundtrip_leg_cost(&leg);
        // 400 miles × 0.67 = 268
        assert_eq!(cost.fuel_cost, dec("268.00"));
    }

    #[test]
    fn test_mpg_fuel() {
        let mut leg = roundtrip("Fairbanks", "100", Some(1));
        leg.fuel_model = FuelModel::MpgAndGallonCost {
            mpg: dec("20"),
            cost_per_gallon: dec("4.50"),
        };
        let cost = roundtrip_leg_cost(&leg);
        // 200 miles / 20 mpg × 4.50 = 45
        assert_eq!(cost.fuel_cost, dec("45.00"));
    }

    #[test]
    fn test_zero_mpg_yields_zero_fuel() {
        let mut leg = roundtrip("Fairbanks", "100", Some(1));
        leg.fuel_model = FuelModel::MpgAndGallonCost {
            mpg: Decimal::ZERO,
            cost_per_gallon: dec("4.50"),
        };
        assert_eq!(roundtrip_leg_cost(&leg).fuel_cost, Decimal::ZERO);
    }

    #[test]
    fn test_multiple_vehicles_scale_mileage_fuel() {
        let mut leg = roundtrip("Fairbanks", "100", Some(1));
        leg.num_vehicles = 2;
        leg.fuel_model = FuelModel::CostPerMile { rate: dec("0.50") };
        let cost = roundtrip_leg_cost(&leg);
        // 200 miles × 0.50 × 2 vehicles = 200
        assert_eq!(cost.fuel_cost, dec("200.00"));
        // Route miles are unchanged by the vehicle count.
        assert_eq!(cost.miles, dec("200"));
    }

    fn daily(site: &str, lodging: &str, miles: &str, days: u32) -> DailyLeg {
        DailyLeg {
            site_location: site.to_string(),
            lodging_location: lodging.to_string(),
            daily_miles_roundtrip: dec(miles),
            drive_time_hours: None,
            duration_days: days,
            fuel_model: FuelModel::None,
        }
    }

    #[test]
    fn test_daily_miles_multiply_by_days() {
        let leg = daily("Eagle River", "Wasilla", "30", 5);
        let cost = daily_leg_cost(&leg);
        assert_eq!(cost.miles, dec("150"));
    }

    #[test]
    fn test_daily_auto_hours_divide_once() {
        // daily_miles is already roundtrip: 110 × 1 day / 55 = 2.0 hours,
        // not 4.0.
        let leg = daily("Eagle River", "Wasilla", "110", 1);
        let cost = daily_leg_cost(&leg);
        assert_eq!(cost.drive_hours, dec("2"));
    }

    #[test]
    fn test_daily_anchorage_forces_zero_fuel_but_keeps_hours() {
        let mut leg = daily("Anchorage", "Wasilla", "110", 1);
        leg.fuel_model = FuelModel::CostPerMile { rate: dec("0.67") };
        let cost = daily_leg_cost(&leg);
        assert_eq!(cost.fuel_cost, Decimal::ZERO);
        assert_eq!(cost.drive_hours, dec("2"));
    }

    #[test]
    fn test_daily_anchorage_lodging_also_forces_zero_fuel() {
        let mut leg = daily("Eagle River", "Anchorage", "110", 1);
        leg.fuel_model = FuelModel::CostPerMile { rate: dec("0.67") };
        assert_eq!(daily_leg_cost(&leg).fuel_cost, Decimal::ZERO);
    }

    #[test]
    fn test_daily_fuel_cost_per_mile() {
        let mut leg = daily("Eagle River", "Wasilla", "30", 5);
        leg.fuel_model = FuelModel::CostPerMile { rate: dec("0.60") };
        // 150 miles × 0.60 = 90
        assert_eq!(daily_leg_cost(&leg).fuel_cost, dec("90.00"));
    }
}

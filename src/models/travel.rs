//! Travel and logistics input models.
//!
//! These types describe the driving legs, flights, vehicle rental, and
//! lodging stay that the Logistics calculator converts into costs. Anchorage
//! projects carry special fuel handling: the roundtrip leg uses a flat
//! per-day fee and the daily leg's fuel is covered by it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::numeric::{lenient_count, lenient_decimal};

/// Returns true if a location string names Anchorage.
pub fn is_anchorage(location: &str) -> bool {
    location.trim().eq_ignore_ascii_case("anchorage")
}

/// How fuel cost is computed for a driving leg.
///
/// # Example
///
/// ```
/// use fieldcost_engine::models::FuelModel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let json = r#"{"type": "cost_per_mile", "rate": "0.67"}"#;
/// let model: FuelModel = serde_json::from_str(json).unwrap();
/// assert_eq!(
///     model,
///     FuelModel::CostPerMile {
///         rate: Decimal::from_str("0.67").unwrap()
///     }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FuelModel {
    /// A flat cost per mile driven.
    CostPerMile {
        /// Dollars per mile.
        rate: Decimal,
    },
    /// Fuel burned at a vehicle MPG and a cost per gallon.
    MpgAndGallonCost {
        /// Vehicle miles per gallon.
        mpg: Decimal,
        /// Dollars per gallon.
        cost_per_gallon: Decimal,
    },
    /// The Anchorage flat fee per day; mileage-based inputs are ignored.
    AnchorageFlat {
        /// Dollars per day.
        fee_per_day: Decimal,
    },
    /// No fuel cost for this leg.
    #[default]
    None,
}

impl FuelModel {
    /// Builds a fuel model from loosely-populated raw fields.
    ///
    /// An Anchorage flat fee wins over everything; cost-per-mile takes
    /// priority over MPG + gallon cost when both are present.
    pub fn from_parts(
        anchorage_fee_per_day: Option<Decimal>,
        cost_per_mile: Option<Decimal>,
        mpg: Option<Decimal>,
        cost_per_gallon: Option<Decimal>,
    ) -> Self {
        if let Some(fee_per_day) = anchorage_fee_per_day {
            return FuelModel::AnchorageFlat { fee_per_day };
        }
        if let Some(rate) = cost_per_mile {
            return FuelModel::CostPerMile { rate };
        }
        if let (Some(mpg), Some(cost_per_gallon)) = (mpg, cost_per_gallon) {
            return FuelModel::MpgAndGallonCost {
                mpg,
                cost_per_gallon,
            };
        }
        FuelModel::None
    }
}

/// A roundtrip driving leg between the office and the project site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundtripLeg {
    /// The destination location name.
    pub location: String,
    /// Number of vehicles making the trip.
    #[serde(default = "default_num_vehicles")]
    pub num_vehicles: u32,
    /// One-way miles from the office to the site.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub one_way_miles: Decimal,
    /// Explicit drive-time hours; when absent, hours are auto-calculated
    /// from miles.
    #[serde(default)]
    pub drive_time_hours: Option<Decimal>,
    /// Trip duration in days; when unset, defaults to 1 for Anchorage and
    /// 0 otherwise.
    #[serde(default)]
    pub duration_days: Option<u32>,
    /// How fuel is costed for this leg.
    #[serde(default)]
    pub fuel_model: FuelModel,
}

fn default_num_vehicles() -> u32 {
    1
}

impl RoundtripLeg {
    /// Returns true when the destination is Anchorage.
    pub fn is_anchorage(&self) -> bool {
        is_anchorage(&self.location)
    }

    /// The duration in days, applying the Anchorage default.
    pub fn effective_duration_days(&self) -> u32 {
        match self.duration_days {
            Some(days) => days,
            None if self.is_anchorage() => 1,
            None => 0,
        }
    }
}

/// A daily driving leg between lodging and the project site.
///
/// `daily_miles_roundtrip` is already a round-trip figure, so auto-calculated
/// drive hours divide by the average speed exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLeg {
    /// The project site location name.
    pub site_location: String,
    /// The lodging location name.
    pub lodging_location: String,
    /// Round-trip miles driven per day.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub daily_miles_roundtrip: Decimal,
    /// Explicit drive-time hours per day; when absent, hours are
    /// auto-calculated from miles.
    #[serde(default)]
    pub drive_time_hours: Option<Decimal>,
    /// Number of days of daily driving.
    #[serde(default, deserialize_with = "lenient_count")]
    pub duration_days: u32,
    /// How fuel is costed for this leg.
    #[serde(default)]
    pub fuel_model: FuelModel,
}

impl DailyLeg {
    /// Returns true when either end of the daily drive is Anchorage.
    ///
    /// Anchorage daily fuel is covered by the roundtrip flat fee, so this
    /// forces the daily fuel cost to zero (drive-time labor still applies).
    pub fn touches_anchorage(&self) -> bool {
        is_anchorage(&self.site_location) || is_anchorage(&self.lodging_location)
    }
}

/// Flight inputs for a non-local project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    /// Number of tickets purchased.
    #[serde(default, deserialize_with = "lenient_count")]
    pub num_tickets: u32,
    /// Cost per ticket.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub cost_per_ticket: Decimal,
    /// One-way flight hours.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub one_way_hours: Decimal,
    /// Whether the itinerary includes an overnight layover.
    #[serde(default)]
    pub has_overnight: bool,
    /// Layover room cost per night.
    #[serde(default)]
    pub layover_cost_per_night: Option<Decimal>,
    /// Number of layover rooms.
    #[serde(default)]
    pub layover_rooms: Option<u32>,
}

/// The rental billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalPeriod {
    /// Billed per day.
    Daily,
    /// Billed per 7-day week, rounded up.
    Weekly,
    /// Billed per 30-day month, rounded up.
    Monthly,
}

/// Vehicle rental inputs for a flight-mode project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalPlan {
    /// The billing period for `rate`.
    pub period: RentalPeriod,
    /// The rate per billing period.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rate: Decimal,
    /// Total rental days.
    #[serde(default, deserialize_with = "lenient_count")]
    pub rental_days: u32,
    /// Estimated fuel cost for the rental, if known.
    #[serde(default)]
    pub fuel_cost_estimate: Option<Decimal>,
    /// Whether the client is providing a vehicle instead.
    #[serde(default)]
    pub use_client_vehicle: bool,
}

/// Lodging and per-diem inputs for a non-local project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayPlan {
    /// Room cost per night.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub night_cost: Decimal,
    /// Number of staff staying.
    #[serde(default, deserialize_with = "lenient_count")]
    pub num_staff: u32,
    /// Stay duration in days.
    #[serde(default, deserialize_with = "lenient_count")]
    pub duration_days: u32,
    /// The per-diem tier for the stay.
    pub per_diem: PerDiemRate,
}

/// The fixed per-diem tiers.
///
/// Per diem is an enumerated choice, not a free-form amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PerDiemRate {
    /// $50 per staff member per day.
    Fifty,
    /// $60 per staff member per day.
    Sixty,
}

impl PerDiemRate {
    /// The dollar amount per staff member per day.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            PerDiemRate::Fifty => Decimal::from(50),
            PerDiemRate::Sixty => Decimal::from(60),
        }
    }
}

impl TryFrom<u32> for PerDiemRate {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(PerDiemRate::Fifty),
            60 => Ok(PerDiemRate::Sixty),
            other => Err(EngineError::InvalidInput {
                field: "per_diem".to_string(),
                message: format!("expected 50 or 60, got {}", other),
            }),
        }
    }
}

impl From<PerDiemRate> for u32 {
    fn from(value: PerDiemRate) -> Self {
        match value {
            PerDiemRate::Fifty => 50,
            PerDiemRate::Sixty => 60,
        }
    }
}

/// The project-wide staff labor discount factor.
///
/// Applied once per staff-cost term in the Logistics module, never
/// compounded, and never applied to fuel, tickets, rooms, or per diem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum RateMultiplier {
    /// Full rate (100%).
    #[default]
    Full,
    /// Discounted to 75%.
    ThreeQuarters,
    /// Discounted to 50%.
    Half,
}

impl RateMultiplier {
    /// The multiplier as a decimal factor.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            RateMultiplier::Full => Decimal::ONE,
            RateMultiplier::ThreeQuarters => Decimal::new(75, 2),
            RateMultiplier::Half => Decimal::new(5, 1),
        }
    }
}

impl TryFrom<Decimal> for RateMultiplier {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let normalized = value.normalize();
        if normalized == Decimal::ONE {
            Ok(RateMultiplier::Full)
        } else if normalized == Decimal::new(75, 2) {
            Ok(RateMultiplier::ThreeQuarters)
        } else if normalized == Decimal::new(5, 1) {
            Ok(RateMultiplier::Half)
        } else {
            Err(EngineError::InvalidRateMultiplier { value })
        }
    }
}

impl From<RateMultiplier> for Decimal {
    fn from(value: RateMultiplier) -> Self {
        value.as_decimal()
    }
}

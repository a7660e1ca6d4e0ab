//! Lodging and per-diem cost calculation.
//!
//! Both terms scale by staff count and stay duration; the per-diem rate is
//! one of the fixed enumerated tiers, never a free-form amount.

use rust_decimal::Decimal;

use crate::models::StayPlan;

/// The lodging and per-diem components of a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct StayCosts {
    /// `night_cost × num_staff × duration_days`.
    pub room_cost: Decimal,
    /// `per_diem × num_staff × duration_days`.
    pub per_diem_cost: Decimal,
}

impl StayCosts {
    /// A zero-cost stay, used for local projects.
    pub fn zero() -> Self {
        Self {
            room_cost: Decimal::ZERO,
            per_diem_cost: Decimal::ZERO,
        }
    }
}

/// Computes the room and per-diem costs for a stay.
pub fn compute_stay_costs(stay: &StayPlan) -> StayCosts {
    let person_days = Decimal::from(stay.num_staff) * Decimal::from(stay.duration_days);

    StayCosts {
        room_cost: stay.night_cost * person_days,
        per_diem_cost: stay.per_diem.as_decimal() * person_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerDiemRate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_room_and_per_diem_scale_by_staff_and_days() {
        let stay = StayPlan {
            night_cost: dec("150"),
            num_staff: 2,
            duration_days: 3,
            per_diem: PerDiemRate::Sixty,
        };

        let costs = compute_stay_costs(&stay);
        assert_eq!(costs.room_cost, dec("900"));
        assert_eq!(costs.per_diem_cost, dec("360"));
    }

    #[test]
    fn test_fifty_dollar_tier() {
        let stay = StayPlan {
            night_cost: dec("100"),
            num_staff: 1,
            duration_days: 2,
            per_diem: PerDiemRate::Fifty,
        };

        assert_eq!(compute_stay_costs(&stay).per_diem_cost, dec("100"));
    }

    #[test]
    fn test_zero_duration_costs_nothing() {
        let stay = StayPlan {
            night_cost: dec("150"),
            num_staff: 2,
            duration_days: 0,
            per_diem: PerDiemRate::Fifty,
        };

        let costs = compute_stay_costs(&stay);
        assert_eq!(costs.room_cost, Decimal::ZERO);
        assert_eq!(costs.per_diem_cost, Decimal::ZERO);
    }
}

//! Vehicle rental cost calculation.
//!
//! Base cost depends on the billing period: daily rentals bill per day,
//! weekly and monthly rentals bill per started 7-day or 30-day period.

use rust_decimal::Decimal;

use crate::models::{RentalPeriod, RentalPlan};

fn ceil_div(days: u32, period_len: u32) -> u32 {
    days.div_ceil(period_len)
}

/// Computes the total rental cost: the period-based base cost plus any fuel
/// estimate.
///
/// # Example
///
/// ```
/// use fieldcost_engine::calculation::compute_rental_cost;
/// use fieldcost_engine::models::{RentalPeriod, RentalPlan};
/// use rust_decimal::Decimal;
///
/// let plan = RentalPlan {
///     period: RentalPeriod::Weekly,
///     rate: Decimal::from(350),
///     rental_days: 10,
///     fuel_cost_estimate: None,
///     use_client_vehicle: false,
/// };
/// // 10 days = 2 started weeks
/// assert_eq!(compute_rental_cost(&plan), Decimal::from(700));
/// ```
pub fn compute_rental_cost(plan: &RentalPlan) -> Decimal {
    let base_cost = match plan.period {
        RentalPeriod::Daily => plan.rate * Decimal::from(plan.rental_days),
        RentalPeriod::Weekly => plan.rate * Decimal::from(ceil_div(plan.rental_days, 7)),
        RentalPeriod::Monthly => plan.rate * Decimal::from(ceil_div(plan.rental_days, 30)),
    };

    base_cost + plan.fuel_cost_estimate.unwrap_or(Decimal::ZERO)
}

//! Calculation logic for the field cost estimation engine.
//!
//! This module contains all the calculation functions for building an
//! estimate, including sample-minute resolution, HRS sample-hour and labor
//! cost calculation, driving leg mileage and fuel costing, flight costing,
//! vehicle rental costing, lodging and per-diem costing, the combined
//! logistics calculation, lab fee calculation, and the HRS → Lab Fees
//! quantity derivation.

mod derivation;
mod driving;
mod flights;
mod hrs;
mod lab_fees;
mod lodging;
mod logistics;
mod rental;
mod sample_minutes;

pub use derivation::{DerivationMapping, MappingEntry, MappingTarget, apply_derivation, derive};
pub use driving::{AVERAGE_SPEED_MPH, LegCost, daily_leg_cost, roundtrip_leg_cost};
pub use flights::{FlightCosts, compute_flight_costs};
pub use hrs::{
    HrsInput, KEY_ASBESTOS_BULK_SAMPLES, KEY_LEAD_CHIPS_WIPES, KEY_LEAD_XRF_SHOTS,
    KEY_MOLD_CULTURABLE, KEY_MOLD_SPORE_TRAP, KEY_MOLD_TAPE_LIFT, compute_hrs,
};
pub use lab_fees::compute_lab_fees;
pub use lodging::{StayCosts, compute_stay_costs};
pub use logistics::{LogisticsInput, compute_logistics};
pub use rental::compute_rental_cost;
pub use sample_minutes::{OverrideMinutes, SampleCategory, SampleMinutes};

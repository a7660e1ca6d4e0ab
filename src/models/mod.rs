//! Core data models for the estimation engine.
//!
//! This module contains all the domain models used throughout the engine:
//! staff assignments, sample lines, travel inputs, Lab Fees order lines, and
//! the per-module result records.

pub mod numeric;

mod order;
mod results;
mod sample;
mod staff;
mod travel;

pub use order::{LabOrderLine, OrderKey};
pub use results::{
    CalculationWarning, EstimationSummary, HrsResult, LabFeesResult, LogisticsResult,
};
pub use sample::{AdditionalLaborLine, AsbestosLine, LeadLine, MoldLine, UnitLabel};
pub use staff::{LabStaffAssignment, StaffAssignment};
pub use travel::{
    DailyLeg, FlightPlan, FuelModel, PerDiemRate, RateMultiplier, RentalPeriod, RentalPlan,
    RoundtripLeg, StayPlan, is_anchorage,
};

//! Field Cost Estimation Engine for Environmental Services
//!
//! This crate provides the calculation core for environmental-services field
//! work estimates: sample-hour estimation (HRS), laboratory fee pricing,
//! field logistics costing, and the HRS → Lab Fees quantity derivation. All
//! calculators are pure, synchronous functions over immutable input
//! snapshots and a read-only rate catalog.

#![warn(missing_docs)]

pub mod calculation;
pub mod catalog;
pub mod error;
pub mod models;

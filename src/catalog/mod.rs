//! Rate catalog for the estimation engine.
//!
//! The catalog supplies the labor role -> hourly rate table and the
//! laboratory test/turnaround price table. It is read-only reference data:
//! the calculators look rates up and report misses, but never mutate it.

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{LabTest, LaborRate, LaborRatesFile, RateCatalog, TestRate, TestsFile, Turnaround};

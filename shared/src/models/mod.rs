//! Record models for the four collections plus the generated report.
//!
//! Field names on the wire are the French keys of the original JSON
//! data files; the structs use English names internally.

mod culture;
mod harvest;
mod location;
mod report;
mod seed;
mod species;

pub use culture::Culture;
pub use harvest::Harvest;
pub use location::{Location, LocationType};
pub use report::ReportDocument;
pub use seed::{Seed, SeedType, DEFAULT_SEED_IMAGE};
pub use species::SpeciesGroup;

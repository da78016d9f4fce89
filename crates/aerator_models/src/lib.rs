//! # aerator_models: Domain Types for Aerator Comparison
//!
//! Layer 2 of the workspace. Provides:
//! - Comparison inputs: [`Aerator`], [`FarmContext`], [`FinancialAssumptions`]
//! - Comparison outputs: [`AeratorResult`], [`TodBreakdown`], [`ComparisonResult`]
//! - Physical lookup tables: [`tables::SaturationModel`], [`tables::RespirationModel`]
//!   with their JSON grid schema and bundled reference data
//!
//! All value types are plain serde-serializable structs with snake_case
//! wire names. The lookup tables are immutable after construction and are
//! `Send + Sync`, so a single instance can serve concurrent comparisons.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod aerator;
mod farm;
mod financial;
mod results;
pub mod tables;

pub use aerator::Aerator;
pub use farm::FarmContext;
pub use financial::FinancialAssumptions;
pub use results::{AeratorResult, ComparisonResult, TodBreakdown};

//! # aerator_engine: Aerator Comparison Decision Kernel
//!
//! Layer 3 of the workspace. Turns a farm description, a set of financial
//! assumptions, and a list of candidate aerators into a ranked comparison:
//!
//! - [`demand`]: total oxygen demand estimation (shrimp respiration, water
//!   column, pond bottom, safety margin)
//! - [`finance`]: present value, internal rate of return, payback, ROI, and
//!   profitability index over the analysis horizon
//! - [`ComparisonEngine`]: validation, temperature-corrected transfer rates,
//!   fleet sizing, cost derivation, ranking, and equilibrium pricing
//!
//! All failures surface through the typed [`CompareError`] before any
//! partial result is produced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod comparer;
pub mod demand;
mod error;
pub mod finance;

pub use comparer::{ComparisonEngine, EngineConfig};
pub use demand::{DemandConfig, OxygenDemandEstimator};
pub use error::CompareError;

//! Physical lookup tables backing the oxygen demand and transfer models.
//!
//! Two tabulated data sets drive the comparison:
//! - [`SaturationModel`]: dissolved oxygen saturation (mg/L at 100% air
//!   saturation) over temperature and salinity
//! - [`RespirationModel`]: shrimp routine respiration (mg O₂/g/h) over
//!   salinity, temperature, and body weight
//!
//! Both wrap a grid interpolator from `aerator_core` and clamp queries to
//! the tabulated range before interpolating, so field readings slightly
//! outside the published grids resolve to the nearest boundary value
//! instead of failing. The grids are loaded once from JSON
//! ([`schema::SaturationGrid`], [`schema::RespirationGrid`]) and are
//! immutable afterwards.

mod error;
mod respiration;
mod saturation;
pub mod schema;

pub use error::DataError;
pub use respiration::RespirationModel;
pub use saturation::SaturationModel;

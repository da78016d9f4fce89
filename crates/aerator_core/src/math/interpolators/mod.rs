//! Interpolation methods for numerical computation.
//!
//! This module provides grid interpolation algorithms for tabulated physical
//! data, generic over `T: Float` type parameters.
//!
//! ## Available Interpolators
//!
//! - [`BilinearInterpolator`]: 2D grid interpolation for surfaces
//! - [`TrilinearInterpolator`]: 3D grid interpolation for volumes
//!
//! Both interpolators validate their grids at construction (strictly
//! increasing axes, at least two breakpoints per axis, a dense value grid
//! matching the axis shape) and reject out-of-domain queries with
//! [`InterpolationError::OutOfBounds`](crate::types::InterpolationError).
//! Callers that want clamped lookups do the clamping themselves against
//! the reported axis domains.
//!
//! ## Example
//!
//! ```
//! use aerator_core::math::interpolators::BilinearInterpolator;
//!
//! let interp = BilinearInterpolator::new(
//!     vec![0.0, 1.0, 2.0],
//!     vec![0.0, 1.0],
//!     vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]],
//! ).unwrap();
//!
//! let z: f64 = interp.interpolate(0.5, 0.5).unwrap();
//! assert!((z - 1.5).abs() < 1e-12);
//! ```

mod bilinear;
mod trilinear;

// Re-export public types at module level
pub use bilinear::BilinearInterpolator;
pub use trilinear::TrilinearInterpolator;

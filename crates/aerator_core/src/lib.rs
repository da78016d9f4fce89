//! # aerator_core: Numerical Foundation for Aerator Comparison
//!
//! ## Layer 1 (Foundation) Role
//!
//! aerator_core serves as the bottom layer of the workspace, providing:
//! - Grid interpolators: bilinear 2D and trilinear 3D (`math::interpolators`)
//! - Root-finding solvers: Newton-Raphson (`math::solvers`)
//! - Error types: `InterpolationError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other aerator_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use aerator_core::math::interpolators::BilinearInterpolator;
//! use aerator_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Interpolate on a 2D grid
//! let interp = BilinearInterpolator::new(
//!     vec![0.0, 1.0],
//!     vec![0.0, 1.0],
//!     vec![vec![0.0, 1.0], vec![2.0, 3.0]],
//! ).unwrap();
//! let z: f64 = interp.interpolate(0.5, 0.5).unwrap();
//! assert!((z - 1.5).abs() < 1e-12);
//!
//! // Find a root
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

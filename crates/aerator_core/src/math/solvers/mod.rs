//! Root-finding solvers for numerical computation.
//!
//! Provides the [`NewtonRaphsonSolver`] with its shared [`SolverConfig`].
//! The solver is generic over `T: num_traits::Float` and reports structured
//! failures through [`SolverError`](crate::types::SolverError).

mod config;
mod newton_raphson;

// Re-export public types at module level
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;

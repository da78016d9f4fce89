//! Error type for lookup-table loading and queries.

use aerator_core::types::InterpolationError;
use thiserror::Error;

/// Errors raised while loading or querying the physical lookup tables.
///
/// # Variants
/// - `Parse`: The JSON grid document could not be deserialized
/// - `Grid`: The grid axes or value shape failed validation
#[derive(Debug, Error)]
pub enum DataError {
    /// The JSON grid document could not be deserialized.
    #[error("Malformed grid data: {0}")]
    Parse(String),

    /// The grid axes or value shape failed validation, or a clamped query
    /// still could not be answered.
    #[error("Grid error: {0}")]
    Grid(#[from] InterpolationError),
}

impl DataError {
    /// True when the failure came from parsing rather than grid validation.
    pub fn is_parse(&self) -> bool {
        matches!(self, DataError::Parse(_))
    }
}

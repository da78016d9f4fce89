//! Comparison error taxonomy.

use crate::finance::FinanceError;
use aerator_models::tables::DataError;
use thiserror::Error;

/// Errors produced while validating inputs or running a comparison.
///
/// Validation variants describe a rejected request and are distinguishable
/// through [`is_validation`](CompareError::is_validation); the remaining
/// variants are internal faults in data or numerics.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Fewer than two aerators were supplied.
    #[error("at least 2 aerators are required for a comparison, got {got}")]
    TooFewAerators {
        /// Number of aerators in the request
        got: usize,
    },

    /// No candidate has a positive oxygen transfer rating.
    #[error("no aerator has positive oxygen transfer capability")]
    NoTransferCapability,

    /// A per-aerator field that must be positive was not.
    #[error("aerator '{name}': {field} must be positive, got {value}")]
    NonPositiveAeratorField {
        /// Name of the offending aerator
        name: String,
        /// Field that failed the check
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A farm or financial field that must be positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositiveInput {
        /// Field that failed the check
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A field that must be non-negative was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput {
        /// Field that failed the check
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Discount and inflation rates coincide outside the supported range.
    #[error("discount rate and inflation rate are both {rate}%; they must differ")]
    EqualRates {
        /// The shared rate in percent
        rate: f64,
    },

    /// The demand estimate collapsed to zero or below.
    #[error("total oxygen demand must be positive, got {tod} kg O2/h")]
    NonPositiveDemand {
        /// Computed total demand in kg O₂/h
        tod: f64,
    },

    /// Covering the demand would take more units than the sizing supports.
    #[error("aerator '{name}' would require {required:.0} units to cover demand, more than the supported maximum of {max}")]
    FleetTooLarge {
        /// Name of the offending aerator
        name: String,
        /// Units the demand calls for
        required: f64,
        /// Largest representable fleet size
        max: u32,
    },

    /// A financial metric could not be evaluated for one aerator.
    #[error("failed to evaluate {metric} for aerator '{name}'")]
    Metric {
        /// Metric that failed, e.g. "irr"
        metric: &'static str,
        /// Aerator the metric was being evaluated for
        name: String,
        /// Underlying numerical failure
        #[source]
        source: FinanceError,
    },

    /// Lookup table loading or interpolation failed.
    #[error("data error: {0}")]
    Data(#[from] DataError),
}

impl CompareError {
    /// Whether this error describes a rejected request rather than an
    /// internal fault. Servers map validation errors to client-error
    /// status codes.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TooFewAerators { .. }
                | Self::NoTransferCapability
                | Self::NonPositiveAeratorField { .. }
                | Self::NonPositiveInput { .. }
                | Self::NegativeInput { .. }
                | Self::EqualRates { .. }
                | Self::NonPositiveDemand { .. }
                | Self::FleetTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerator_core::types::SolverError;

    #[test]
    fn test_validation_classification() {
        assert!(CompareError::TooFewAerators { got: 1 }.is_validation());
        assert!(CompareError::NoTransferCapability.is_validation());
        assert!(CompareError::EqualRates { rate: 5.0 }.is_validation());
        assert!(CompareError::NonPositiveDemand { tod: 0.0 }.is_validation());
        assert!(CompareError::FleetTooLarge {
            name: "A1".to_string(),
            required: 1e12,
            max: u32::MAX,
        }
        .is_validation());

        let metric = CompareError::Metric {
            metric: "irr",
            name: "A1".to_string(),
            source: FinanceError::Solver(SolverError::MaxIterationsExceeded { iterations: 100 }),
        };
        assert!(!metric.is_validation());

        let data = CompareError::Data(DataError::Parse("bad json".to_string()));
        assert!(!data.is_validation());
    }

    #[test]
    fn test_display_messages() {
        let err = CompareError::NonPositiveAeratorField {
            name: "Paddlewheel".to_string(),
            field: "sotr_kg_o2_h",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "aerator 'Paddlewheel': sotr_kg_o2_h must be positive, got -1"
        );

        let err = CompareError::TooFewAerators { got: 1 };
        assert_eq!(
            err.to_string(),
            "at least 2 aerators are required for a comparison, got 1"
        );
    }
}

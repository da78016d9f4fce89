//! Discounted cash-flow metrics over the analysis horizon.
//!
//! All functions take rates as decimal fractions (0.10 for 10%) and cash
//! flows as end-of-year amounts, so the year-`t` flow is discounted by
//! `(1 + r)^(t + 1)`. Inflation is folded into a single real discount rate
//! before any present value is taken.

use aerator_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use aerator_core::types::SolverError;
use thiserror::Error;

/// Sentinel IRR, in percent, reported when the savings stream has no
/// meaningful internal rate of return (flat-zero savings, or a root far
/// outside the plausible band).
pub const IRR_FLOOR_PERCENT: f64 = -100.0;

/// Accepted IRR band as a decimal rate. Roots outside it are treated as
/// numerical artifacts and collapsed to [`IRR_FLOOR_PERCENT`].
const IRR_BAND: (f64, f64) = (-0.99, 5.0);

/// Errors from discounted cash-flow evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    /// The inflation-adjusted discount rate is at or below -100%, where
    /// discount factors are undefined.
    #[error("real discount rate {rate} is at or below -100%")]
    RealRateBelowFloor {
        /// Offending real rate as a decimal fraction
        rate: f64,
    },

    /// The IRR root search failed.
    #[error("IRR solver failed: {0}")]
    Solver(#[from] SolverError),
}

/// Inflation-adjusted (real) discount rate via the Fisher relation.
///
/// Returns zero when the two rates coincide, which makes [`npv`] a plain
/// sum of the flows.
pub fn real_rate(discount_rate: f64, inflation_rate: f64) -> Result<f64, FinanceError> {
    if (discount_rate - inflation_rate).abs() < f64::EPSILON {
        return Ok(0.0);
    }
    let rate = (1.0 + discount_rate) / (1.0 + inflation_rate) - 1.0;
    if rate <= -1.0 {
        return Err(FinanceError::RealRateBelowFloor { rate });
    }
    Ok(rate)
}

/// Present value of a stream of end-of-year cash flows.
///
/// Flows are discounted at the real rate implied by `discount_rate` and
/// `inflation_rate`; the first flow lands at the end of year one.
pub fn npv(cash_flows: &[f64], discount_rate: f64, inflation_rate: f64) -> Result<f64, FinanceError> {
    let rate = real_rate(discount_rate, inflation_rate)?;
    if rate == 0.0 {
        return Ok(cash_flows.iter().sum());
    }
    Ok(cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + rate).powi(t as i32 + 1))
        .sum())
}

/// Internal rate of return on an investment followed by a savings stream,
/// in percent.
///
/// Solves `-investment + Σ cf_t / (1 + r)^(t+1) = 0` with Newton-Raphson
/// seeded at 10%. Degenerate inputs (non-positive investment, no flows)
/// yield `0.0`; a flat-zero stream against a real investment, or a root
/// outside the plausible band, yields [`IRR_FLOOR_PERCENT`].
pub fn irr_percent(
    investment: f64,
    cash_flows: &[f64],
    config: SolverConfig<f64>,
) -> Result<f64, FinanceError> {
    if investment <= 0.0 || cash_flows.is_empty() {
        return Ok(0.0);
    }
    if cash_flows.iter().all(|cf| cf.abs() < 1e-12) {
        return Ok(IRR_FLOOR_PERCENT);
    }

    let f = |r: f64| {
        -investment
            + cash_flows
                .iter()
                .enumerate()
                .map(|(t, cf)| cf / (1.0 + r).powi(t as i32 + 1))
                .sum::<f64>()
    };
    let f_prime = |r: f64| {
        cash_flows
            .iter()
            .enumerate()
            .map(|(t, cf)| {
                let n = t as i32 + 1;
                -f64::from(n) * cf / (1.0 + r).powi(n + 1)
            })
            .sum::<f64>()
    };

    let solver = NewtonRaphsonSolver::new(config);
    let root = solver.find_root(f, f_prime, 0.1)?;

    if root <= IRR_BAND.0 || root >= IRR_BAND.1 {
        return Ok(IRR_FLOOR_PERCENT);
    }
    Ok(root * 100.0)
}

/// Fractional years until cumulative savings recover the investment.
///
/// Interpolates within the recovering year. `None` means the stream never
/// breaks even within the horizon; a non-positive investment is recovered
/// immediately.
pub fn payback_period(investment: f64, cash_flows: &[f64]) -> Option<f64> {
    if investment <= 0.0 {
        return Some(0.0);
    }
    let mut cumulative = -investment;
    for (year, cf) in cash_flows.iter().enumerate() {
        let shortfall = -cumulative;
        cumulative += cf;
        if cumulative >= 0.0 {
            if cf.abs() < 1e-12 {
                return Some(year as f64);
            }
            return Some(year as f64 + shortfall / cf);
        }
    }
    None
}

/// Undiscounted return on investment over the horizon, in percent.
pub fn roi_percent(investment: f64, cash_flows: &[f64]) -> f64 {
    if investment <= 0.0 {
        return 0.0;
    }
    let total: f64 = cash_flows.iter().sum();
    (total - investment) / investment * 100.0
}

/// Savings present value per dollar invested.
pub fn profitability_index(npv_savings: f64, investment: f64) -> f64 {
    if investment <= 0.0 {
        return 0.0;
    }
    npv_savings / investment
}

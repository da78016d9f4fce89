//! Financial assumptions for the comparison horizon.

use serde::{Deserialize, Serialize};

/// Economic assumptions shared by every aerator in a comparison.
///
/// Rates are expressed in percent. The discount and inflation rates must
/// differ: the engine derives a real discount rate from the pair and a zero
/// real rate would make the equilibrium analysis degenerate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAssumptions {
    /// Electricity price in USD per kWh
    pub energy_cost_usd_kwh: f64,
    /// Aerator operating hours per year
    pub operating_hours_year: f64,
    /// Nominal discount rate in percent
    pub discount_rate_percent: f64,
    /// Expected inflation rate in percent
    pub inflation_rate_percent: f64,
    /// Analysis horizon in whole years (at least 1)
    pub analysis_horizon_years: u32,
    /// Safety margin applied to total oxygen demand, in percent
    #[serde(default)]
    pub safety_margin_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_margin_defaults_to_zero() {
        let json = r#"{
            "energy_cost_usd_kwh": 0.05,
            "operating_hours_year": 2920.0,
            "discount_rate_percent": 10.0,
            "inflation_rate_percent": 2.5,
            "analysis_horizon_years": 9
        }"#;
        let financial: FinancialAssumptions = serde_json::from_str(json).unwrap();
        assert_eq!(financial.safety_margin_percent, 0.0);
        assert_eq!(financial.analysis_horizon_years, 9);
    }
}

//! Comparison output types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total oxygen demand broken down by source.
///
/// Component fields are per hectare; `total_kg_o2_h` is farm-wide and
/// already includes the safety margin. When the demand came from a manual
/// override the component fields are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodBreakdown {
    /// Shrimp respiration demand in kg O₂/h per hectare
    pub shrimp_kg_o2_h_ha: f64,
    /// Water column demand in kg O₂/h per hectare
    pub water_kg_o2_h_ha: f64,
    /// Pond bottom demand in kg O₂/h per hectare
    pub bottom_kg_o2_h_ha: f64,
    /// Farm-wide total demand in kg O₂/h, safety margin included
    pub total_kg_o2_h: f64,
}

/// Per-aerator sizing, cost, and financial metric outputs.
///
/// Relative metrics (`npv_savings_usd` and below) compare this aerator's
/// running-cost savings against the least efficient candidate; the winner
/// carries neutral zeros there. `payback_years` is `None` when the savings
/// never recover the investment within the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeratorResult {
    /// Aerator name, matching the input
    pub name: String,
    /// Number of units required to meet total demand
    pub units: u32,
    /// Temperature- and salinity-corrected transfer rate per unit, kg O₂/h
    pub otr_t_kg_o2_h: f64,
    /// Fleet shaft power in horsepower
    pub total_power_hp: f64,
    /// Standard aeration efficiency in kg O₂ per kWh
    pub sae_kg_o2_kwh: f64,
    /// Units per hectare of farm area
    pub units_per_ha: f64,
    /// Horsepower per hectare of farm area
    pub hp_per_ha: f64,
    /// Fleet purchase cost in USD
    pub total_initial_cost_usd: f64,
    /// Fleet energy cost per year in USD
    pub annual_energy_cost_usd: f64,
    /// Fleet maintenance cost per year in USD
    pub annual_maintenance_cost_usd: f64,
    /// Straight-line replacement provision per year in USD
    pub annual_replacement_cost_usd: f64,
    /// Sum of energy, maintenance, and replacement costs per year in USD
    pub total_annual_cost_usd: f64,
    /// Present value of owning this fleet over the horizon, USD
    pub npv_cost_usd: f64,
    /// Present value of running-cost savings against the reference, USD
    pub npv_savings_usd: f64,
    /// Internal rate of return on the savings stream, percent
    pub irr_percent: f64,
    /// Fractional years until savings recover the investment; `None` when
    /// they never do within the horizon
    pub payback_years: Option<f64>,
    /// Return on investment over the horizon, percent
    pub roi_percent: f64,
    /// Savings NPV per dollar invested
    pub profitability_index: f64,
}

/// Full output of one comparison run.
///
/// `equilibrium_prices` is keyed by losing aerator name and holds the
/// winner's break-even per-unit purchase price against that loser. A
/// `BTreeMap` keeps serialization order deterministic, so identical inputs
/// produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Oxygen demand the fleet was sized against
    pub tod: TodBreakdown,
    /// Per-aerator outputs, in input order
    pub aerator_results: Vec<AeratorResult>,
    /// Name of the lowest-total-annual-cost aerator
    pub winner: String,
    /// Winner break-even purchase price per losing aerator, USD
    pub equilibrium_prices: BTreeMap<String, f64>,
    /// Annual farm revenue in USD, when the farm provided production figures
    pub annual_revenue_usd: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(name: &str) -> AeratorResult {
        AeratorResult {
            name: name.to_string(),
            units: 10,
            otr_t_kg_o2_h: 1.5,
            total_power_hp: 30.0,
            sae_kg_o2_kwh: 0.67,
            units_per_ha: 0.01,
            hp_per_ha: 0.03,
            total_initial_cost_usd: 5000.0,
            annual_energy_cost_usd: 3267.0,
            annual_maintenance_cost_usd: 650.0,
            annual_replacement_cost_usd: 2500.0,
            total_annual_cost_usd: 6417.0,
            npv_cost_usd: 42000.0,
            npv_savings_usd: 0.0,
            irr_percent: 0.0,
            payback_years: None,
            roi_percent: 0.0,
            profitability_index: 0.0,
        }
    }

    #[test]
    fn test_unbounded_payback_serializes_as_null() {
        let result = sample_result("A1");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"payback_years\":null"));
    }

    #[test]
    fn test_equilibrium_prices_serialize_in_name_order() {
        let mut prices = BTreeMap::new();
        prices.insert("Zeta".to_string(), 100.0);
        prices.insert("Alpha".to_string(), 250.0);

        let result = ComparisonResult {
            tod: TodBreakdown {
                shrimp_kg_o2_h_ha: 3.0,
                water_kg_o2_h_ha: 1.0,
                bottom_kg_o2_h_ha: 0.5,
                total_kg_o2_h: 4500.0,
            },
            aerator_results: vec![sample_result("Alpha"), sample_result("Zeta")],
            winner: "Alpha".to_string(),
            equilibrium_prices: prices,
            annual_revenue_usd: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        let alpha = json.find("\"Alpha\":250").unwrap();
        let zeta = json.find("\"Zeta\":100").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let result = sample_result("A1");
        let a = serde_json::to_string(&result).unwrap();
        let b = serde_json::to_string(&result).unwrap();
        assert_eq!(a, b);
    }
}

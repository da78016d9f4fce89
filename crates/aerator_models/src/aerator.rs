//! Candidate aerator description.

use serde::{Deserialize, Serialize};

/// A candidate mechanical aerator offered for the pond.
///
/// Describes the catalogue characteristics of one aerator model: its rated
/// oxygen transfer under standard conditions, power draw, purchase price,
/// expected service life, and yearly upkeep. All rates are per unit; fleet
/// totals are derived by the comparison engine.
///
/// # Example
///
/// ```
/// use aerator_models::Aerator;
///
/// let paddlewheel = Aerator {
///     name: "Paddlewheel 3HP".to_string(),
///     power_hp: 3.0,
///     sotr_kg_o2_h: 1.4,
///     initial_cost_usd: 500.0,
///     durability_years: 2.0,
///     maintenance_usd_year: 65.0,
/// };
/// assert!(paddlewheel.sotr_kg_o2_h > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aerator {
    /// Display name, also the key in comparison output maps
    pub name: String,
    /// Rated shaft power in horsepower
    pub power_hp: f64,
    /// Standard Oxygen Transfer Rate in kg O₂/h (20 °C, clean water)
    pub sotr_kg_o2_h: f64,
    /// Purchase price per unit in USD
    pub initial_cost_usd: f64,
    /// Expected service life in years
    pub durability_years: f64,
    /// Yearly maintenance cost per unit in USD
    pub maintenance_usd_year: f64,
}

//! Farm and pond environment description.

use serde::{Deserialize, Serialize};

/// Environmental and biological state of the shrimp farm.
///
/// Carries everything the oxygen demand estimator needs: water conditions,
/// stocked biomass, pond geometry, and the optional production figures used
/// for revenue reporting. When `manual_tod_kg_h` is set the farm-wide total
/// oxygen demand is taken directly from the field instead of being derived
/// from the respiration tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmContext {
    /// Water temperature in °C
    pub temperature_c: f64,
    /// Salinity in ppt
    pub salinity_ppt: f64,
    /// Average shrimp body weight in grams
    pub shrimp_weight_g: f64,
    /// Stocked biomass in kg per hectare
    pub biomass_kg_ha: f64,
    /// Total farm area in hectares
    pub area_ha: f64,
    /// Average pond depth in metres
    pub pond_depth_m: f64,
    /// Annual production in kg per hectare, for revenue reporting
    #[serde(default)]
    pub production_kg_ha_year: Option<f64>,
    /// Farm-gate shrimp price in USD per kg, for revenue reporting
    #[serde(default)]
    pub shrimp_price_usd_kg: Option<f64>,
    /// Measured farm-wide total oxygen demand in kg O₂/h, overriding the
    /// estimator when present and positive
    #[serde(default)]
    pub manual_tod_kg_h: Option<f64>,
}

impl FarmContext {
    /// Annual revenue in USD, when both production and price are known.
    pub fn annual_revenue_usd(&self) -> Option<f64> {
        match (self.production_kg_ha_year, self.shrimp_price_usd_kg) {
            (Some(production), Some(price)) => Some(production * self.area_ha * price),
            _ => None,
        }
    }
}

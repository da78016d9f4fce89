//! Total oxygen demand estimation.
//!
//! Farm-wide demand is the per-hectare sum of shrimp respiration, water
//! column respiration, and pond bottom demand, scaled by the farm area and
//! the safety margin. A measured `manual_tod_kg_h` on the farm bypasses the
//! estimate entirely.

use crate::error::CompareError;
use aerator_models::tables::RespirationModel;
use aerator_models::{FarmContext, TodBreakdown};

/// Milligrams per kilogram.
const MG_PER_KG: f64 = 1.0e6;
/// Litres per cubic metre.
const L_PER_M3: f64 = 1.0e3;
/// Grams per kilogram.
const G_PER_KG: f64 = 1.0e3;
/// Square metres per hectare.
const M2_PER_HA: f64 = 10_000.0;

/// Background respiration rates for the non-shrimp demand components.
///
/// Rates are mg O₂ per litre per hour; the bottom rate applies only to the
/// near-sediment fraction of the water volume.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandConfig {
    /// Water column (plankton and bacterial) respiration in mg/L/h
    pub water_column_rate_mg_l_h: f64,
    /// Sediment oxygen demand in mg/L/h over the bottom layer
    pub bottom_rate_mg_l_h: f64,
    /// Fraction of the pond volume counted as bottom layer
    pub bottom_volume_fraction: f64,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            water_column_rate_mg_l_h: 0.1,
            bottom_rate_mg_l_h: 0.05,
            bottom_volume_fraction: 0.1,
        }
    }
}

/// Derives farm-wide total oxygen demand from farm conditions.
#[derive(Debug, Clone)]
pub struct OxygenDemandEstimator {
    respiration: RespirationModel,
    config: DemandConfig,
}

impl OxygenDemandEstimator {
    /// Create an estimator over the given respiration model.
    pub fn new(respiration: RespirationModel, config: DemandConfig) -> Self {
        Self { respiration, config }
    }

    /// Estimate total oxygen demand for the farm.
    ///
    /// With a positive `manual_tod_kg_h` on the farm the measured value is
    /// taken as the farm-wide total (margin still applied) and the component
    /// fields are reported as zero. The returned total always includes the
    /// safety margin.
    pub fn estimate(
        &self,
        farm: &FarmContext,
        safety_margin_percent: f64,
    ) -> Result<TodBreakdown, CompareError> {
        if farm.area_ha <= 0.0 {
            return Err(CompareError::NonPositiveInput {
                field: "area_ha",
                value: farm.area_ha,
            });
        }
        if farm.pond_depth_m <= 0.0 {
            return Err(CompareError::NonPositiveInput {
                field: "pond_depth_m",
                value: farm.pond_depth_m,
            });
        }
        if farm.shrimp_weight_g <= 0.0 {
            return Err(CompareError::NonPositiveInput {
                field: "shrimp_weight_g",
                value: farm.shrimp_weight_g,
            });
        }
        if farm.biomass_kg_ha < 0.0 {
            return Err(CompareError::NegativeInput {
                field: "biomass_kg_ha",
                value: farm.biomass_kg_ha,
            });
        }
        if safety_margin_percent < 0.0 {
            return Err(CompareError::NegativeInput {
                field: "safety_margin_percent",
                value: safety_margin_percent,
            });
        }

        let margin = 1.0 + safety_margin_percent / 100.0;

        if let Some(manual) = farm.manual_tod_kg_h {
            if manual <= 0.0 {
                return Err(CompareError::NonPositiveInput {
                    field: "manual_tod_kg_h",
                    value: manual,
                });
            }
            return Ok(TodBreakdown {
                shrimp_kg_o2_h_ha: 0.0,
                water_kg_o2_h_ha: 0.0,
                bottom_kg_o2_h_ha: 0.0,
                total_kg_o2_h: manual * margin,
            });
        }

        // mg O2/g/h per shrimp, clamped to the tabulated ranges
        let resp_rate = self.respiration.rate(
            farm.salinity_ppt,
            farm.temperature_c,
            farm.shrimp_weight_g,
        )?;

        let shrimp = resp_rate * farm.biomass_kg_ha * G_PER_KG / MG_PER_KG;

        let volume_m3_ha = M2_PER_HA * farm.pond_depth_m;
        let water =
            self.config.water_column_rate_mg_l_h * volume_m3_ha * L_PER_M3 / MG_PER_KG;
        let bottom = self.config.bottom_rate_mg_l_h
            * volume_m3_ha
            * self.config.bottom_volume_fraction
            * L_PER_M3
            / MG_PER_KG;

        let total = (shrimp + water + bottom) * farm.area_ha * margin;
        if total <= 0.0 {
            return Err(CompareError::NonPositiveDemand { tod: total });
        }

        Ok(TodBreakdown {
            shrimp_kg_o2_h_ha: shrimp,
            water_kg_o2_h_ha: water,
            bottom_kg_o2_h_ha: bottom,
            total_kg_o2_h: total,
        })
    }

    /// Background rate configuration in use.
    pub fn config(&self) -> &DemandConfig {
        &self.config
    }
}

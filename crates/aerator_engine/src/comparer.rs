//! Aerator comparison orchestration.
//!
//! `ComparisonEngine` runs the full pipeline: validate the request, estimate
//! total oxygen demand, size and cost each candidate fleet under
//! field-corrected transfer rates, rank by total annual cost, evaluate the
//! relative financial metrics against the least efficient candidate, and
//! compute the winner's break-even price against every loser.

use std::collections::BTreeMap;

use aerator_core::math::solvers::SolverConfig;
use aerator_models::tables::{RespirationModel, SaturationModel};
use aerator_models::{
    Aerator, AeratorResult, ComparisonResult, FarmContext, FinancialAssumptions,
};
use tracing::debug;

use crate::demand::{DemandConfig, OxygenDemandEstimator};
use crate::error::CompareError;
use crate::finance;

/// Physical and numerical constants of the comparison.
///
/// Defaults follow standard aeration engineering practice: van't Hoff
/// temperature correction with θ = 1.024 against a 20 °C rating reference,
/// and 0.746 kW per horsepower.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// van't Hoff temperature correction base
    pub theta: f64,
    /// Temperature at which SOTR is rated, °C
    pub reference_temp_c: f64,
    /// Kilowatts per horsepower
    pub hp_to_kw: f64,
    /// Background respiration rates for demand estimation
    pub demand: DemandConfig,
    /// Newton-Raphson settings for the IRR root search
    pub irr_solver: SolverConfig<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theta: 1.024,
            reference_temp_c: 20.0,
            hp_to_kw: 0.746,
            demand: DemandConfig::default(),
            irr_solver: SolverConfig::new(1e-6, 100),
        }
    }
}

/// Per-aerator sizing and cost figures, before financial metrics.
struct Sizing {
    otr_t: f64,
    units: u32,
    energy_per_unit: f64,
    maintenance_per_unit: f64,
    initial: f64,
    energy: f64,
    maintenance: f64,
    replacement: f64,
    total_annual: f64,
}

/// Stateless comparison engine over a pair of lookup models.
///
/// Construction is cheap and the engine is `Clone`; a server typically
/// builds one at startup and shares it across requests. Every `compare`
/// call is pure: identical inputs produce identical results.
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    saturation: SaturationModel,
    estimator: OxygenDemandEstimator,
    config: EngineConfig,
}

impl ComparisonEngine {
    /// Build an engine over the given lookup models.
    pub fn new(
        saturation: SaturationModel,
        respiration: RespirationModel,
        config: EngineConfig,
    ) -> Self {
        let estimator = OxygenDemandEstimator::new(respiration, config.demand.clone());
        Self {
            saturation,
            estimator,
            config,
        }
    }

    /// Build an engine over the bundled reference tables.
    pub fn with_bundled_tables(config: EngineConfig) -> Result<Self, CompareError> {
        Ok(Self::new(
            SaturationModel::bundled()?,
            RespirationModel::bundled()?,
            config,
        ))
    }

    /// Run a full comparison.
    ///
    /// Fails with a validation-classified [`CompareError`] on malformed
    /// input, and with `Metric` or `Data` variants on numerical or lookup
    /// faults. No partial result is ever returned.
    pub fn compare(
        &self,
        farm: &FarmContext,
        financial: &FinancialAssumptions,
        aerators: &[Aerator],
    ) -> Result<ComparisonResult, CompareError> {
        validate(financial, aerators)?;

        let tod = self
            .estimator
            .estimate(farm, financial.safety_margin_percent)?;

        let correction = self.transfer_correction(farm)?;

        let sizings: Vec<Sizing> = aerators
            .iter()
            .map(|a| self.size_fleet(a, tod.total_kg_o2_h, correction, financial))
            .collect::<Result<_, _>>()?;

        // Ranking only considers aerators that achieve transfer under the
        // given field conditions.
        let eligible: Vec<usize> = (0..sizings.len())
            .filter(|&i| sizings[i].units > 0)
            .collect();
        if eligible.is_empty() {
            return Err(CompareError::NoTransferCapability);
        }

        // On cost ties the earliest candidate in input order wins, keeping
        // the ranking deterministic.
        let mut winner_idx = eligible[0];
        let mut reference_idx = eligible[0];
        for &i in &eligible[1..] {
            if sizings[i].total_annual < sizings[winner_idx].total_annual {
                winner_idx = i;
            }
            if sizings[i].total_annual > sizings[reference_idx].total_annual {
                reference_idx = i;
            }
        }

        debug!(
            winner = %aerators[winner_idx].name,
            reference = %aerators[reference_idx].name,
            tod_kg_o2_h = tod.total_kg_o2_h,
            "ranked {} aerators",
            eligible.len()
        );

        let discount = financial.discount_rate_percent / 100.0;
        let inflation = financial.inflation_rate_percent / 100.0;
        let horizon = financial.analysis_horizon_years as usize;
        let reference_annual = sizings[reference_idx].total_annual;

        let mut results = Vec::with_capacity(aerators.len());
        for (i, (aerator, sizing)) in aerators.iter().zip(&sizings).enumerate() {
            results.push(self.score(
                aerator,
                sizing,
                i == winner_idx,
                reference_annual,
                farm.area_ha,
                discount,
                inflation,
                horizon,
            )?);
        }

        let winner_sizing = &sizings[winner_idx];
        let mut equilibrium_prices = BTreeMap::new();
        for &i in &eligible {
            if i == winner_idx {
                continue;
            }
            equilibrium_prices.insert(
                aerators[i].name.clone(),
                equilibrium_price(&aerators[winner_idx], winner_sizing, &sizings[i]),
            );
        }

        Ok(ComparisonResult {
            tod,
            aerator_results: results,
            winner: aerators[winner_idx].name.clone(),
            equilibrium_prices,
            annual_revenue_usd: farm.annual_revenue_usd(),
        })
    }

    /// Combined temperature and saturation correction applied to SOTR.
    ///
    /// Returns zero when the rating-reference saturation degenerates, which
    /// excludes every aerator rather than dividing by zero.
    fn transfer_correction(&self, farm: &FarmContext) -> Result<f64, CompareError> {
        let cs_field = self
            .saturation
            .saturation(farm.temperature_c, farm.salinity_ppt)?;
        let cs_rated = self
            .saturation
            .saturation(self.config.reference_temp_c, farm.salinity_ppt)?;
        if cs_rated <= 0.0 {
            return Ok(0.0);
        }
        let temp_factor = self
            .config
            .theta
            .powf(farm.temperature_c - self.config.reference_temp_c);
        Ok(temp_factor * cs_field / cs_rated)
    }

    fn size_fleet(
        &self,
        aerator: &Aerator,
        tod_kg_o2_h: f64,
        correction: f64,
        financial: &FinancialAssumptions,
    ) -> Result<Sizing, CompareError> {
        let otr_t = aerator.sotr_kg_o2_h * correction;
        let units = if otr_t > 0.0 {
            let required = (tod_kg_o2_h / otr_t).ceil();
            // An `as u32` cast would silently cap the fleet here
            if required > f64::from(u32::MAX) {
                return Err(CompareError::FleetTooLarge {
                    name: aerator.name.clone(),
                    required,
                    max: u32::MAX,
                });
            }
            required as u32
        } else {
            0
        };
        let fleet = f64::from(units);

        let power_kw = aerator.power_hp * self.config.hp_to_kw;
        let energy_per_unit =
            power_kw * financial.energy_cost_usd_kwh * financial.operating_hours_year;

        let initial = fleet * aerator.initial_cost_usd;
        let energy = fleet * energy_per_unit;
        let maintenance = fleet * aerator.maintenance_usd_year;
        let replacement = initial / aerator.durability_years;

        Ok(Sizing {
            otr_t,
            units,
            energy_per_unit,
            maintenance_per_unit: aerator.maintenance_usd_year,
            initial,
            energy,
            maintenance,
            replacement,
            total_annual: energy + maintenance + replacement,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn score(
        &self,
        aerator: &Aerator,
        sizing: &Sizing,
        is_winner: bool,
        reference_annual: f64,
        area_ha: f64,
        discount: f64,
        inflation: f64,
        horizon: usize,
    ) -> Result<AeratorResult, CompareError> {
        let metric_err = |metric: &'static str| {
            let name = aerator.name.clone();
            move |source| CompareError::Metric {
                metric,
                name,
                source,
            }
        };

        let cost_flows = vec![sizing.total_annual; horizon];
        let npv_cost = sizing.initial
            + finance::npv(&cost_flows, discount, inflation).map_err(metric_err("npv_cost"))?;

        let (npv_savings, irr, payback, roi, pi) = if is_winner {
            // The winner is its own baseline; relative metrics are neutral.
            (0.0, 0.0, Some(0.0), 0.0, 0.0)
        } else if sizing.units == 0 {
            // Excluded from ranking; a savings comparison is meaningless.
            (0.0, 0.0, None, 0.0, 0.0)
        } else {
            let savings = reference_annual - sizing.total_annual;
            let savings_flows = vec![savings; horizon];
            let npv_savings = finance::npv(&savings_flows, discount, inflation)
                .map_err(metric_err("npv_savings"))?;
            let irr =
                finance::irr_percent(sizing.initial, &savings_flows, self.config.irr_solver)
                    .map_err(metric_err("irr"))?;
            let payback = finance::payback_period(sizing.initial, &savings_flows);
            let roi = finance::roi_percent(sizing.initial, &savings_flows);
            let pi = finance::profitability_index(npv_savings, sizing.initial);
            (npv_savings, irr, payback, roi, pi)
        };

        let fleet = f64::from(sizing.units);
        let power_kw = aerator.power_hp * self.config.hp_to_kw;
        Ok(AeratorResult {
            name: aerator.name.clone(),
            units: sizing.units,
            otr_t_kg_o2_h: sizing.otr_t,
            total_power_hp: fleet * aerator.power_hp,
            sae_kg_o2_kwh: aerator.sotr_kg_o2_h / power_kw,
            units_per_ha: fleet / area_ha,
            hp_per_ha: fleet * aerator.power_hp / area_ha,
            total_initial_cost_usd: sizing.initial,
            annual_energy_cost_usd: sizing.energy,
            annual_maintenance_cost_usd: sizing.maintenance,
            annual_replacement_cost_usd: sizing.replacement,
            total_annual_cost_usd: sizing.total_annual,
            npv_cost_usd: npv_cost,
            npv_savings_usd: npv_savings,
            irr_percent: irr,
            payback_years: payback,
            roi_percent: roi,
            profitability_index: pi,
        })
    }
}

/// Winner's per-unit break-even purchase price against one loser.
///
/// The price at which the winner's total annual cost (energy, maintenance,
/// and straight-line replacement at that price) equals the loser's, floored
/// at zero.
fn equilibrium_price(winner: &Aerator, winner_sizing: &Sizing, loser: &Sizing) -> f64 {
    if winner_sizing.units == 0 {
        return 0.0;
    }
    let per_unit_budget = loser.total_annual / f64::from(winner_sizing.units)
        - winner_sizing.energy_per_unit
        - winner_sizing.maintenance_per_unit;
    (winner.durability_years * per_unit_budget).max(0.0)
}

fn validate(
    financial: &FinancialAssumptions,
    aerators: &[Aerator],
) -> Result<(), CompareError> {
    if aerators.len() < 2 {
        return Err(CompareError::TooFewAerators {
            got: aerators.len(),
        });
    }
    if aerators.iter().all(|a| a.sotr_kg_o2_h <= 0.0) {
        return Err(CompareError::NoTransferCapability);
    }
    for aerator in aerators {
        let positive = [
            ("sotr_kg_o2_h", aerator.sotr_kg_o2_h),
            ("power_hp", aerator.power_hp),
            ("durability_years", aerator.durability_years),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(CompareError::NonPositiveAeratorField {
                    name: aerator.name.clone(),
                    field,
                    value,
                });
            }
        }
        // Prices and upkeep may legitimately be zero, never negative
        let non_negative = [
            ("initial_cost_usd", aerator.initial_cost_usd),
            ("maintenance_usd_year", aerator.maintenance_usd_year),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(CompareError::NonPositiveAeratorField {
                    name: aerator.name.clone(),
                    field,
                    value,
                });
            }
        }
    }

    if financial.energy_cost_usd_kwh < 0.0 {
        return Err(CompareError::NegativeInput {
            field: "energy_cost_usd_kwh",
            value: financial.energy_cost_usd_kwh,
        });
    }
    if financial.operating_hours_year <= 0.0 {
        return Err(CompareError::NonPositiveInput {
            field: "operating_hours_year",
            value: financial.operating_hours_year,
        });
    }
    if financial.analysis_horizon_years == 0 {
        return Err(CompareError::NonPositiveInput {
            field: "analysis_horizon_years",
            value: 0.0,
        });
    }
    if (financial.discount_rate_percent - financial.inflation_rate_percent).abs() < f64::EPSILON {
        return Err(CompareError::EqualRates {
            rate: financial.discount_rate_percent,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn engine() -> ComparisonEngine {
        ComparisonEngine::with_bundled_tables(EngineConfig::default()).unwrap()
    }

    /// Farm with a measured demand and water at the 20 °C rating reference,
    /// so OTR_T equals SOTR and unit counts are exact.
    fn reference_farm() -> FarmContext {
        FarmContext {
            temperature_c: 20.0,
            salinity_ppt: 30.0,
            shrimp_weight_g: 12.0,
            biomass_kg_ha: 3500.0,
            area_ha: 1000.0,
            pond_depth_m: 1.0,
            production_kg_ha_year: None,
            shrimp_price_usd_kg: None,
            manual_tod_kg_h: Some(5443.7675),
        }
    }

    fn reference_financial() -> FinancialAssumptions {
        FinancialAssumptions {
            energy_cost_usd_kwh: 0.05,
            operating_hours_year: 2920.0,
            discount_rate_percent: 10.0,
            inflation_rate_percent: 2.5,
            analysis_horizon_years: 9,
            safety_margin_percent: 0.0,
        }
    }

    fn paddlewheel_1() -> Aerator {
        Aerator {
            name: "Aerator 1".to_string(),
            power_hp: 3.0,
            sotr_kg_o2_h: 1.4,
            initial_cost_usd: 500.0,
            durability_years: 2.0,
            maintenance_usd_year: 65.0,
        }
    }

    fn paddlewheel_2() -> Aerator {
        Aerator {
            name: "Aerator 2".to_string(),
            power_hp: 3.5,
            sotr_kg_o2_h: 2.2,
            initial_cost_usd: 800.0,
            durability_years: 4.5,
            maintenance_usd_year: 50.0,
        }
    }

    fn paddlewheel_3() -> Aerator {
        Aerator {
            name: "Aerator 3".to_string(),
            power_hp: 3.0,
            sotr_kg_o2_h: 1.0,
            initial_cost_usd: 400.0,
            durability_years: 2.0,
            maintenance_usd_year: 80.0,
        }
    }

    #[test]
    fn test_two_aerator_sizing_and_costs() {
        let result = engine()
            .compare(
                &reference_farm(),
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();

        let a1 = &result.aerator_results[0];
        let a2 = &result.aerator_results[1];
        assert_eq!(a1.units, 3889);
        assert_eq!(a2.units, 2475);

        // OTR_T equals SOTR at the rating reference temperature
        assert_relative_eq!(a1.otr_t_kg_o2_h, 1.4, epsilon = 1e-9);

        assert_relative_eq!(a1.total_initial_cost_usd, 1_944_500.0, epsilon = 1e-6);
        assert_relative_eq!(a1.annual_energy_cost_usd, 3889.0 * 326.748, epsilon = 1e-4);
        assert_relative_eq!(a1.annual_replacement_cost_usd, 972_250.0, epsilon = 1e-6);
        assert_relative_eq!(a1.total_annual_cost_usd, 2_495_757.972, epsilon = 1e-3);
        assert_relative_eq!(a2.total_annual_cost_usd, 1_507_234.85, epsilon = 1e-3);

        assert_relative_eq!(a1.units_per_ha, 3.889);
        assert_relative_eq!(a2.hp_per_ha, 2475.0 * 3.5 / 1000.0);
    }

    #[test]
    fn test_cheaper_running_cost_wins_despite_higher_price() {
        let result = engine()
            .compare(
                &reference_farm(),
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();

        assert_eq!(result.winner, "Aerator 2");

        // The winner's break-even price against the loser is strictly
        // positive and well above its actual $800 price.
        let equilibrium = result.equilibrium_prices["Aerator 1"];
        assert_relative_eq!(equilibrium, 2597.31, epsilon = 0.01);
        assert!(!result.equilibrium_prices.contains_key("Aerator 2"));
    }

    #[test]
    fn test_winner_metrics_are_neutral() {
        let result = engine()
            .compare(
                &reference_farm(),
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();

        let winner = &result.aerator_results[1];
        assert_eq!(winner.name, result.winner);
        assert_relative_eq!(winner.npv_savings_usd, 0.0);
        assert_relative_eq!(winner.irr_percent, 0.0);
        assert_eq!(winner.payback_years, Some(0.0));
        assert_relative_eq!(winner.roi_percent, 0.0);
        assert_relative_eq!(winner.profitability_index, 0.0);
        // Absolute ownership cost is still reported
        assert!(winner.npv_cost_usd > winner.total_initial_cost_usd);
    }

    #[test]
    fn test_reference_aerator_metrics_are_degenerate() {
        // With two aerators the loser is also the savings baseline: zero
        // savings against a real investment.
        let result = engine()
            .compare(
                &reference_farm(),
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();

        let loser = &result.aerator_results[0];
        assert_relative_eq!(loser.npv_savings_usd, 0.0);
        assert_eq!(loser.payback_years, None);
        assert_relative_eq!(loser.roi_percent, -100.0);
        assert_relative_eq!(loser.irr_percent, finance::IRR_FLOOR_PERCENT);
        assert_relative_eq!(loser.profitability_index, 0.0);
    }

    #[test]
    fn test_middle_aerator_gets_real_relative_metrics() {
        // Three candidates: Aerator 3 is the most expensive to run and
        // becomes the baseline, so Aerator 1's savings are real.
        let result = engine()
            .compare(
                &reference_farm(),
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2(), paddlewheel_3()],
            )
            .unwrap();

        assert_eq!(result.winner, "Aerator 2");
        let middle = &result.aerator_results[0];

        // Annual savings 807,378.14 on a 1,944,500 investment
        assert_relative_eq!(
            middle.payback_years.unwrap(),
            2.40841,
            epsilon = 1e-4
        );
        assert_relative_eq!(middle.roi_percent, 273.69, epsilon = 0.01);
        assert!(middle.irr_percent > 35.0 && middle.irr_percent < 45.0);
        assert!(middle.npv_savings_usd > 0.0);
        assert!(middle.profitability_index > 0.0);

        // Both losers priced in the equilibrium map, loser keys only
        assert_eq!(result.equilibrium_prices.len(), 2);
        assert_relative_eq!(
            result.equilibrium_prices["Aerator 3"],
            4065.28,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_warm_water_changes_transfer_rate() {
        let mut farm = reference_farm();
        farm.temperature_c = 30.0;
        let result = engine()
            .compare(
                &farm,
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();

        let a1 = &result.aerator_results[0];
        assert!((a1.otr_t_kg_o2_h - 1.4).abs() > 1e-3);
        // Units always cover demand at the corrected rate
        let implied = (result.tod.total_kg_o2_h / a1.otr_t_kg_o2_h).ceil() as u32;
        assert_eq!(a1.units, implied);
    }

    #[test]
    fn test_estimated_demand_path() {
        let mut farm = reference_farm();
        farm.manual_tod_kg_h = None;
        let result = engine()
            .compare(
                &farm,
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();

        assert!(result.tod.shrimp_kg_o2_h_ha > 0.0);
        assert!(result.tod.total_kg_o2_h > 0.0);
        assert!(result.aerator_results[0].units > 0);
    }

    #[test]
    fn test_annual_revenue_passthrough() {
        let mut farm = reference_farm();
        farm.production_kg_ha_year = Some(8000.0);
        farm.shrimp_price_usd_kg = Some(5.0);
        let result = engine()
            .compare(
                &farm,
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap();
        assert_relative_eq!(result.annual_revenue_usd.unwrap(), 8000.0 * 1000.0 * 5.0);
    }

    #[test]
    fn test_identical_inputs_serialize_identically() {
        let eng = engine();
        let farm = reference_farm();
        let financial = reference_financial();
        let aerators = [paddlewheel_1(), paddlewheel_2(), paddlewheel_3()];

        let a = serde_json::to_string(&eng.compare(&farm, &financial, &aerators).unwrap())
            .unwrap();
        let b = serde_json::to_string(&eng.compare(&farm, &financial, &aerators).unwrap())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_single_aerator() {
        let err = engine()
            .compare(&reference_farm(), &reference_financial(), &[paddlewheel_1()])
            .unwrap_err();
        assert!(matches!(err, CompareError::TooFewAerators { got: 1 }));
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_fleet_without_transfer_capability() {
        let mut a = paddlewheel_1();
        let mut b = paddlewheel_2();
        a.sotr_kg_o2_h = 0.0;
        b.sotr_kg_o2_h = 0.0;
        let err = engine()
            .compare(&reference_farm(), &reference_financial(), &[a, b])
            .unwrap_err();
        assert!(matches!(err, CompareError::NoTransferCapability));
    }

    #[test]
    fn test_rejects_single_nonpositive_field() {
        let mut a = paddlewheel_1();
        a.durability_years = 0.0;
        let err = engine()
            .compare(&reference_farm(), &reference_financial(), &[a, paddlewheel_2()])
            .unwrap_err();
        assert!(matches!(
            err,
            CompareError::NonPositiveAeratorField {
                field: "durability_years",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_equal_rates() {
        let mut financial = reference_financial();
        financial.inflation_rate_percent = financial.discount_rate_percent;
        let err = engine()
            .compare(
                &reference_farm(),
                &financial,
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap_err();
        assert!(matches!(err, CompareError::EqualRates { rate } if rate == 10.0));
    }

    #[test]
    fn test_rejects_fleet_beyond_unit_limit() {
        // Demand so far beyond the transfer rating that the required unit
        // count cannot be represented.
        let mut farm = reference_farm();
        farm.manual_tod_kg_h = Some(1.0e16);
        let err = engine()
            .compare(
                &farm,
                &reference_financial(),
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap_err();
        assert!(matches!(err, CompareError::FleetTooLarge { ref name, .. } if name == "Aerator 1"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let mut financial = reference_financial();
        financial.analysis_horizon_years = 0;
        let err = engine()
            .compare(
                &reference_farm(),
                &financial,
                &[paddlewheel_1(), paddlewheel_2()],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CompareError::NonPositiveInput {
                field: "analysis_horizon_years",
                ..
            }
        ));
    }

    proptest! {
        /// Raising SOTR never increases the required unit count.
        #[test]
        fn prop_units_monotone_in_sotr(
            sotr in 0.5f64..5.0,
            bump in 0.01f64..3.0,
        ) {
            let eng = engine();
            let mut low = paddlewheel_1();
            let mut high = paddlewheel_2();
            low.sotr_kg_o2_h = sotr;
            high.sotr_kg_o2_h = sotr + bump;
            high.power_hp = low.power_hp;

            let result = eng
                .compare(&reference_farm(), &reference_financial(), &[low, high])
                .unwrap();
            prop_assert!(
                result.aerator_results[1].units <= result.aerator_results[0].units
            );
        }

        /// The winner always carries the lowest total annual cost among
        /// eligible candidates.
        #[test]
        fn prop_winner_has_lowest_annual_cost(
            sotr1 in 0.8f64..4.0,
            sotr2 in 0.8f64..4.0,
            cost1 in 100.0f64..2000.0,
            cost2 in 100.0f64..2000.0,
        ) {
            let eng = engine();
            let mut a = paddlewheel_1();
            let mut b = paddlewheel_2();
            a.sotr_kg_o2_h = sotr1;
            a.initial_cost_usd = cost1;
            b.sotr_kg_o2_h = sotr2;
            b.initial_cost_usd = cost2;

            let result = eng
                .compare(&reference_farm(), &reference_financial(), &[a, b])
                .unwrap();
            let winner_cost = result
                .aerator_results
                .iter()
                .find(|r| r.name == result.winner)
                .unwrap()
                .total_annual_cost_usd;
            for r in &result.aerator_results {
                if r.units > 0 {
                    prop_assert!(winner_cost <= r.total_annual_cost_usd);
                }
            }
        }
    }
}

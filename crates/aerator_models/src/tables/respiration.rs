//! Shrimp routine respiration lookup.

use super::schema::{RespirationGrid, BUNDLED_RESPIRATION_JSON};
use super::DataError;
use aerator_core::math::interpolators::TrilinearInterpolator;

/// Shrimp respiration model over salinity, temperature, and body weight.
///
/// Wraps a trilinear interpolator on the tabulated respiration grid and
/// clamps every query dimension to the tabulated range, mirroring
/// [`SaturationModel`](super::SaturationModel). Rates are mg O₂ per gram of
/// shrimp per hour.
///
/// # Example
///
/// ```
/// use aerator_models::tables::RespirationModel;
///
/// let model = RespirationModel::bundled().unwrap();
/// let rate = model.rate(25.0, 28.0, 12.0).unwrap();
/// assert!(rate > 0.0 && rate < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct RespirationModel {
    /// x = salinity (ppt), y = temperature (°C), z = weight (g)
    interp: TrilinearInterpolator<f64>,
}

impl RespirationModel {
    /// Build the model from a validated grid document.
    pub fn new(grid: RespirationGrid) -> Result<Self, DataError> {
        let interp = TrilinearInterpolator::new(
            grid.salinity_ppt,
            grid.temperature_c,
            grid.weight_g,
            grid.values,
        )?;
        Ok(Self { interp })
    }

    /// Build the model from the bundled reference table.
    pub fn bundled() -> Result<Self, DataError> {
        Self::new(RespirationGrid::from_json(BUNDLED_RESPIRATION_JSON)?)
    }

    /// Respiration rate in mg O₂/g/h at the given conditions.
    ///
    /// All three inputs are clamped to the tabulated range before lookup.
    pub fn rate(
        &self,
        salinity_ppt: f64,
        temperature_c: f64,
        weight_g: f64,
    ) -> Result<f64, DataError> {
        let (s_min, s_max) = self.interp.domain_x();
        let (t_min, t_max) = self.interp.domain_y();
        let (w_min, w_max) = self.interp.domain_z();

        let s = salinity_ppt.clamp(s_min, s_max);
        let t = temperature_c.clamp(t_min, t_max);
        let w = weight_g.clamp(w_min, w_max);

        Ok(self.interp.interpolate(s, t, w)?)
    }

    /// Tabulated salinity range in ppt.
    #[inline]
    pub fn salinity_domain(&self) -> (f64, f64) {
        self.interp.domain_x()
    }

    /// Tabulated temperature range in °C.
    #[inline]
    pub fn temperature_domain(&self) -> (f64, f64) {
        self.interp.domain_y()
    }

    /// Tabulated body weight range in grams.
    #[inline]
    pub fn weight_domain(&self) -> (f64, f64) {
        self.interp.domain_z()
    }
}

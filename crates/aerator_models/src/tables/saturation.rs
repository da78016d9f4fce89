//! Dissolved oxygen saturation lookup.

use super::schema::{SaturationGrid, BUNDLED_SATURATION_JSON};
use super::DataError;
use aerator_core::math::interpolators::BilinearInterpolator;

/// Dissolved oxygen saturation model over temperature and salinity.
///
/// Wraps a bilinear interpolator on the tabulated saturation grid. Queries
/// are clamped to the tabulated range, so a 42 °C reading against a grid
/// ending at 40 °C resolves to the 40 °C boundary value rather than failing.
/// The model is read-only after construction and safe to share across
/// threads.
///
/// # Example
///
/// ```
/// use aerator_models::tables::SaturationModel;
///
/// let model = SaturationModel::bundled().unwrap();
/// let cs = model.saturation(28.0, 25.0).unwrap();
/// assert!(cs > 5.0 && cs < 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct SaturationModel {
    /// x = temperature (°C), y = salinity (ppt)
    interp: BilinearInterpolator<f64>,
}

impl SaturationModel {
    /// Build the model from a validated grid document.
    ///
    /// # Returns
    ///
    /// * `Ok(SaturationModel)` - Grid axes and shape were valid
    /// * `Err(DataError::Grid)` - Short or non-monotonic axes, or a value
    ///   grid that does not match the axis shape
    pub fn new(grid: SaturationGrid) -> Result<Self, DataError> {
        let interp =
            BilinearInterpolator::new(grid.temperature_c, grid.salinity_ppt, grid.values)?;
        Ok(Self { interp })
    }

    /// Build the model from the bundled reference table.
    pub fn bundled() -> Result<Self, DataError> {
        Self::new(SaturationGrid::from_json(BUNDLED_SATURATION_JSON)?)
    }

    /// Oxygen saturation in mg/L at the given conditions.
    ///
    /// Both inputs are clamped to the tabulated range before lookup.
    pub fn saturation(&self, temperature_c: f64, salinity_ppt: f64) -> Result<f64, DataError> {
        let (t_min, t_max) = self.interp.domain_x();
        let (s_min, s_max) = self.interp.domain_y();

        let t = temperature_c.clamp(t_min, t_max);
        let s = salinity_ppt.clamp(s_min, s_max);

        Ok(self.interp.interpolate(t, s)?)
    }

    /// Tabulated temperature range in °C.
    #[inline]
    pub fn temperature_domain(&self) -> (f64, f64) {
        self.interp.domain_x()
    }

    /// Tabulated salinity range in ppt.
    #[inline]
    pub fn salinity_domain(&self) -> (f64, f64) {
        self.interp.domain_y()
    }
}

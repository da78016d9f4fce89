//! Trilinear 3D interpolation for volumes.

use super::bilinear::{find_cell, validate_axis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Trilinear interpolator for 3D grid data.
///
/// Stores a dense grid of values w(x, y, z) and blends the eight corners of
/// the enclosing cell to compute values at arbitrary (x, y, z) coordinates
/// within the grid. Used for tabulated rates that vary along three physical
/// dimensions, such as respiration over salinity, temperature, and body
/// weight.
///
/// # Grid Layout
///
/// The grid is stored as `ws[i][j][k] = w(xs[i], ys[j], zs[k])`.
///
/// # Example
///
/// ```
/// use aerator_core::math::interpolators::TrilinearInterpolator;
///
/// let interp = TrilinearInterpolator::new(
///     vec![0.0, 1.0],
///     vec![0.0, 1.0],
///     vec![0.0, 1.0],
///     vec![
///         vec![vec![0.0, 1.0], vec![1.0, 2.0]],
///         vec![vec![1.0, 2.0], vec![2.0, 3.0]],
///     ],
/// ).unwrap();
///
/// // w = x + y + z is reproduced exactly
/// let w: f64 = interp.interpolate(0.5, 0.5, 0.5).unwrap();
/// assert!((w - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TrilinearInterpolator<T: Float> {
    /// X-axis breakpoints, strictly increasing
    xs: Vec<T>,
    /// Y-axis breakpoints, strictly increasing
    ys: Vec<T>,
    /// Z-axis breakpoints, strictly increasing
    zs: Vec<T>,
    /// Grid values: ws[i][j][k] = w(xs[i], ys[j], zs[k])
    ws: Vec<Vec<Vec<T>>>,
}

impl<T: Float> TrilinearInterpolator<T> {
    /// Construct a trilinear interpolator from grid data.
    ///
    /// # Arguments
    ///
    /// * `xs`, `ys`, `zs` - Axis breakpoints (strictly increasing, length >= 2)
    /// * `ws` - Dense value grid with `ws[i][j][k] = w(xs[i], ys[j], zs[k])`
    ///
    /// # Returns
    ///
    /// * `Ok(TrilinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 breakpoints on an axis
    /// * `Err(InterpolationError::NonMonotonicData)` - Axis not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Grid shape does not match the axes
    pub fn new(
        xs: Vec<T>,
        ys: Vec<T>,
        zs: Vec<T>,
        ws: Vec<Vec<Vec<T>>>,
    ) -> Result<Self, InterpolationError> {
        validate_axis(&xs)?;
        validate_axis(&ys)?;
        validate_axis(&zs)?;

        if ws.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid planes ({}) must match x-axis length ({})",
                ws.len(),
                xs.len()
            )));
        }
        for (i, plane) in ws.iter().enumerate() {
            if plane.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid plane {} rows ({}) must match y-axis length ({})",
                    i,
                    plane.len(),
                    ys.len()
                )));
            }
            for (j, row) in plane.iter().enumerate() {
                if row.len() != zs.len() {
                    return Err(InterpolationError::InvalidInput(format!(
                        "Grid row ({}, {}) length ({}) must match z-axis length ({})",
                        i,
                        j,
                        row.len(),
                        zs.len()
                    )));
                }
            }
        }

        Ok(Self { xs, ys, zs, ws })
    }

    /// Interpolate value at point (x, y, z) by blending the eight corners
    /// of the enclosing grid cell.
    ///
    /// # Returns
    ///
    /// * `Ok(w)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If (x, y, z) is outside the grid
    pub fn interpolate(&self, x: T, y: T, z: T) -> Result<T, InterpolationError> {
        self.check_bounds(x, self.domain_x())?;
        self.check_bounds(y, self.domain_y())?;
        self.check_bounds(z, self.domain_z())?;

        let i = find_cell(&self.xs, x);
        let j = find_cell(&self.ys, y);
        let k = find_cell(&self.zs, z);

        // Strict monotonicity guarantees the denominators are non-zero.
        let u = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let v = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);
        let t = (z - self.zs[k]) / (self.zs[k + 1] - self.zs[k]);

        let one = T::one();

        // Collapse the z axis first, then y, then x.
        let w00 = self.ws[i][j][k] * (one - t) + self.ws[i][j][k + 1] * t;
        let w01 = self.ws[i][j + 1][k] * (one - t) + self.ws[i][j + 1][k + 1] * t;
        let w10 = self.ws[i + 1][j][k] * (one - t) + self.ws[i + 1][j][k + 1] * t;
        let w11 = self.ws[i + 1][j + 1][k] * (one - t) + self.ws[i + 1][j + 1][k + 1] * t;

        let w0 = w00 * (one - v) + w01 * v;
        let w1 = w10 * (one - v) + w11 * v;

        Ok(w0 * (one - u) + w1 * u)
    }

    /// Return the valid interpolation domain for x.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Return the valid interpolation domain for y.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Return the valid interpolation domain for z.
    #[inline]
    pub fn domain_z(&self) -> (T, T) {
        (self.zs[0], self.zs[self.zs.len() - 1])
    }

    #[inline]
    fn check_bounds(&self, q: T, (min, max): (T, T)) -> Result<(), InterpolationError> {
        if q < min || q > max {
            return Err(InterpolationError::OutOfBounds {
                x: q.to_f64().unwrap_or(f64::NAN),
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

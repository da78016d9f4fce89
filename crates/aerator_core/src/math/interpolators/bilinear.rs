//! Bilinear 2D interpolation for surfaces.

use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for 2D grid data.
///
/// Stores a dense grid of values z(x, y) and performs bilinear interpolation
/// to compute values at arbitrary (x, y) coordinates within the grid.
/// Ideal for tabulated physical surfaces such as gas solubility over
/// temperature and salinity.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Grid Layout
///
/// The grid is stored as `zs[i][j] = z(xs[i], ys[j])` where:
/// - `xs` defines the x-axis breakpoints (rows)
/// - `ys` defines the y-axis breakpoints (columns)
///
/// # Example
///
/// ```
/// use aerator_core::math::interpolators::BilinearInterpolator;
///
/// let interp = BilinearInterpolator::new(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 1.0],
///     vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]],
/// ).unwrap();
///
/// let z = interp.interpolate(0.5, 0.5).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<T: Float> {
    /// X-axis breakpoints, strictly increasing
    xs: Vec<T>,
    /// Y-axis breakpoints, strictly increasing
    ys: Vec<T>,
    /// Grid values: zs[i][j] = z(xs[i], ys[j])
    zs: Vec<Vec<T>>,
}

/// Validate that an axis has at least two strictly increasing breakpoints.
pub(crate) fn validate_axis<T: Float>(axis: &[T]) -> Result<(), InterpolationError> {
    if axis.len() < 2 {
        return Err(InterpolationError::InsufficientData {
            got: axis.len(),
            need: 2,
        });
    }
    for i in 1..axis.len() {
        if axis[i] <= axis[i - 1] {
            return Err(InterpolationError::NonMonotonicData { index: i });
        }
    }
    Ok(())
}

/// Locate the cell index for `x` on a strictly increasing axis.
///
/// Returns `i` such that `axis[i] <= x <= axis[i + 1]` for in-domain
/// queries. Callers are expected to have bounds-checked `x` already.
#[inline]
pub(crate) fn find_cell<T: Float>(axis: &[T], x: T) -> usize {
    let pos = axis.partition_point(|&a| a <= x);
    if pos == 0 {
        0
    } else if pos >= axis.len() {
        axis.len() - 2
    } else {
        pos - 1
    }
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct a bilinear interpolator from grid data.
    ///
    /// # Arguments
    ///
    /// * `xs` - X-axis breakpoints (strictly increasing, length >= 2)
    /// * `ys` - Y-axis breakpoints (strictly increasing, length >= 2)
    /// * `zs` - Dense value grid with `zs[i][j] = z(xs[i], ys[j])`
    ///
    /// # Returns
    ///
    /// * `Ok(BilinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 breakpoints on an axis
    /// * `Err(InterpolationError::NonMonotonicData)` - Axis not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Grid shape does not match the axes
    pub fn new(xs: Vec<T>, ys: Vec<T>, zs: Vec<Vec<T>>) -> Result<Self, InterpolationError> {
        validate_axis(&xs)?;
        validate_axis(&ys)?;

        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid rows ({}) must match x-axis length ({})",
                zs.len(),
                xs.len()
            )));
        }
        for (i, row) in zs.iter().enumerate() {
            if row.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match y-axis length ({})",
                    i,
                    row.len(),
                    ys.len()
                )));
            }
        }

        Ok(Self { xs, ys, zs })
    }

    /// Interpolate value at point (x, y) using bilinear interpolation.
    ///
    /// # Formula
    ///
    /// ```text
    /// z = (1-u)(1-v)*z00 + u*(1-v)*z10 + (1-u)*v*z01 + u*v*z11
    /// ```
    ///
    /// where `u` and `v` are the normalised coordinates within the grid cell.
    ///
    /// # Returns
    ///
    /// * `Ok(z)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If (x, y) is outside the grid
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain_x();
        let (y_min, y_max) = self.domain_y();

        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        if y < y_min || y > y_max {
            return Err(InterpolationError::OutOfBounds {
                x: y.to_f64().unwrap_or(f64::NAN),
                min: y_min.to_f64().unwrap_or(f64::NAN),
                max: y_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = find_cell(&self.xs, x);
        let j = find_cell(&self.ys, y);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[j];
        let y1 = self.ys[j + 1];

        let z00 = self.zs[i][j];
        let z10 = self.zs[i + 1][j];
        let z01 = self.zs[i][j + 1];
        let z11 = self.zs[i + 1][j + 1];

        // Strict monotonicity guarantees the denominators are non-zero.
        let u = (x - x0) / (x1 - x0);
        let v = (y - y0) / (y1 - y0);

        let one = T::one();
        let z =
            (one - u) * (one - v) * z00 + u * (one - v) * z10 + (one - u) * v * z01 + u * v * z11;

        Ok(z)
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

    /// Returns a reference to the x-axis breakpoints.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-axis breakpoints.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn unit_grid() -> BilinearInterpolator<f64> {
        BilinearInterpolator::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_minimum_grid() {
        let result = BilinearInterpolator::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_insufficient_x_axis() {
        let result = BilinearInterpolator::new(vec![0.0], vec![0.0, 1.0], vec![vec![0.0, 1.0]]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_non_monotonic_axis() {
        let result = BilinearInterpolator::new(
            vec![0.0, 2.0, 1.0],
            vec![0.0, 1.0],
            vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]],
        );
        match result.unwrap_err() {
            InterpolationError::NonMonotonicData { index } => assert_eq!(index, 2),
            other => panic!("Expected NonMonotonicData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_duplicate_breakpoint_rejected() {
        let result = BilinearInterpolator::new(
            vec![0.0, 1.0],
            vec![0.0, 0.0],
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
        );
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 1 }
        ));
    }

    #[test]
    fn test_new_grid_rows_mismatch() {
        let result = BilinearInterpolator::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0],
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
        );
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("rows")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_grid_cols_mismatch() {
        let result = BilinearInterpolator::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0, 2.0],
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
        );
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("row")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // ========================================
    // Domain
    // ========================================

    #[test]
    fn test_domains() {
        let interp = BilinearInterpolator::new(
            vec![1.0, 2.0, 3.0],
            vec![5.0, 10.0],
            vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]],
        )
        .unwrap();
        assert_eq!(interp.domain_x(), (1.0, 3.0));
        assert_eq!(interp.domain_y(), (5.0, 10.0));
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_interpolate_at_corners() {
        let interp = unit_grid();
        assert_relative_eq!(interp.interpolate(0.0, 0.0).unwrap(), 1.0);
        assert_relative_eq!(interp.interpolate(1.0, 0.0).unwrap(), 3.0);
        assert_relative_eq!(interp.interpolate(0.0, 1.0).unwrap(), 2.0);
        assert_relative_eq!(interp.interpolate(1.0, 1.0).unwrap(), 4.0);
    }

    #[test]
    fn test_interpolate_at_center() {
        let interp = unit_grid();
        assert_relative_eq!(interp.interpolate(0.5, 0.5).unwrap(), 2.5);
    }

    #[test]
    fn test_interpolate_along_edge() {
        let interp = unit_grid();
        // Along x=0: linear between z(0,0)=1 and z(0,1)=2
        assert_relative_eq!(interp.interpolate(0.0, 0.5).unwrap(), 1.5);
        // Along y=0: linear between z(0,0)=1 and z(1,0)=3
        assert_relative_eq!(interp.interpolate(0.5, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = unit_grid();
        for (x, y) in [(-0.1, 0.5), (1.1, 0.5), (0.5, -0.1), (0.5, 1.1)] {
            match interp.interpolate(x, y).unwrap_err() {
                InterpolationError::OutOfBounds { .. } => {}
                other => panic!("Expected OutOfBounds at ({x}, {y}), got {:?}", other),
            }
        }
    }

    #[test]
    fn test_interpolate_exact_on_planar_surface() {
        // z = x + y is reproduced exactly by bilinear interpolation
        let interp = BilinearInterpolator::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            vec![
                vec![0.0, 1.0, 2.0],
                vec![1.0, 2.0, 3.0],
                vec![2.0, 3.0, 4.0],
            ],
        )
        .unwrap();

        for (x, y) in [(0.5, 0.5), (1.5, 0.5), (0.5, 1.5), (1.5, 1.5), (2.0, 2.0)] {
            assert_relative_eq!(interp.interpolate(x, y).unwrap(), x + y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_with_f32() {
        let interp = BilinearInterpolator::new(
            vec![0.0_f32, 1.0],
            vec![0.0_f32, 1.0],
            vec![vec![0.0_f32, 1.0], vec![2.0, 3.0]],
        )
        .unwrap();
        let z = interp.interpolate(0.5_f32, 0.5_f32).unwrap();
        assert!(z.is_finite());
    }

    proptest! {
        /// The interpolated value never leaves the range spanned by the
        /// four cell corners.
        #[test]
        fn prop_interpolation_bounded_by_corners(
            x in 0.0f64..=1.0,
            y in 0.0f64..=1.0,
            z00 in -100.0f64..100.0,
            z01 in -100.0f64..100.0,
            z10 in -100.0f64..100.0,
            z11 in -100.0f64..100.0,
        ) {
            let interp = BilinearInterpolator::new(
                vec![0.0, 1.0],
                vec![0.0, 1.0],
                vec![vec![z00, z01], vec![z10, z11]],
            )
            .unwrap();
            let z = interp.interpolate(x, y).unwrap();

            let lo = z00.min(z01).min(z10).min(z11);
            let hi = z00.max(z01).max(z10).max(z11);
            prop_assert!(z >= lo - 1e-9);
            prop_assert!(z <= hi + 1e-9);
        }
    }
}

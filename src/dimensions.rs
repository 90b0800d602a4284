//! Water body dimension calculators.
//!
//! GLM's `&morphometry` block wants a hypsographic profile: lake area as
//! a function of elevation. For constructed water bodies with simple
//! shapes (farm dams, retention basins) that profile can be computed in
//! closed form from a handful of surface measurements. The calculators
//! here evaluate volume and surface area at each metre height increment
//! from the base to the surface, matching the `H`/`A` list convention of
//! [`Morphometry`](crate::nml::Morphometry).
//!
//! # Example
//!
//! ```
//! use glm_prep::dimensions::TruncatedPyramid;
//!
//! let dam = TruncatedPyramid::new(3.0, 5.0, 5.0, 3.0).unwrap();
//! let areas = dam.surface_areas();
//! let heights = dam.heights();
//! assert_eq!(heights, vec![-3.0, -2.0, -1.0, 0.0]);
//! assert!((areas[0] - 9.0).abs() < 1e-12);
//! ```

use thiserror::Error;

/// Error type for dimension calculator construction.
#[derive(Debug, Error)]
pub enum DimensionsError {
    /// A dimension is not a positive, finite number.
    #[error("{name} must be a positive, finite number, got {value}")]
    InvalidDimension {
        /// Which input was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A surface dimension is too small for the given height and side
    /// slope, which would put the base dimension at or below zero.
    #[error("{name} must be greater than {min} m for this height and side slope, got {value} m")]
    SurfaceTooSmall {
        /// Which input was rejected.
        name: &'static str,
        /// Smallest admissible value (`2 * height / side_slope`).
        min: f64,
        /// The rejected value.
        value: f64,
    },
}

fn check_positive(name: &'static str, value: f64) -> Result<(), DimensionsError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DimensionsError::InvalidDimension { name, value });
    }
    Ok(())
}

/// A truncated pyramid water body, described by its height, surface
/// dimensions, and side slope (rise over run).
///
/// Typical for small rectangular farm dams where only the surface extent
/// and depth are known.
#[derive(Clone, Copy, Debug)]
pub struct TruncatedPyramid {
    height: f64,
    side_slope: f64,
    base_length: f64,
    base_width: f64,
}

impl TruncatedPyramid {
    /// Create a calculator from surface measurements.
    ///
    /// # Errors
    ///
    /// - [`DimensionsError::InvalidDimension`] for a non-finite or
    ///   non-positive input
    /// - [`DimensionsError::SurfaceTooSmall`] if a surface dimension
    ///   does not exceed `2 * height / side_slope` (the base would
    ///   vanish before reaching the given height)
    pub fn new(
        height: f64,
        surface_width: f64,
        surface_length: f64,
        side_slope: f64,
    ) -> Result<Self, DimensionsError> {
        check_positive("height", height)?;
        check_positive("surface_width", surface_width)?;
        check_positive("surface_length", surface_length)?;
        check_positive("side_slope", side_slope)?;

        let min = 2.0 * height / side_slope;
        if surface_length <= min {
            return Err(DimensionsError::SurfaceTooSmall {
                name: "surface_length",
                min,
                value: surface_length,
            });
        }
        if surface_width <= min {
            return Err(DimensionsError::SurfaceTooSmall {
                name: "surface_width",
                min,
                value: surface_width,
            });
        }

        Ok(Self {
            height,
            side_slope,
            base_length: surface_length - min,
            base_width: surface_width - min,
        })
    }

    /// Length of the base (m).
    pub fn base_length(&self) -> f64 {
        self.base_length
    }

    /// Width of the base (m).
    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Water volume (m^3) at each metre height increment from the base
    /// to the surface.
    pub fn volumes(&self) -> Vec<f64> {
        let l = self.base_length;
        let w = self.base_width;
        let s = self.side_slope;
        self.increments()
            .map(|i| l * w * i + i.powi(2) * ((l + w) / s) + 4.0 * i.powi(3) / (3.0 * s.powi(2)))
            .collect()
    }

    /// Water surface area (m^2) at each metre height increment from the
    /// base to the surface.
    pub fn surface_areas(&self) -> Vec<f64> {
        let s = self.side_slope;
        self.increments()
            .map(|i| (self.base_width + 2.0 * i / s) * (self.base_length + 2.0 * i / s))
            .collect()
    }

    /// Heights (m) from the base to the surface, surface at zero.
    pub fn heights(&self) -> Vec<f64> {
        let n = self.height as i64;
        (-n..=0).map(|h| h as f64).collect()
    }

    fn increments(&self) -> impl Iterator<Item = f64> {
        (0..=self.height as i64).map(|i| i as f64)
    }
}

/// A truncated cone water body, described by its height, surface radius,
/// and side slope (rise over run).
#[derive(Clone, Copy, Debug)]
pub struct TruncatedCone {
    height: f64,
    surface_radius: f64,
    side_slope: f64,
    base_radius: f64,
}

impl TruncatedCone {
    /// Create a calculator from surface measurements.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TruncatedPyramid::new`]; the surface
    /// diameter must exceed `2 * height / side_slope`.
    pub fn new(height: f64, surface_radius: f64, side_slope: f64) -> Result<Self, DimensionsError> {
        check_positive("height", height)?;
        check_positive("surface_radius", surface_radius)?;
        check_positive("side_slope", side_slope)?;

        let surface_diameter = 2.0 * surface_radius;
        let min = 2.0 * height / side_slope;
        if surface_diameter <= min {
            return Err(DimensionsError::SurfaceTooSmall {
                name: "surface diameter",
                min,
                value: surface_diameter,
            });
        }

        Ok(Self {
            height,
            surface_radius,
            side_slope,
            base_radius: (surface_diameter - min) / 2.0,
        })
    }

    /// Radius of the base (m).
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Water volume (m^3) at each metre height increment from the base
    /// to the surface, using the conical frustum formula.
    pub fn volumes(&self) -> Vec<f64> {
        let rb = self.base_radius;
        let rs = self.surface_radius;
        self.increments()
            .map(|i| std::f64::consts::FRAC_PI_3 * i * (rb * rb + rb * rs + rs * rs))
            .collect()
    }

    /// Water surface area (m^2) at each metre height increment from the
    /// base to the surface.
    pub fn surface_areas(&self) -> Vec<f64> {
        let s = self.side_slope;
        self.increments()
            .map(|i| {
                let r = self.base_radius + i / s;
                std::f64::consts::PI * r * r
            })
            .collect()
    }

    /// Heights (m) from the base to the surface, surface at zero.
    pub fn heights(&self) -> Vec<f64> {
        let n = self.height as i64;
        (-n..=0).map(|h| h as f64).collect()
    }

    fn increments(&self) -> impl Iterator<Item = f64> {
        (0..=self.height as i64).map(|i| i as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOL, "{a} != {e}");
        }
    }

    #[test]
    fn test_pyramid_volumes() {
        let dam = TruncatedPyramid::new(3.0, 5.0, 5.0, 3.0).unwrap();
        assert_close(
            &dam.volumes(),
            &[0.0, 11.148148148148149, 27.185185185185183, 49.0],
        );
    }

    #[test]
    fn test_pyramid_surface_areas() {
        let dam = TruncatedPyramid::new(3.0, 5.0, 5.0, 3.0).unwrap();
        assert_close(
            &dam.surface_areas(),
            &[9.0, 13.444444444444443, 18.777777777777775, 25.0],
        );
    }

    #[test]
    fn test_pyramid_base_dimensions() {
        let dam = TruncatedPyramid::new(3.0, 5.0, 7.0, 3.0).unwrap();
        assert!((dam.base_width() - 3.0).abs() < TOL);
        assert!((dam.base_length() - 5.0).abs() < TOL);
    }

    #[test]
    fn test_pyramid_heights_ascend_to_zero() {
        let dam = TruncatedPyramid::new(3.0, 5.0, 5.0, 3.0).unwrap();
        assert_eq!(dam.heights(), vec![-3.0, -2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_pyramid_rejects_nonpositive() {
        assert!(matches!(
            TruncatedPyramid::new(0.0, 5.0, 5.0, 3.0),
            Err(DimensionsError::InvalidDimension { name: "height", .. })
        ));
        assert!(matches!(
            TruncatedPyramid::new(3.0, -5.0, 5.0, 3.0),
            Err(DimensionsError::InvalidDimension {
                name: "surface_width",
                ..
            })
        ));
        assert!(matches!(
            TruncatedPyramid::new(3.0, 5.0, 5.0, f64::NAN),
            Err(DimensionsError::InvalidDimension {
                name: "side_slope",
                ..
            })
        ));
    }

    #[test]
    fn test_pyramid_rejects_vanishing_base() {
        // 2 * height / side_slope = 2, surface dims must exceed it
        let err = TruncatedPyramid::new(3.0, 2.0, 5.0, 3.0).unwrap_err();
        match err {
            DimensionsError::SurfaceTooSmall { name, min, value } => {
                assert_eq!(name, "surface_width");
                assert!((min - 2.0).abs() < TOL);
                assert!((value - 2.0).abs() < TOL);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cone_volumes() {
        let dam = TruncatedCone::new(3.0, 5.0, 3.0).unwrap();
        // base_radius = 5 - 3/3 = 4
        let factor = std::f64::consts::FRAC_PI_3 * (16.0 + 20.0 + 25.0);
        assert_close(
            &dam.volumes(),
            &[0.0, factor, 2.0 * factor, 3.0 * factor],
        );
    }

    #[test]
    fn test_cone_surface_areas_grow_with_height() {
        let dam = TruncatedCone::new(3.0, 5.0, 3.0).unwrap();
        let areas = dam.surface_areas();
        assert_eq!(areas.len(), 4);
        assert!((areas[0] - std::f64::consts::PI * 16.0).abs() < TOL);
        assert!((areas[3] - std::f64::consts::PI * 25.0).abs() < TOL);
        assert!(areas.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cone_rejects_vanishing_base() {
        // surface diameter 2 m, minimum is 2 * 3 / 3 = 2 m
        assert!(matches!(
            TruncatedCone::new(3.0, 1.0, 3.0),
            Err(DimensionsError::SurfaceTooSmall { .. })
        ));
    }

    #[test]
    fn test_profiles_align_with_heights() {
        let dam = TruncatedPyramid::new(4.0, 10.0, 12.0, 3.0).unwrap();
        let n = dam.heights().len();
        assert_eq!(dam.volumes().len(), n);
        assert_eq!(dam.surface_areas().len(), n);
    }
}

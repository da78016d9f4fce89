//! JSON schema for the tabulated grid data files.
//!
//! Grid documents carry their axis breakpoints alongside a dense nested
//! `values` array. Shape and monotonicity are validated when the grids are
//! turned into models, not here; this module only handles deserialization.

use super::DataError;
use serde::Deserialize;

/// Bundled dissolved oxygen saturation table (Weiss solubility, mg/L at
/// 100% air saturation, 0-40 °C by 1 °C and 0-40 ppt by 5 ppt).
pub const BUNDLED_SATURATION_JSON: &str = include_str!("../../data/o2_saturation_temp_sal.json");

/// Bundled whiteleg shrimp routine respiration table (mg O₂/g/h over
/// salinity, temperature, and body weight).
pub const BUNDLED_RESPIRATION_JSON: &str =
    include_str!("../../data/shrimp_respiration_sal_temp_weight.json");

/// On-disk layout of the oxygen saturation grid.
///
/// `values[i][j]` is the saturation at `temperature_c[i]`, `salinity_ppt[j]`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaturationGrid {
    /// Temperature axis in °C, strictly increasing
    pub temperature_c: Vec<f64>,
    /// Salinity axis in ppt, strictly increasing
    pub salinity_ppt: Vec<f64>,
    /// Saturation values in mg/L
    pub values: Vec<Vec<f64>>,
}

/// On-disk layout of the shrimp respiration grid.
///
/// `values[i][j][k]` is the rate at `salinity_ppt[i]`, `temperature_c[j]`,
/// `weight_g[k]`.
#[derive(Debug, Clone, Deserialize)]
pub struct RespirationGrid {
    /// Salinity axis in ppt, strictly increasing
    pub salinity_ppt: Vec<f64>,
    /// Temperature axis in °C, strictly increasing
    pub temperature_c: Vec<f64>,
    /// Body weight axis in grams, strictly increasing
    pub weight_g: Vec<f64>,
    /// Respiration rates in mg O₂/g/h
    pub values: Vec<Vec<Vec<f64>>>,
}

impl SaturationGrid {
    /// Deserialize a saturation grid from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))
    }
}

impl RespirationGrid {
    /// Deserialize a respiration grid from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_saturation_parses() {
        let grid = SaturationGrid::from_json(BUNDLED_SATURATION_JSON).unwrap();
        assert_eq!(grid.temperature_c.len(), 41);
        assert_eq!(grid.salinity_ppt.len(), 9);
        assert_eq!(grid.values.len(), grid.temperature_c.len());
        assert_eq!(grid.values[0].len(), grid.salinity_ppt.len());
    }

    #[test]
    fn test_bundled_respiration_parses() {
        let grid = RespirationGrid::from_json(BUNDLED_RESPIRATION_JSON).unwrap();
        assert_eq!(grid.salinity_ppt.len(), 4);
        assert_eq!(grid.temperature_c.len(), 3);
        assert_eq!(grid.weight_g.len(), 4);
        assert_eq!(grid.values.len(), 4);
        assert_eq!(grid.values[0].len(), 3);
        assert_eq!(grid.values[0][0].len(), 4);
    }

    #[test]
    fn test_malformed_json_reports_parse_error() {
        let err = SaturationGrid::from_json("{ not json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_missing_field_reports_parse_error() {
        let err = RespirationGrid::from_json(r#"{"salinity_ppt": [1.0, 2.0]}"#).unwrap_err();
        assert!(err.is_parse());
    }
}

//! Lookup table loading at server startup.
//!
//! Grids come from `data_dir` when configured, letting an operator ship
//! revised tables without rebuilding, and fall back to the bundled reference
//! tables otherwise.

use anyhow::Context;
use std::path::Path;

use aerator_models::tables::schema::{RespirationGrid, SaturationGrid};
use aerator_models::tables::{RespirationModel, SaturationModel};

use crate::config::ServerConfig;

/// File name of the oxygen saturation grid inside `data_dir`.
pub const SATURATION_FILE: &str = "o2_saturation_temp_sal.json";
/// File name of the shrimp respiration grid inside `data_dir`.
pub const RESPIRATION_FILE: &str = "shrimp_respiration_sal_temp_weight.json";

/// Load the saturation and respiration models per the server configuration.
pub fn load_models(
    config: &ServerConfig,
) -> anyhow::Result<(SaturationModel, RespirationModel)> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "loading lookup tables from data directory");
            Ok((load_saturation(dir)?, load_respiration(dir)?))
        }
        None => {
            tracing::info!("using bundled lookup tables");
            let saturation = SaturationModel::bundled().context("bundled saturation table")?;
            let respiration = RespirationModel::bundled().context("bundled respiration table")?;
            Ok((saturation, respiration))
        }
    }
}

fn load_saturation(dir: &Path) -> anyhow::Result<SaturationModel> {
    let path = dir.join(SATURATION_FILE);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let grid = SaturationGrid::from_json(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    SaturationModel::new(grid).with_context(|| format!("validating {}", path.display()))
}

fn load_respiration(dir: &Path) -> anyhow::Result<RespirationModel> {
    let path = dir.join(RESPIRATION_FILE);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let grid = RespirationGrid::from_json(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    RespirationModel::new(grid).with_context(|| format!("validating {}", path.display()))
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{Algorithm, CellPos, CellSpace, presets};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid zoom range [{min}, {max}]")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("cell side must be positive and spacing non-negative (side {side}, spacing {spacing})")]
    InvalidCellGeometry { side: f64, spacing: f64 },
}

/// Startup settings for the simulation and the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cell side in pixels at zoom 1.0
    pub base_cell_side: f64,
    /// Gap between cells in pixels at zoom 1.0
    pub base_cell_spacing: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub initial_zoom: f64,
    /// Generations per second while running
    pub updates_per_second: f32,
    /// Initial pattern as (row, col) pairs relative to its top-left corner
    pub seed: Vec<(i64, i64)>,
    /// Where the seed's top-left corner lands, as (row, col)
    pub seed_offset: (i64, i64),
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_cell_side: 20.0,
            base_cell_spacing: 2.0,
            min_zoom: 0.2,
            max_zoom: 3.0,
            initial_zoom: 1.0,
            updates_per_second: 1.0,
            seed: presets::seed().cells,
            seed_offset: (1 << 20, 1 << 20),
            algorithm: Algorithm::default(),
        }
    }
}

impl Config {
    /// Read a JSON config file; missing fields take their defaults.
    pub fn load_from_disk(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        config.sanitize();
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to_disk(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject settings that would make the viewport geometry meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.base_cell_side > 0.0 && self.base_cell_spacing >= 0.0) {
            return Err(ConfigError::InvalidCellGeometry {
                side: self.base_cell_side,
                spacing: self.base_cell_spacing,
            });
        }
        Ok(())
    }

    /// Clamp soft settings into range.
    pub fn sanitize(&mut self) {
        let zoom = self.initial_zoom.clamp(self.min_zoom, self.max_zoom);
        if zoom != self.initial_zoom {
            warn!(requested = self.initial_zoom, used = zoom, "initial zoom out of range");
            self.initial_zoom = zoom;
        }
        let rate = self.updates_per_second.clamp(1.0, 60.0);
        if rate != self.updates_per_second {
            warn!(requested = self.updates_per_second, used = rate, "update rate out of range");
            self.updates_per_second = rate;
        }
    }

    /// The seed pattern translated to its placement offset
    pub fn seed_cells(&self) -> CellSpace {
        let (row, col) = self.seed_offset;
        self.seed
            .iter()
            .copied()
            .map(CellPos::from)
            .collect::<CellSpace>()
            .move_cells(col, row)
    }
}

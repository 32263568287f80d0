//! Hue-wheel configuration, loadable from RON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{ColorError, ConfigError};

/// Rendering and picking parameters for the hue wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Side of the square raster in pixels.
    pub size: u32,
    /// Angular width of each wedge. Slightly over one degree so neighbors
    /// overlap and no seams show.
    pub wedge_step_degrees: f64,
    /// Samples per pixel along each axis.
    pub supersample: u32,
    /// Single-channel tolerance used when locating a color on the wheel.
    pub tolerance: u8,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: constants::WHEEL_RASTER_SIZE,
            wedge_step_degrees: constants::WEDGE_STEP_DEGREES,
            supersample: constants::SUPERSAMPLE,
            tolerance: constants::LOCATE_TOLERANCE,
        }
    }
}

impl WheelConfig {
    /// A default config with a different raster size.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ColorError> {
        if !(1..=constants::MAX_WHEEL_SIZE).contains(&self.size) {
            return Err(ColorError::InvalidSize(self.size));
        }
        let step = self.wedge_step_degrees;
        if !(step.is_finite() && step > 0.0 && step <= constants::MAX_WEDGE_STEP_DEGREES) {
            return Err(ColorError::component(
                "wedge_step_degrees",
                step,
                0.0,
                constants::MAX_WEDGE_STEP_DEGREES,
            ));
        }
        if !(1..=constants::MAX_SUPERSAMPLE).contains(&self.supersample) {
            return Err(ColorError::component(
                "supersample",
                self.supersample as f64,
                1.0,
                constants::MAX_SUPERSAMPLE as f64,
            ));
        }
        Ok(())
    }

    /// Parse and validate a RON document. Missing fields take defaults.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_ron(&text)?;
        log::debug!("loaded wheel config from {}: {config:?}", path.display());
        Ok(config)
    }
}

//! Configuration types for the rasterization passes

use serde::{Deserialize, Serialize};

use crate::error::{MsdfError, MsdfResult};

/// Parameters for [`crate::algorithms::color_edges_simple`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColoringConfig {
    /// External-angle corner criterion, in radians. Values below `PI/2`
    /// behave sensibly; `PI/3` is msdfgen's usual default.
    pub angle_threshold_radians: f64,

    /// Selects the initial colour partition deterministically.
    pub seed: u64,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self { angle_threshold_radians: std::f64::consts::PI / 3.0, seed: 0 }
    }
}

impl ColoringConfig {
    pub fn validate(&self) -> MsdfResult<()> {
        if !self.angle_threshold_radians.is_finite() || self.angle_threshold_radians <= 0.0 {
            return Err(MsdfError::config_error(format!(
                "angle_threshold_radians must be positive and finite, got {}",
                self.angle_threshold_radians
            )));
        }
        Ok(())
    }
}

/// Parameters shared by [`crate::raster::generate_sdf`] and
/// [`crate::raster::generate_msdf`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Signed-distance window, in shape units, mapped linearly to `[0,1]`
    /// per channel. Smaller values sharpen the decoded edge at the cost of
    /// clamping distances farther from the boundary.
    pub range: f64,

    /// `pixel = scale * (shape + translate)`, per axis.
    pub scale: (f64, f64),
    pub translate: (f64, f64),
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { range: 4.0, scale: (1.0, 1.0), translate: (0.0, 0.0) }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> MsdfResult<()> {
        if !(self.range > 0.0) {
            return Err(MsdfError::config_error(format!("range must be positive, got {}", self.range)));
        }
        if self.scale.0 == 0.0 || self.scale.1 == 0.0 {
            return Err(MsdfError::config_error("scale components must be non-zero"));
        }
        Ok(())
    }
}

/// Parameters for [`crate::raster::correct_errors`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ErrorCorrectionConfig {
    /// Per-axis clash threshold: `.0` gates horizontal-neighbour checks,
    /// `.1` gates vertical-neighbour checks.
    pub threshold: (f64, f64),
}

impl Default for ErrorCorrectionConfig {
    fn default() -> Self {
        Self { threshold: (0.2, 0.2) }
    }
}

impl From<ErrorCorrectionConfig> for crate::algorithms::ClashThreshold {
    fn from(cfg: ErrorCorrectionConfig) -> Self {
        crate::algorithms::ClashThreshold { x: cfg.threshold.0, y: cfg.threshold.1 }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Fill ratio the start width is sized for.
pub const DEFAULT_TARGET_FILL: f64 = 0.95;

/// Packing configuration.
///
/// The start width is `max(ceil(sqrt(total_area / target_fill)), max_box_width)`.
/// A `target_fill` below 1.0 makes the container a little wider than a perfect
/// square, which leaves room for mixed box sizes. The default reproduces the
/// reference layouts exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackerConfig {
    #[serde(default = "default_target_fill")]
    pub target_fill: f64,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            target_fill: default_target_fill(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if `target_fill` is not finite or outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let f = self.target_fill;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(PackError::InvalidConfig(format!(
                "target_fill must be in (0, 1], got {}",
                f
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_target_fill() -> f64 {
    DEFAULT_TARGET_FILL
}

/// Builder for `PackerConfig`.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn target_fill(mut self, v: f64) -> Self {
        self.cfg.target_fill = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}

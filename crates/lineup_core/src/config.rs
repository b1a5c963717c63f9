//! # Assignment configuration
//!
//! Tuning constants for scoring, matching and recommendation, gathered in
//! one serde struct so they can be overridden from a YAML or JSON file.
//!
//! ```rust
//! use lineup_core::config::AssignerConfig;
//!
//! let config = AssignerConfig::default();
//! assert_eq!(config.damping_factor, 0.25);
//! ```

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fill value for the padding cells of a non-square score matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddingFill {
    /// Largest real score in the matrix (zero cost after inversion)
    #[default]
    MatrixMax,
    /// Fixed score
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignerConfig {
    /// Scale applied to a player's best score when a slot has no direct,
    /// similar or striker-alias match (default: 0.25)
    pub damping_factor: f64,
    /// Padding strategy for rectangular matrices (default: matrix max)
    pub padding: PaddingFill,
    /// Exponent used to sharpen classifier distributions (default: 1.5)
    pub sharpen_gamma: f64,
    /// Number of ranked positions returned by recommendations (default: 3)
    pub top_n: usize,
    /// Softmax temperature of the built-in profile provider (default: 1.0)
    pub softmax_temperature: f64,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.25,
            padding: PaddingFill::MatrixMax,
            sharpen_gamma: 1.5,
            top_n: 3,
            softmax_temperature: 1.0,
        }
    }
}

impl AssignerConfig {
    /// No credit at all for slots without a position match.
    pub fn strict() -> Self {
        Self { damping_factor: 0.0, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.damping_factor.is_finite() || !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(LineupError::Config(format!(
                "damping_factor must be within 0..=1, got {}",
                self.damping_factor
            )));
        }
        // Fills above the score range overflow the fixed-point costs
        if let PaddingFill::Value(v) = self.padding {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(LineupError::Config(format!(
                    "padding value must be within 0..=1, got {v}"
                )));
            }
        }
        if !self.sharpen_gamma.is_finite() || self.sharpen_gamma <= 0.0 {
            return Err(LineupError::Config(format!(
                "sharpen_gamma must be > 0, got {}",
                self.sharpen_gamma
            )));
        }
        if !self.softmax_temperature.is_finite() || self.softmax_temperature <= 0.0 {
            return Err(LineupError::Config(format!(
                "softmax_temperature must be > 0, got {}",
                self.softmax_temperature
            )));
        }
        if self.top_n == 0 {
            return Err(LineupError::Config("top_n must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| LineupError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LineupError::Config(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }
}

// config.rs - Tunable constants for the flythrough
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-frame blend rate of the camera rig (multiplied by dt)
pub const RIG_RATE: f32 = 24.0;
/// Parameter-space lookahead for the camera's facing point
pub const CAMERA_LOOKAHEAD: f32 = 0.008;
/// Parameter-space lookahead for the airplane's tangent sample
pub const AIRPLANE_LOOKAHEAD: f32 = 0.02;
/// Visual gain applied to the geometric bank angle
pub const BANK_GAIN: f32 = 2.4;
/// Largest bank, either side, in degrees
pub const MAX_BANK_DEG: f32 = 35.0;
/// Quarter-turn offset between path heading and model roll
pub const BANK_OFFSET: f32 = -std::f32::consts::FRAC_PI_2;
/// Per-frame blend rate of the airplane roll (multiplied by dt)
pub const AIRPLANE_RATE: f32 = 2.0;
/// Catmull-Rom tension of the flight path
pub const PATH_TENSION: f32 = 0.5;

/// Scroll container height in viewport heights
pub const SCROLL_PAGES: f32 = 30.0;
/// Smoothing time of the scroll offset, seconds
pub const SCROLL_DAMPING: f32 = 1.0;

/// Empirically tuned rig constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub rig_rate: f32,
    pub camera_lookahead: f32,
    pub airplane_lookahead: f32,
    pub bank_gain: f32,
    pub max_bank_deg: f32,
    pub bank_offset: f32,
    pub airplane_rate: f32,
    pub tension: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            rig_rate: RIG_RATE,
            camera_lookahead: CAMERA_LOOKAHEAD,
            airplane_lookahead: AIRPLANE_LOOKAHEAD,
            bank_gain: BANK_GAIN,
            max_bank_deg: MAX_BANK_DEG,
            bank_offset: BANK_OFFSET,
            airplane_rate: AIRPLANE_RATE,
            tension: PATH_TENSION,
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("rig_rate", self.rig_rate),
            ("camera_lookahead", self.camera_lookahead),
            ("airplane_lookahead", self.airplane_lookahead),
            ("bank_gain", self.bank_gain),
            ("max_bank_deg", self.max_bank_deg),
            ("bank_offset", self.bank_offset),
            ("airplane_rate", self.airplane_rate),
            ("tension", self.tension),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            bail!("rig.{name} must be finite, got {value}");
        }
        if self.rig_rate < 0.0 || self.airplane_rate < 0.0 {
            bail!("smoothing rates must be non-negative");
        }
        if self.tension < 0.0 {
            bail!("rig.tension must be non-negative, got {}", self.tension);
        }
        if !(0.0..=180.0).contains(&self.max_bank_deg) {
            bail!("rig.max_bank_deg must lie in [0, 180], got {}", self.max_bank_deg);
        }
        Ok(())
    }
}

/// Scroll container settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub pages: f32,
    pub damping: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            pages: SCROLL_PAGES,
            damping: SCROLL_DAMPING,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.pages.is_finite() || self.pages < 1.0 {
            bail!("scroll.pages must be at least 1, got {}", self.pages);
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            bail!("scroll.damping must be non-negative, got {}", self.damping);
        }
        Ok(())
    }
}

/// Everything a run can override. Missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlythroughConfig {
    pub rig: RigConfig,
    pub scroll: ScrollConfig,
    /// Replaces the built-in flight path when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<[f32; 3]>>,
}

impl FlythroughConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.rig.validate()?;
        self.scroll.validate()?;
        if let Some(path) = &self.path {
            if path.len() < 2 {
                bail!("path needs at least 2 points, got {}", path.len());
            }
        }
        Ok(())
    }
}

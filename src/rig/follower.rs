use anyhow::Result;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::airplane::{update_airplane, AirplaneState};
use super::camera_rig::{update_camera_rig, CameraRigState};
use super::path::{curve_from_points, FLIGHT_PATH};
use super::progress::{progress, ScrollSource};
use crate::config::{FlythroughConfig, RigConfig};
use crate::math::CatmullRomCurve;

/// Transforms written for one frame, ready for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTransforms {
    pub progress: f32,
    pub rig_position: Vec3,
    pub rig_rotation: Quat,
    pub airplane_rotation: Quat,
    /// Clamped bank the airplane is easing toward, degrees
    pub target_bank_deg: f32,
}

/// Owns the path and the two animated nodes; stepped once per frame
#[derive(Debug, Clone)]
pub struct PathFollower {
    curve: CatmullRomCurve,
    config: RigConfig,
    rig: CameraRigState,
    airplane: AirplaneState,
}

impl PathFollower {
    pub fn new(curve: CatmullRomCurve, config: RigConfig) -> Self {
        Self {
            curve,
            config,
            rig: CameraRigState::default(),
            airplane: AirplaneState::default(),
        }
    }

    /// Build from a run config, using the built-in path unless overridden
    pub fn from_config(config: &FlythroughConfig) -> Result<Self> {
        config.validate()?;
        let points = config.path.as_deref().unwrap_or(&FLIGHT_PATH[..]);
        let curve = curve_from_points(points, config.rig.tension)?;
        Ok(Self::new(curve, config.rig))
    }

    /// Start the rig somewhere other than the origin
    pub fn with_rig(mut self, rig: CameraRigState) -> Self {
        self.rig = rig;
        self
    }

    pub fn curve(&self) -> &CatmullRomCurve {
        &self.curve
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn rig(&self) -> &CameraRigState {
        &self.rig
    }

    pub fn airplane(&self) -> &AirplaneState {
        &self.airplane
    }

    /// One frame: read scroll, move the rig, bank the airplane.
    ///
    /// Negative `dt` is treated as zero.
    pub fn update(&mut self, source: &dyn ScrollSource, dt: f32) -> FrameTransforms {
        let dt = dt.max(0.0);
        let p = progress(source);

        let sample = update_camera_rig(&self.curve, p, dt, &self.config, &mut self.rig);
        let bank = update_airplane(&self.curve, p, dt, &sample, &self.config, &mut self.airplane);

        FrameTransforms {
            progress: p,
            rig_position: self.rig.position,
            rig_rotation: self.rig.rotation,
            airplane_rotation: self.airplane.rotation,
            target_bank_deg: bank.to_degrees(),
        }
    }
}

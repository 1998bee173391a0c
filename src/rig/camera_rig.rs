use glam::{Quat, Vec3};

use crate::config::RigConfig;
use crate::math::orient::{look_rotation, world_direction};
use crate::math::CatmullRomCurve;

/// Transform of the node that carries the camera and the airplane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRigState {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraRigState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// The rig's local +Z in world space
    pub fn forward(&self) -> Vec3 {
        world_direction(self.rotation)
    }
}

impl Default for CameraRigState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Unsmoothed targets computed by the rig update, reused by the airplane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigSample {
    /// Curve point for this frame's progress
    pub cur_point: Vec3,
    /// Unit vector from the look-ahead point back to `cur_point`
    pub target_look_dir: Vec3,
}

/// Curve parameter of the camera's look-ahead point, capped at the end
pub fn look_ahead_parameter(progress: f32, lookahead: f32) -> f32 {
    (progress + lookahead).min(1.0)
}

/// Ease the rig toward the curve point for `progress` and turn it to face
/// along the path.
///
/// Position and facing both blend by `rig_rate * dt`; with `dt == 0` the
/// state is left where it was.
pub fn update_camera_rig(
    curve: &CatmullRomCurve,
    progress: f32,
    dt: f32,
    config: &RigConfig,
    state: &mut CameraRigState,
) -> RigSample {
    let blend = config.rig_rate * dt;

    let cur_point = curve.point_at(progress);
    state.position = state.position.lerp(cur_point, blend);

    let look_at_point = curve.point_at(look_ahead_parameter(progress, config.camera_lookahead));
    let target_look_dir = (cur_point - look_at_point).normalize_or_zero();

    if blend != 0.0 {
        let look_dir = state.forward().lerp(target_look_dir, blend);
        state.rotation = look_rotation(look_dir);
    }

    log::trace!("rig at {} facing {}", state.position, state.forward());

    RigSample {
        cur_point,
        target_look_dir,
    }
}

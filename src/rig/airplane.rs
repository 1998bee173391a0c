use glam::{Quat, Vec3};

use super::camera_rig::RigSample;
use crate::config::RigConfig;
use crate::math::orient::{from_euler_xyz, look_rotation, to_euler_xyz, yaw_xyz};
use crate::math::CatmullRomCurve;

/// Orientation of the flying model, relative to the camera rig
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirplaneState {
    pub rotation: Quat,
}

impl AirplaneState {
    /// Current roll (Z of the XYZ Euler decomposition), radians
    pub fn bank(&self) -> f32 {
        to_euler_xyz(self.rotation).z
    }
}

impl Default for AirplaneState {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }
}

/// Limit `degrees` to `±max_deg`, keeping its sign
pub fn clamp_bank(degrees: f32, max_deg: f32) -> f32 {
    if degrees < 0.0 {
        degrees.max(-max_deg)
    } else if degrees > 0.0 {
        degrees.min(max_deg)
    } else {
        degrees
    }
}

/// Bank from the path tangent before clamping, in degrees.
///
/// `yaw` is the heading of the unsmoothed reference frame; removing it
/// leaves only the path's local horizontal turn.
pub fn raw_bank_degrees(tangent: Vec3, yaw: f32, config: &RigConfig) -> f32 {
    let local = Quat::from_axis_angle(Vec3::Y, -yaw) * tangent;
    let angle = (-local.z).atan2(local.x) + config.bank_offset;
    angle.to_degrees() * config.bank_gain
}

/// Clamped bank for a tangent, in degrees
pub fn bank_angle_degrees(tangent: Vec3, yaw: f32, config: &RigConfig) -> f32 {
    clamp_bank(raw_bank_degrees(tangent, yaw, config), config.max_bank_deg)
}

/// Ease the airplane's roll toward the bank implied by the path just ahead.
///
/// Returns the clamped target bank in radians.
pub fn update_airplane(
    curve: &CatmullRomCurve,
    progress: f32,
    dt: f32,
    sample: &RigSample,
    config: &RigConfig,
    state: &mut AirplaneState,
) -> f32 {
    // not capped at 1: the curve extrapolates past its end
    let tangent = curve.tangent_at(progress + config.airplane_lookahead);

    let reference = look_rotation(sample.target_look_dir);
    let bank = bank_angle_degrees(tangent, yaw_xyz(reference), config).to_radians();

    let current = to_euler_xyz(state.rotation);
    let target = from_euler_xyz(Vec3::new(current.x, current.y, bank));

    let blend = config.airplane_rate * dt;
    if blend != 0.0 {
        state.rotation = state.rotation.slerp(target, blend).normalize();
    }

    bank
}

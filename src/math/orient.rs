use glam::{Mat3, Quat, Vec3};

/// World up used by every look-at in the scene
pub const WORLD_UP: Vec3 = Vec3::Y;

const PARALLEL_NUDGE: f32 = 1e-4;

/// Rotation that points a node's local +Z along `direction`.
///
/// This is the look-at of a plain scene node (cameras look down -Z instead).
/// A zero direction falls back to +Z; a direction parallel to `WORLD_UP` is
/// nudged so the basis stays well defined.
pub fn look_rotation(direction: Vec3) -> Quat {
    let mut z = if direction.length_squared() == 0.0 {
        Vec3::Z
    } else {
        direction.normalize()
    };

    let mut x = WORLD_UP.cross(z);
    if x.length_squared() == 0.0 {
        if WORLD_UP.z.abs() == 1.0 {
            z.x += PARALLEL_NUDGE;
        } else {
            z.z += PARALLEL_NUDGE;
        }
        z = z.normalize();
        x = WORLD_UP.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);

    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

/// Direction of a node's local +Z in world space
pub fn world_direction(rotation: Quat) -> Vec3 {
    (rotation * Vec3::Z).normalize_or_zero()
}

/// Decompose into intrinsic XYZ Euler angles (radians)
pub fn to_euler_xyz(rotation: Quat) -> Vec3 {
    let m = Mat3::from_quat(rotation);
    let m11 = m.x_axis.x;
    let m12 = m.y_axis.x;
    let m13 = m.z_axis.x;
    let m22 = m.y_axis.y;
    let m23 = m.z_axis.y;
    let m32 = m.y_axis.z;
    let m33 = m.z_axis.z;

    let y = m13.clamp(-1.0, 1.0).asin();
    if m13.abs() < 0.999_999_9 {
        Vec3::new((-m23).atan2(m33), y, (-m12).atan2(m11))
    } else {
        // gimbal lock: fold roll into pitch
        Vec3::new(m32.atan2(m22), y, 0.0)
    }
}

/// Compose intrinsic XYZ Euler angles (radians)
pub fn from_euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x) * Quat::from_rotation_y(angles.y) * Quat::from_rotation_z(angles.z)
}

/// Y component of the XYZ Euler decomposition
pub fn yaw_xyz(rotation: Quat) -> f32 {
    Mat3::from_quat(rotation).z_axis.x.clamp(-1.0, 1.0).asin()
}

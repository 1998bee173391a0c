use glam::Vec3;

use super::AABB;

/// Half-line used for pointer picking
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Distance to the first hit on `bounds`, if any
    pub fn hit_aabb(&self, bounds: &AABB) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Near-zero components become huge slopes instead of infinities
        let inv = |d: f32| {
            if d.abs() < EPSILON {
                1.0 / EPSILON.copysign(d)
            } else {
                1.0 / d
            }
        };
        let inv_dir = Vec3::new(inv(self.direction.x), inv(self.direction.y), inv(self.direction.z));

        let t_min = (bounds.min - self.origin) * inv_dir;
        let t_max = (bounds.max - self.origin) * inv_dir;

        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.max_element();
        let t_far = t2.min_element();

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far > 0.001 {
            // origin inside the box
            Some(t_far)
        } else {
            None
        }
    }
}

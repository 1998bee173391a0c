use anyhow::{bail, Result};
use glam::Vec3;

/// Step used for the central-difference tangent
pub const TANGENT_DELTA: f32 = 1e-4;

/// Default resolution of the arc-length lookup table
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// Hermite segment of the spline
#[derive(Debug, Clone, Copy)]
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    /// Hermite form between `x0` and `x1` with end tangents `t0`, `t1`
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, tension: f32) -> Self {
        Self::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1))
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}

/// Open uniform Catmull-Rom curve through a fixed list of control points.
///
/// Built once; every query is pure. Parameter `t` runs from 0 (first point)
/// to 1 (last point). Values below 0 saturate. Values above 1 keep walking
/// the segment index, wrapping modulo the point count, with reflected
/// phantom neighbours at the ends.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    tension: f32,
}

impl CatmullRomCurve {
    /// Build a curve. Needs at least two finite control points and a
    /// non-negative tension.
    pub fn catmull_rom(points: Vec<Vec3>, tension: f32) -> Result<Self> {
        if points.len() < 2 {
            bail!(
                "a curve needs at least 2 control points, got {}",
                points.len()
            );
        }
        if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            bail!("control point {index} is not finite: {point}");
        }
        if !tension.is_finite() || tension < 0.0 {
            bail!("curve tension must be finite and non-negative, got {tension}");
        }

        log::debug!(
            "Built curve through {} control points, tension {}",
            points.len(),
            tension
        );

        Ok(Self { points, tension })
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    /// Position on the curve at parameter `t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        let points = &self.points;
        let len = points.len();

        let mut p = (len - 1) as f32 * t.max(0.0);
        if !p.is_finite() {
            p = f32::MAX;
        }
        let segment = p.floor();
        let mut weight = p - segment;

        // past the end only `index mod len` matters, plus knowing it is >= len
        let mut index = if segment >= len as f32 {
            (segment % len as f32) as usize + len
        } else {
            segment as usize
        };

        if weight == 0.0 && index == len - 1 {
            index = len - 2;
            weight = 1.0;
        }

        let p0 = if index > 0 {
            points[(index - 1) % len]
        } else {
            2.0 * points[0] - points[1]
        };
        let p1 = points[index % len];
        let p2 = points[(index + 1) % len];
        let p3 = if index + 2 < len {
            points[index + 2]
        } else {
            2.0 * points[len - 1] - points[len - 2]
        };

        CubicPoly::catmull_rom(p0, p1, p2, p3, self.tension).eval(weight)
    }

    /// Unit tangent at `t` by central difference.
    ///
    /// Each sample parameter is capped to [0, 1] on its own, so past the end
    /// of the curve the two samples can swap order.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);

        (self.point_at(t2) - self.point_at(t1)).normalize_or_zero()
    }

    /// `divisions + 1` evenly spaced points in parameter space
    pub fn sample(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }

    /// Polyline estimate of the total length
    pub fn length(&self, divisions: usize) -> f32 {
        ArcLengthTable::new(self, divisions).total()
    }
}

/// Cumulative chord lengths for mapping arc-length fraction to `t`
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    lengths: Vec<f32>,
}

impl ArcLengthTable {
    pub fn new(curve: &CatmullRomCurve, divisions: usize) -> Self {
        let samples = curve.sample(divisions);
        let mut lengths = Vec::with_capacity(samples.len());
        let mut sum = 0.0;
        lengths.push(0.0);
        for pair in samples.windows(2) {
            sum += pair[0].distance(pair[1]);
            lengths.push(sum);
        }
        Self { lengths }
    }

    pub fn total(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Curve parameter whose arc length is the fraction `u` of the total
    pub fn u_to_t(&self, u: f32) -> f32 {
        let divisions = self.lengths.len() - 1;
        let total = self.total();
        if total <= 0.0 {
            return u.clamp(0.0, 1.0);
        }

        let target = u.clamp(0.0, 1.0) * total;
        // first entry strictly above target, minus one
        let upper = self.lengths.partition_point(|&l| l <= target);
        let i = upper.saturating_sub(1).min(divisions - 1);

        let before = self.lengths[i];
        let segment = self.lengths[i + 1] - before;
        let fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };

        (i as f32 + fraction) / divisions as f32
    }
}

/// Moving frame along a curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// Parallel-transported frames at `segments + 1` arc-length stations.
///
/// The first normal is seeded from the axis along which the first tangent is
/// smallest; each later normal is the previous one rotated by the turn
/// between consecutive tangents.
pub fn frenet_frames(curve: &CatmullRomCurve, segments: usize) -> Vec<CurveFrame> {
    let segments = segments.max(1);
    let table = ArcLengthTable::new(curve, ARC_LENGTH_DIVISIONS);

    let tangents: Vec<Vec3> = (0..=segments)
        .map(|i| curve.tangent_at(table.u_to_t(i as f32 / segments as f32)))
        .collect();

    let first = tangents[0];
    let seed = {
        let a = first.abs();
        let mut min = f32::MAX;
        let mut seed = Vec3::X;
        if a.x <= min {
            min = a.x;
            seed = Vec3::X;
        }
        if a.y <= min {
            min = a.y;
            seed = Vec3::Y;
        }
        if a.z <= min {
            seed = Vec3::Z;
        }
        seed
    };

    let side = first.cross(seed).normalize_or_zero();
    let mut normal = first.cross(side);
    let mut frames = Vec::with_capacity(segments + 1);
    frames.push(CurveFrame {
        tangent: first,
        normal,
        binormal: first.cross(normal),
    });

    for pair in tangents.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let axis = prev.cross(cur);
        if axis.length() > f32::EPSILON {
            let theta = prev.dot(cur).clamp(-1.0, 1.0).acos();
            normal = glam::Quat::from_axis_angle(axis.normalize(), theta) * normal;
        }
        frames.push(CurveFrame {
            tangent: cur,
            normal,
            binormal: cur.cross(normal),
        });
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight() -> CatmullRomCurve {
        CatmullRomCurve::catmull_rom(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -10.0),
                Vec3::new(0.0, 0.0, -20.0),
            ],
            0.5,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_single_point() {
        assert!(CatmullRomCurve::catmull_rom(vec![Vec3::ZERO], 0.5).is_err());
    }

    #[test]
    fn test_rejects_nan_point() {
        let points = vec![Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)];
        assert!(CatmullRomCurve::catmull_rom(points, 0.5).is_err());
    }

    #[test]
    fn test_rejects_negative_tension() {
        let points = vec![Vec3::ZERO, Vec3::X];
        assert!(CatmullRomCurve::catmull_rom(points, -1.0).is_err());
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let curve = straight();
        for i in 0..=20 {
            let p = curve.point_at(i as f32 / 20.0);
            assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        }
        assert!((curve.point_at(0.5).z + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_negative_parameter_saturates() {
        let curve = straight();
        assert_eq!(curve.point_at(-3.0), curve.point_at(0.0));
    }

    #[test]
    fn test_tangent_of_straight_curve() {
        let tangent = straight().tangent_at(0.5);
        assert!((tangent - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_tangent_past_end_on_straight_curve_keeps_direction() {
        // the samples swap order past t = 1, and the wrapped segment here
        // bends back toward the first point, so the two flips cancel
        let tangent = straight().tangent_at(1.01);
        assert!((tangent - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_huge_parameter_stays_finite() {
        let curve = straight();
        assert!(curve.point_at(1e30).is_finite());
        assert!(curve.point_at(f32::INFINITY).is_finite());
        assert!(curve.point_at(f32::MAX).is_finite());
    }

    #[test]
    fn test_wrapped_index_matches_small_parameter() {
        // t = 3 sits on segment 6 of 3 points, which wraps to point 0
        let curve = straight();
        assert!((curve.point_at(3.0) - Vec3::ZERO).length() < 1e-4);
    }

    #[test]
    fn test_arc_length_of_straight_curve() {
        let curve = straight();
        assert!((curve.length(ARC_LENGTH_DIVISIONS) - 20.0).abs() < 1e-2);
    }

    #[test]
    fn test_u_to_t_endpoints() {
        let table = ArcLengthTable::new(&straight(), 50);
        assert!(table.u_to_t(0.0).abs() < 1e-6);
        assert!((table.u_to_t(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_tension_hits_control_points() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, -4.0),
            Vec3::new(-2.0, 0.0, -9.0),
            Vec3::new(0.0, 0.0, -12.0),
        ];
        let curve = CatmullRomCurve::catmull_rom(points.clone(), 0.0).unwrap();
        assert!((curve.point_at(1.0 / 3.0) - points[1]).length() < 1e-4);
        assert!((curve.point_at(1.0) - points[3]).length() < 1e-5);
        assert_eq!(curve.tension(), 0.0);
    }

    #[test]
    fn test_frames_are_orthonormal() {
        let curve = straight();
        for frame in frenet_frames(&curve, 16) {
            assert!((frame.tangent.length() - 1.0).abs() < 1e-3);
            assert!((frame.normal.length() - 1.0).abs() < 1e-3);
            assert!(frame.tangent.dot(frame.normal).abs() < 1e-3);
            assert!(frame.binormal.dot(frame.normal).abs() < 1e-3);
        }
    }
}

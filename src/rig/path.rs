use anyhow::Result;
use glam::Vec3;

use crate::math::CatmullRomCurve;

/// Control points of the flight over the city, in scene units.
///
/// The path starts and ends at the origin but is evaluated as an open curve.
pub const FLIGHT_PATH: [[f32; 3]; 20] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, -10.0],
    [0.0, 0.0, -15.0],
    [0.5, 0.0, -20.0],
    [-1.0, 0.0, -33.0],
    [-4.25, 0.0, -37.0],
    [-3.8, 0.0, -45.0],
    [-5.0, 0.0, -50.0],
    [0.0, 0.0, -55.0],
    [12.0, 0.0, -59.0],
    [11.0, 0.0, -70.0],
    [11.0, 0.0, -75.0],
    [16.0, 0.0, -80.0],
    [16.0, 0.0, -90.0],
    [20.0, 0.0, -95.0],
    [36.0, 0.0, -102.0],
    [36.0, 0.0, -110.0],
    [50.0, 0.0, -90.0],
    [50.0, 0.0, -40.0],
    [0.0, 0.0, 0.0],
];

/// Build the curve from raw `[x, y, z]` triples
pub fn curve_from_points(points: &[[f32; 3]], tension: f32) -> Result<CatmullRomCurve> {
    CatmullRomCurve::catmull_rom(points.iter().copied().map(Vec3::from_array).collect(), tension)
}

/// The built-in flight path curve
pub fn flight_path(tension: f32) -> Result<CatmullRomCurve> {
    curve_from_points(&FLIGHT_PATH, tension)
}

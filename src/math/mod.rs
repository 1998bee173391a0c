mod aabb;
pub mod curve;
pub mod orient;
mod ray;
pub mod smoothing;

pub use aabb::AABB;
pub use curve::{
    frenet_frames, ArcLengthTable, CatmullRomCurve, CurveFrame, ARC_LENGTH_DIVISIONS,
};
pub use ray::Ray;

use anyhow::{bail, Result};
use glam::Vec3;

use crate::math::{frenet_frames, ArcLengthTable, CatmullRomCurve, ARC_LENGTH_DIVISIONS};

/// Ribbon vertex buffer layout
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RibbonVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat strip laid along the flight path
#[derive(Debug, Clone, Default)]
pub struct RibbonMesh {
    pub vertices: Vec<RibbonVertex>,
    pub indices: Vec<u32>,
}

impl RibbonMesh {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Extrude the profile segment `(0, -half_width)..(0, half_width)` along
/// `curve` at `steps` equal arc-length intervals, then lift it by `y_offset`.
///
/// The profile runs along each station's binormal, so on a level path the
/// strip lies flat.
pub fn build_ribbon(
    curve: &CatmullRomCurve,
    steps: usize,
    half_width: f32,
    y_offset: f32,
) -> Result<RibbonMesh> {
    if steps == 0 {
        bail!("ribbon needs at least one step");
    }

    let table = ArcLengthTable::new(curve, ARC_LENGTH_DIVISIONS);
    let frames = frenet_frames(curve, steps);
    let lift = Vec3::new(0.0, y_offset, 0.0);

    let mut vertices = Vec::with_capacity((steps + 1) * 2);
    for (i, frame) in frames.iter().enumerate() {
        let u = i as f32 / steps as f32;
        let center = curve.point_at(table.u_to_t(u)) + lift;
        let normal = frame.normal.to_array();

        for (side, v) in [(-1.0, 0.0), (1.0, 1.0)] {
            let position = center + frame.binormal * (side * half_width);
            vertices.push(RibbonVertex {
                position: position.to_array(),
                normal,
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity(steps * 6);
    for i in 0..steps as u32 {
        let a = i * 2;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        indices.extend_from_slice(&[a, c, b, b, c, d]);
    }

    log::debug!("Ribbon built: {} vertices, {} triangles", vertices.len(), indices.len() / 3);

    Ok(RibbonMesh { vertices, indices })
}

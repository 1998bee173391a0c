use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use super::billboard::Billboard;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub position: Vec3,
    pub fov_deg: f32,
}

/// Idle bobbing applied to the airplane model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatSpec {
    pub float_intensity: f32,
    pub speed: f32,
    pub rotation_intensity: f32,
}

/// The model flying ahead of the camera, placed inside the rig
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirplaneSpec {
    pub offset: Vec3,
    pub yaw: f32,
    pub scale: f32,
    pub float: FloatSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub intensity: f32,
}

/// One instance of the city block model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityBlock {
    pub position: Vec3,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibbonSpec {
    pub steps: usize,
    pub half_width: f32,
    pub y_offset: f32,
}

/// Static description of everything around the animated rig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    pub background: String,
    pub root_camera: CameraSpec,
    /// Camera parented to the rig
    pub rig_camera: CameraSpec,
    pub airplane: AirplaneSpec,
    pub lights: Vec<DirectionalLight>,
    pub billboards: Vec<Billboard>,
    pub city_blocks: Vec<CityBlock>,
    pub ribbon: RibbonSpec,
    /// Film grain post-process strength
    pub noise_opacity: f32,
}

const CITY_SCALE: f32 = 0.1;
const GROUND_Y: f32 = -2.0;

impl SceneManifest {
    /// The portfolio flythrough over the night city
    pub fn flythrough() -> Self {
        let billboards = vec![
            Billboard::new(
                "Welcome to Hassle Free",
                Vec3::new(0.0, 1.0, -7.0),
                0.0,
                "https://example.com",
            ),
            Billboard::new(
                "License Plate Entry System",
                Vec3::new(-1.5, 1.5, -33.0),
                0.0,
                "https://drive.google.com/file/d/1iMi-RPgceaLzPxHgM-qt_R9khSIKl4VA/view",
            ),
            Billboard::new(
                "Potholes Detection System",
                Vec3::new(4.0, 1.0, -57.5),
                -1.2,
                "https://drive.google.com/file/d/1iImhvxzeTrGW_xTsxDXYx-g__YWVrFhr/view",
            ),
            Billboard::new(
                "Attendance system",
                Vec3::new(17.0, 1.0, -79.5),
                -1.1,
                "https://drive.google.com/file/d/1iMs2cNnLduuSLbygCIGYMuXvSrEzyAmG/view",
            ),
        ];

        let city_blocks = [
            (0.01, -12.0),
            (0.0, -31.0),
            (0.0, -51.0),
            (11.0, -70.0),
            (21.0, -92.0),
            (21.0, -108.0),
        ]
        .into_iter()
        .map(|(x, z)| CityBlock {
            position: Vec3::new(x, GROUND_Y, z),
            scale: CITY_SCALE,
        })
        .collect();

        Self {
            background: "#ececec".to_string(),
            root_camera: CameraSpec {
                position: Vec3::new(0.0, 0.0, 5.0),
                fov_deg: 30.0,
            },
            rig_camera: CameraSpec {
                position: Vec3::new(0.0, 0.0, 2.0),
                fov_deg: 40.0,
            },
            airplane: AirplaneSpec {
                offset: Vec3::new(0.0, 0.0, -1.0),
                yaw: FRAC_PI_2,
                scale: 0.2,
                float: FloatSpec {
                    float_intensity: 1.0,
                    speed: 1.5,
                    rotation_intensity: 0.5,
                },
            },
            lights: vec![DirectionalLight {
                position: Vec3::new(0.0, 3.0, 1.0),
                intensity: 0.1,
            }],
            billboards,
            city_blocks,
            ribbon: RibbonSpec {
                steps: 10_000,
                half_width: 0.08,
                y_offset: GROUND_Y,
            },
            noise_opacity: 0.4,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scene manifest")
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        log::info!("Scene manifest written to {}", path.display());
        Ok(())
    }
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self::flythrough()
    }
}

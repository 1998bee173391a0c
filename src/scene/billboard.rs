use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{Ray, AABB};

/// Average glyph advance as a fraction of the font size
const GLYPH_ADVANCE_EM: f32 = 0.55;
const LINE_HEIGHT_EM: f32 = 1.2;
/// Half thickness of the clickable slab
const HIT_DEPTH: f32 = 0.01;

/// Look of a billboard's text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: String,
    pub font: String,
    pub font_size: f32,
    pub max_width: f32,
    pub bold: bool,
    pub outline_color: String,
    pub outline_width: f32,
    pub background: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "white".to_string(),
            font: "./fonts/Inter-Regular.ttf".to_string(),
            font_size: 0.52,
            max_width: 3.0,
            bold: true,
            outline_color: "black".to_string(),
            outline_width: 0.02,
            background: "rgba(0, 0, 0, 0.5)".to_string(),
        }
    }
}

/// Floating text that opens a link when clicked.
///
/// Text is anchored at its left edge and vertical middle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Billboard {
    pub text: String,
    pub position: Vec3,
    pub rotation_y: f32,
    pub url: String,
    #[serde(default)]
    pub style: TextStyle,
}

impl Billboard {
    pub fn new(text: &str, position: Vec3, rotation_y: f32, url: &str) -> Self {
        Self {
            text: text.to_string(),
            position,
            rotation_y,
            url: url.to_string(),
            style: TextStyle::default(),
        }
    }

    /// Link to open on click
    pub fn link(&self) -> &str {
        &self.url
    }

    /// Approximate laid-out size of the text block (width, height)
    pub fn text_extent(&self) -> (f32, f32) {
        let size = self.style.font_size;
        let single_line = self.text.chars().count() as f32 * size * GLYPH_ADVANCE_EM;
        let max_width = self.style.max_width.max(size);
        let lines = (single_line / max_width).ceil().max(1.0);
        (single_line.min(max_width), lines * size * LINE_HEIGHT_EM)
    }

    /// Clickable box in the billboard's own frame
    pub fn local_bounds(&self) -> AABB {
        let (width, height) = self.text_extent();
        AABB::new(
            Vec3::new(0.0, -height * 0.5, -HIT_DEPTH),
            Vec3::new(width, height * 0.5, HIT_DEPTH),
        )
    }

    /// Distance along `ray` to this billboard, if the ray hits it
    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        let to_local = Quat::from_rotation_y(-self.rotation_y);
        let local = Ray::new(to_local * (ray.origin - self.position), to_local * ray.direction);
        local.hit_aabb(&self.local_bounds())
    }
}

/// Nearest billboard under the pointer ray
pub fn pick<'a>(billboards: &'a [Billboard], ray: &Ray) -> Option<&'a Billboard> {
    billboards
        .iter()
        .filter_map(|b| b.hit(ray).map(|t| (t, b)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, b)| b)
}

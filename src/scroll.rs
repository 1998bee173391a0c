use crate::config::ScrollConfig;
use crate::math::smoothing::{smooth_damp, DampVelocity};
use crate::rig::ScrollSource;

/// Offsets closer than this to the target snap onto it
pub const SCROLL_EPS: f32 = 1e-5;

/// A tall scroll container whose position drives the flythrough.
///
/// The container is `pages` viewports high. The raw offset follows the
/// scroll bar directly; `offset()` chases it with critically damped easing.
#[derive(Debug, Clone)]
pub struct ScrollControls {
    pages: f32,
    damping: f32,
    viewport_height: f32,
    scroll_top: f32,
    offset: f32,
    velocity: DampVelocity,
}

impl ScrollControls {
    pub fn new(pages: f32, damping: f32) -> Self {
        Self {
            pages,
            damping,
            viewport_height: 1.0,
            scroll_top: 0.0,
            offset: 0.0,
            velocity: DampVelocity::default(),
        }
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(config.pages, config.damping)
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    /// Distance the content can scroll, in pixels
    pub fn scroll_length(&self) -> f32 {
        (self.pages - 1.0).max(0.0) * self.viewport_height
    }

    /// Raw scroll position in pixels. Overscroll may push it negative.
    pub fn scroll_to(&mut self, scroll_top: f32) {
        self.scroll_top = scroll_top;
    }

    /// Jump to a normalized position without easing
    pub fn jump_to(&mut self, offset: f32) {
        self.scroll_top = offset * self.scroll_length();
        self.offset = offset;
        self.velocity = DampVelocity::default();
    }

    /// Normalized scroll bar position, no easing applied
    pub fn raw_offset(&self) -> f32 {
        let length = self.scroll_length();
        if length <= 0.0 {
            0.0
        } else {
            self.scroll_top / length
        }
    }

    /// Advance the eased offset by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        self.offset = smooth_damp(
            self.offset,
            self.raw_offset(),
            &mut self.velocity,
            self.damping,
            delta,
            SCROLL_EPS,
        );
    }
}

impl ScrollSource for ScrollControls {
    fn offset(&self) -> f32 {
        self.offset
    }
}

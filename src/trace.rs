use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::FlythroughConfig;
use crate::frame::{FixedStepFrames, FrameInfo};
use crate::rig::{FrameTransforms, PathFollower, ScrollSource};
use crate::scroll::ScrollControls;

/// Viewport height assumed by headless runs, pixels
pub const HEADLESS_VIEWPORT_HEIGHT: f32 = 1080.0;

/// Simulated wheel input: the scroll bar moves linearly between two offsets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPlan {
    pub from: f32,
    pub to: f32,
}

impl ScrollPlan {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// Raw offset after `step` of `total` frames
    pub fn offset_at(&self, step: u64, total: u64) -> f32 {
        if total == 0 {
            return self.to;
        }
        let f = step as f32 / total as f32;
        self.from + (self.to - self.from) * f
    }
}

impl Default for ScrollPlan {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: FrameInfo,
    /// Damped scroll offset seen by the follower
    pub scroll: f32,
    pub transforms: FrameTransforms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub generated_at: String,
    pub config: FlythroughConfig,
    pub plan: ScrollPlan,
    pub frames: Vec<FrameRecord>,
}

impl Trace {
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self).context("Failed to write trace")
    }
}

/// Run the follower headless over `frames`, driving the scroll container
/// with `plan`.
pub fn simulate(
    config: &FlythroughConfig,
    frames: FixedStepFrames,
    plan: ScrollPlan,
    mut on_frame: impl FnMut(&FrameRecord),
) -> Result<Trace> {
    let mut follower = PathFollower::from_config(config).context("Failed to build path follower")?;
    let mut scroll = ScrollControls::from_config(&config.scroll);
    scroll.set_viewport_height(HEADLESS_VIEWPORT_HEIGHT);
    scroll.jump_to(plan.from);

    let total = frames.len() as u64;
    let mut records = Vec::with_capacity(frames.len());

    for frame in frames {
        let raw = plan.offset_at(frame.number + 1, total);
        scroll.scroll_to(raw * scroll.scroll_length());
        scroll.tick(frame.delta);

        let transforms = follower.update(&scroll, frame.delta);
        let record = FrameRecord {
            frame,
            scroll: scroll.offset(),
            transforms,
        };
        on_frame(&record);
        records.push(record);
    }

    Ok(Trace {
        generated_at: chrono::Local::now().to_rfc3339(),
        config: config.clone(),
        plan,
        frames: records,
    })
}

use serde::{Deserialize, Serialize};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frames at a fixed rate, for headless runs and tests
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    frame_number: u64,
    total: u64,
    delta: f32,
}

impl FixedStepFrames {
    /// `total` frames at `fps` frames per second
    pub fn new(total: u64, fps: f32) -> Self {
        let delta = if fps > 0.0 { 1.0 / fps } else { 0.0 };
        Self {
            frame_number: 0,
            total,
            delta,
        }
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.frame_number >= self.total {
            return None;
        }
        let number = self.frame_number;
        self.frame_number += 1;
        Some(FrameInfo::new(number, (number + 1) as f32 * self.delta, self.delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.frame_number) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FixedStepFrames {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_frames_are_exact() {
        let frames: Vec<FrameInfo> = FixedStepFrames::new(4, 24.0).collect();
        assert_eq!(frames.len(), 4);
        assert!(frames.iter().all(|f| f.delta == 1.0 / 24.0));
        assert_eq!(frames[3].number, 3);
        assert!((frames[3].time - 4.0 / 24.0).abs() < 1e-6);
    }

    #[test]
    fn fixed_step_frames_report_remaining_len() {
        let mut frames = FixedStepFrames::new(3, 60.0);
        assert_eq!(frames.len(), 3);
        frames.next();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn fixed_step_zero_fps_has_zero_delta() {
        let mut frames = FixedStepFrames::new(1, 0.0);
        assert_eq!(frames.next().unwrap().delta, 0.0);
        assert!(frames.next().is_none());
    }
}

use std::time::Instant;

use super::FrameRate;

/// Result of flipping the animation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Started,
    Stopped(FrameRate),
}

/// Tracks whether the scene is spinning, since when, and how many frames
/// were presented since then.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    started_at: Option<Instant>,
    frames: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn toggle(&mut self, now: Instant) -> Toggle {
        match self.started_at.take() {
            None => {
                self.started_at = Some(now);
                self.frames = 0;
                Toggle::Started
            }
            Some(start) => {
                let elapsed_ms = now.saturating_duration_since(start).as_millis() as u64;
                Toggle::Stopped(FrameRate::measure(self.frames, elapsed_ms))
            }
        }
    }

    /// Count one presented frame.
    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Milliseconds since the animation started, 0 when stopped.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        self.started_at
            .map(|start| now.saturating_duration_since(start).as_millis() as u64)
            .unwrap_or(0)
    }

    /// Extra rotation applied to the scene on both the X and Y axes.
    pub fn spin_degrees(&self, now: Instant) -> f32 {
        self.elapsed_ms(now) as f32 / 10.0
    }
}

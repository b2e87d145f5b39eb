//! Time management utilities

use std::time::Instant;

/// Per-frame clock handed to actors and components
///
/// Tracks the unscaled frame delta alongside a time scale, so gameplay code
/// can read scaled time while diagnostics keep using wall-clock time.
#[derive(Debug, Clone)]
pub struct FrameTime {
    last_frame: Instant,
    delta_time: f32,
    time_scale: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTime {
    /// Create a new clock with a time scale of 1
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            time_scale: 1.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Create a new clock with the given time scale
    pub fn with_time_scale(time_scale: f32) -> Self {
        let mut time = Self::new();
        time.set_time_scale(time_scale);
        time
    }

    /// Advance by the wall-clock time elapsed since the previous frame
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(elapsed);
    }

    /// Advance by a fixed delta (seconds), ignoring the wall clock
    pub fn advance(&mut self, delta_time: f32) {
        self.last_frame = Instant::now();
        self.record(delta_time);
    }

    fn record(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Unscaled time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Time since the last frame multiplied by the time scale
    pub fn scaled_delta_time(&self) -> f32 {
        self.delta_time * self.time_scale
    }

    /// Current time scale
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale; negative values are clamped to zero
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }

    /// Total unscaled time since creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of frames recorded
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_accumulates() {
        let mut time = FrameTime::new();
        time.advance(0.5);
        time.advance(0.25);

        assert_eq!(time.frame_count(), 2);
        assert_relative_eq!(time.delta_time(), 0.25);
        assert_relative_eq!(time.total_time(), 0.75);
        assert_relative_eq!(time.current_fps(), 4.0);
    }

    #[test]
    fn test_scaled_delta() {
        let mut time = FrameTime::with_time_scale(0.5);
        time.advance(0.1);

        assert_relative_eq!(time.delta_time(), 0.1);
        assert_relative_eq!(time.scaled_delta_time(), 0.05);
    }

    #[test]
    fn test_negative_time_scale_clamped() {
        let mut time = FrameTime::new();
        time.set_time_scale(-2.0);

        assert_eq!(time.time_scale(), 0.0);
    }

    #[test]
    fn test_tick_measures_non_negative_delta() {
        let mut time = FrameTime::new();
        time.tick();

        assert!(time.delta_time() >= 0.0);
        assert_eq!(time.frame_count(), 1);
    }
}

//! Frame context shared with actors and components

use crate::{
    config::EngineConfig,
    foundation::time::FrameTime,
    render::DrawList,
};

/// Per-frame context handed to every actor and component hook
///
/// The host owns the framework, advances its clock once per frame and
/// replays the draw list onto its canvas after rendering.
pub struct Framework {
    time: FrameTime,
    draw_list: DrawList,
    config: EngineConfig,
}

impl Framework {
    /// Create a framework from configuration
    pub fn new(config: EngineConfig) -> Self {
        log::info!("Initializing framework (time scale {})", config.time_scale);

        Self {
            time: FrameTime::with_time_scale(config.time_scale),
            draw_list: DrawList::new(),
            config,
        }
    }

    /// Start a frame with a fixed delta: advances time and clears the draw list
    pub fn begin_frame(&mut self, delta_time: f32) {
        self.time.advance(delta_time);
        self.draw_list.clear();
    }

    /// Start a frame measured against the wall clock
    pub fn begin_frame_realtime(&mut self) {
        self.time.tick();
        self.draw_list.clear();
    }

    /// Frame clock
    pub fn time(&self) -> &FrameTime {
        &self.time
    }

    /// Mutable frame clock
    pub fn time_mut(&mut self) -> &mut FrameTime {
        &mut self.time
    }

    /// Draw commands recorded this frame
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Drawing surface for render hooks
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.draw_list
    }

    /// Runtime configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for Framework {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::render::Color;
    use approx::assert_relative_eq;

    #[test]
    fn test_begin_frame_clears_and_advances() {
        let mut config = EngineConfig::default();
        config.time_scale = 2.0;
        let mut framework = Framework::new(config);

        framework.draw_list_mut().circle(Vec2::zeros(), 1.0, Color::WHITE);
        framework.begin_frame(0.25);

        assert!(framework.draw_list().is_empty());
        assert_eq!(framework.time().frame_count(), 1);
        assert_relative_eq!(framework.time().scaled_delta_time(), 0.5);
    }
}

//! Runtime configuration for the actor framework
//!
//! Every field has a default, so a config file only needs to name the
//! values it overrides.

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::Vec2;
use crate::render::Color;

/// Top-level runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fallback `env_logger` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Multiplier applied to the frame delta for gameplay updates
    pub time_scale: f32,
    /// Pivot assigned to newly created actors
    pub default_pivot: Vec2,
    /// Diagnostic overlay settings
    pub debug: DebugDrawConfig,
    /// Overlay colors
    pub colors: ColorSet,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            time_scale: 1.0,
            default_pivot: Vec2::new(0.5, 1.0),
            debug: DebugDrawConfig::default(),
            colors: ColorSet::default(),
        }
    }
}

impl Config for EngineConfig {}

/// Diagnostic overlays drawn during the post-render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugDrawConfig {
    /// Draw a marker at every shape's actor position
    pub draw_position_markers: bool,
    /// Radius of the position marker
    pub position_marker_radius: f32,
    /// Draw markers on the rotated corners of box shapes
    pub draw_corner_markers: bool,
    /// Radius of the corner markers
    pub corner_marker_radius: f32,
    /// Outline collision bounds
    pub draw_collision_bounds: bool,
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            draw_position_markers: true,
            position_marker_radius: 1.0,
            draw_corner_markers: true,
            corner_marker_radius: 10.0,
            draw_collision_bounds: false,
        }
    }
}

/// Colors used by diagnostic overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSet {
    /// Position markers
    pub position: Color,
    /// Collision bounds outlines
    pub collision: Color,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self {
            position: Color::YELLOW,
            collision: Color::GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.default_pivot, Vec2::new(0.5, 1.0));
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.debug.position_marker_radius, 1.0);
        assert_eq!(config.debug.corner_marker_radius, 10.0);
        assert!(!config.debug.draw_collision_bounds);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            time_scale = 0.5

            [debug]
            draw_collision_bounds = true
            "#,
        )
        .unwrap();

        assert_eq!(config.time_scale, 0.5);
        assert!(config.debug.draw_collision_bounds);
        assert_eq!(config.debug.corner_marker_radius, 10.0);
        assert_eq!(config.default_pivot, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut config = EngineConfig::default();
        config.default_pivot = Vec2::new(0.0, 0.0);
        config.colors.position = Color::RED;

        let text = ron::to_string(&config).unwrap();
        let parsed: EngineConfig = ron::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }
}

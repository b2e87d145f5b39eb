//! Headless demo scene
//!
//! Spawns a handful of actors, steps a fixed number of frames and logs the
//! draw command counts and collision candidates. Pass a `.toml` or `.ron`
//! config path as the first argument to override the defaults.

mod recipes;

use actor2d::foundation::logging;
use actor2d::prelude::*;
use thiserror::Error;

const FRAME_COUNT: u64 = 120;
const FRAME_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_CONFIG_PATH: &str = "playground.toml";

/// Demo errors
#[derive(Error, Debug)]
enum PlaygroundError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), PlaygroundError> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = EngineConfig::load_or_default(&config_path)?;
    logging::init_with_filter(&config.log_filter);

    log::info!("Starting playground with {}", config_path);

    let mut world = build_scene(&config);
    let mut framework = Framework::new(config);

    for _ in 0..FRAME_COUNT {
        framework.begin_frame(FRAME_DELTA);
        world.step(&mut framework);

        let pairs = candidate_pairs(&world);
        let frame = framework.time().frame_count();
        log::debug!(
            "Frame {}: {} draw commands, {} candidate pairs",
            frame,
            framework.draw_list().len(),
            pairs.len()
        );
        for pair in &pairs {
            if rects_overlap(&pair.bounds_a, &pair.bounds_b) {
                log::info!("Frame {}: {:?} overlaps {:?}", frame, pair.a, pair.b);
            }
        }
    }

    log::info!(
        "Finished {} frames ({:.2}s simulated)",
        framework.time().frame_count(),
        framework.time().total_time()
    );
    Ok(())
}

fn build_scene(config: &EngineConfig) -> World {
    let mut world = World::new();

    world.spawn(recipes::circle_actor(config, Vec2::new(120.0, 0.0)).with_position(100.0, 200.0));
    world.spawn(recipes::block_actor(config).with_position(300.0, 200.0));
    world.spawn(recipes::rotate_actor(config, 90.0).with_position(300.0, 350.0));
    world.spawn(recipes::line_actor(80.0, 40.0).with_position(50.0, 50.0));
    world.spawn(recipes::line_actor(-40.0, 80.0).with_position(120.0, 40.0));
    world.spawn(recipes::mesh_actor(config, 100.0).with_position(500.0, 100.0));

    log::info!("Scene built with {} actors", world.len());
    world
}

/// Axis-aligned overlap test, tolerant of negative extents
fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let (a_min_x, a_max_x) = (a.x1.min(a.x2), a.x1.max(a.x2));
    let (a_min_y, a_max_y) = (a.y1.min(a.y2), a.y1.max(a.y2));
    let (b_min_x, b_max_x) = (b.x1.min(b.x2), b.x1.max(b.x2));
    let (b_min_y, b_max_y) = (b.y1.min(b.y2), b.y1.max(b.y2));

    a_min_x <= b_max_x && b_min_x <= a_max_x && a_min_y <= b_max_y && b_min_y <= a_max_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_has_expected_candidates() {
        let world = build_scene(&EngineConfig::default());
        let pairs = candidate_pairs(&world);

        // circle-block, circle-rotating block, line-line
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_rects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!rects_overlap(&a, &Rect::new(20.0, 0.0, 5.0, 5.0)));
        assert!(rects_overlap(&a, &Rect::new(15.0, 15.0, -10.0, -10.0)));
    }
}

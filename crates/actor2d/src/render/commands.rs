//! Recorded draw commands

use crate::foundation::math::Vec2;
use super::Color;

/// A single 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Connected line strip through `points`
    ///
    /// Closed outlines repeat their first point at the end.
    Polyline {
        /// Points in drawing order
        points: Vec<Vec2>,
        /// Stroke color
        color: Color,
    },

    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec2,
        /// Segment end
        end: Vec2,
        /// Stroke color
        color: Color,
    },

    /// Stroked circle
    Circle {
        /// Circle center
        center: Vec2,
        /// Circle radius
        radius: f32,
        /// Stroke color
        color: Color,
    },
}

impl DrawCommand {
    /// Stroke color of the command
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Polyline { color, .. }
            | DrawCommand::Line { color, .. }
            | DrawCommand::Circle { color, .. } => *color,
        }
    }
}

/// Ordered list of draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line strip
    pub fn polyline(&mut self, points: Vec<Vec2>, color: Color) {
        self.commands.push(DrawCommand::Polyline { points, color });
    }

    /// Record a line segment
    pub fn line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { start, end, color });
    }

    /// Record a circle
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    /// Recorded commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take the recorded commands, leaving the list empty
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_keep_submission_order() {
        let mut list = DrawList::new();
        list.line(Vec2::zeros(), Vec2::new(1.0, 1.0), Color::GRAY);
        list.circle(Vec2::zeros(), 2.0, Color::RED);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Circle { radius, .. } if radius == 2.0));
        assert_eq!(list.commands()[1].color(), Color::RED);
    }

    #[test]
    fn test_drain_empties_list() {
        let mut list = DrawList::new();
        list.polyline(vec![Vec2::zeros(), Vec2::new(1.0, 0.0)], Color::WHITE);

        let drained: Vec<_> = list.drain().collect();
        assert_eq!(drained.len(), 1);
        assert!(list.is_empty());
    }
}

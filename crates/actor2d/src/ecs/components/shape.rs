//! Shape component: visible geometry attached to an actor
//!
//! Box and line shapes derive their footprint from a size and the actor
//! pivot. Mesh shapes carry explicit local-space vertices. Bounds stay
//! axis-aligned; rotation is applied per point only when an outline is built.

use std::any::Any;

use crate::ecs::{ActorBody, ActorKey, Component, ComponentType};
use crate::engine::Framework;
use crate::foundation::math::{Rect, Vec2};
use crate::render::Color;

/// Geometry variants of a shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Rectangle of `size`, drawn as a rotated quad
    Box,

    /// Segment from the pivot-anchored origin to `origin + size`
    Line,

    /// Closed polygon through local-space vertices
    Mesh {
        /// Vertices relative to the actor position, before rotation
        vertices: Vec<Vec2>,
    },
}

/// Visible geometry of an actor
#[derive(Debug, Clone)]
pub struct ShapeComponent {
    owner: Option<ActorKey>,
    kind: ShapeKind,
    size: Vec2,
    color: Color,
}

impl ShapeComponent {
    fn with_kind(kind: ShapeKind, color: Color) -> Self {
        Self {
            owner: None,
            kind,
            size: Vec2::new(10.0, 10.0),
            color,
        }
    }

    /// Create a 10x10 box shape
    pub fn new_box() -> Self {
        Self::with_kind(ShapeKind::Box, Color::WHITE)
    }

    /// Create a gray line shape with a 10x10 extent
    pub fn new_line() -> Self {
        Self::with_kind(ShapeKind::Line, Color::GRAY)
    }

    /// Create a mesh shape from local-space vertices
    pub fn new_mesh(vertices: Vec<Vec2>) -> Self {
        Self::with_kind(ShapeKind::Mesh { vertices }, Color::WHITE)
    }

    /// Builder pattern: Set size
    pub fn with_size(mut self, x: f32, y: f32) -> Self {
        self.set_size(x, y);
        self
    }

    /// Builder pattern: Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    /// Set the size (or direction vector for lines)
    pub fn set_size(&mut self, x: f32, y: f32) {
        self.size = Vec2::new(x, y);
    }

    /// Set the stroke color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Size, or direction vector for lines
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Stroke color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Geometry variant
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Footprint relative to the actor position, before rotation
    pub fn local_rect(&self, body: &ActorBody) -> Rect {
        body.local_rect(self.size)
    }

    /// Footprint in world space, never rotated
    pub fn world_rect(&self, body: &ActorBody) -> Rect {
        self.local_rect(body).translated(body.position())
    }

    /// World-space outline in drawing order
    ///
    /// Box and mesh outlines are rotated by the actor rotation and closed by
    /// repeating their first point. Lines yield their two endpoints unrotated.
    pub fn outline(&self, body: &ActorBody) -> Vec<Vec2> {
        let position = body.position();
        let rotation = body.rotation_matrix();
        let to_world = |local: &Vec2| position + rotation.multiply_with_vector2(*local);

        match &self.kind {
            ShapeKind::Box => {
                closed(self.local_rect(body).corners().iter().map(to_world).collect())
            }
            ShapeKind::Mesh { vertices } => closed(vertices.iter().map(to_world).collect()),
            ShapeKind::Line => {
                let rect = self.world_rect(body);
                vec![rect.origin(), rect.end()]
            }
        }
    }
}

fn closed(mut points: Vec<Vec2>) -> Vec<Vec2> {
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

impl Component for ShapeComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Shape
    }

    fn owner(&self) -> Option<ActorKey> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<ActorKey>) {
        self.owner = owner;
    }

    fn render(&self, body: &ActorBody, framework: &mut Framework) {
        let outline = self.outline(body);
        let draw_list = framework.draw_list_mut();

        match self.kind {
            ShapeKind::Line => {
                if let [start, end] = outline[..] {
                    draw_list.line(start, end, self.color);
                }
            }
            ShapeKind::Box | ShapeKind::Mesh { .. } => {
                if !outline.is_empty() {
                    draw_list.polyline(outline, self.color);
                }
            }
        }
    }

    fn render_post(&self, body: &ActorBody, framework: &mut Framework) {
        let debug = framework.config().debug;
        let colors = framework.config().colors;

        if debug.draw_corner_markers && self.kind == ShapeKind::Box {
            let outline = self.outline(body);
            for &corner in outline.iter().take(4) {
                framework
                    .draw_list_mut()
                    .circle(corner, debug.corner_marker_radius, self.color);
            }
        }

        if debug.draw_position_markers {
            framework
                .draw_list_mut()
                .circle(body.position(), debug.position_marker_radius, colors.position);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

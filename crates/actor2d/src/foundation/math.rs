//! Math utilities and types
//!
//! Provides the 2D value types shared by actors and components: vectors,
//! pure rotation matrices, the actor transform and axis-aligned rectangles.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2x2 rotation matrix
///
/// Built from an angle only, so it always stays orthonormal with a
/// determinant of 1. Scale and shear cannot be expressed through this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    rotation: Rotation2<f32>,
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix2 {
    /// Identity rotation
    pub fn identity() -> Self {
        Self {
            rotation: Rotation2::identity(),
        }
    }

    /// Create a rotation matrix from an angle in radians
    pub fn from_angle(angle: f32) -> Self {
        Self {
            rotation: Rotation2::new(angle),
        }
    }

    /// Rotation angle in radians, in `(-PI, PI]`
    pub fn angle(&self) -> f32 {
        self.rotation.angle()
    }

    /// Rotate a vector: returns `M * v`
    pub fn multiply_with_vector2(&self, v: Vec2) -> Vec2 {
        self.rotation * v
    }

    /// Determinant of the underlying matrix
    pub fn determinant(&self) -> f32 {
        self.rotation.matrix().determinant()
    }
}

/// Actor orientation: rotation angle and uniform scale
///
/// Position lives on the actor itself. The rotation matrix is recomputed
/// whenever the angle changes, so reads never observe a stale matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    rotation: f32,
    scale: f32,
    rotation_matrix: Matrix2,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Transform2 {
    /// Create a transform from a rotation (radians) and uniform scale
    pub fn new(rotation: f32, scale: f32) -> Self {
        Self {
            rotation,
            scale,
            rotation_matrix: Matrix2::from_angle(rotation),
        }
    }

    /// Rotation angle in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set the rotation angle in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.rotation_matrix = Matrix2::from_angle(rotation);
    }

    /// Add to the rotation angle
    pub fn add_rotation(&mut self, delta: f32) {
        self.set_rotation(self.rotation + delta);
    }

    /// Uniform scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Rotation matrix matching the current angle
    pub fn rotation_matrix(&self) -> &Matrix2 {
        &self.rotation_matrix
    }
}

/// Axis-aligned rectangle stored as two corners
///
/// `(x1, y1)` is the origin corner and `(x2, y2)` the opposite one. Negative
/// sizes are kept as-is, so `x2 < x1` describes a rectangle extending in the
/// negative direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Origin corner X
    pub x1: f32,
    /// Origin corner Y
    pub y1: f32,
    /// Opposite corner X
    pub x2: f32,
    /// Opposite corner Y
    pub y2: f32,
}

impl Rect {
    /// Create a rectangle from an origin corner and a size
    pub fn new(x1: f32, y1: f32, width: f32, height: f32) -> Self {
        Self {
            x1,
            y1,
            x2: x1 + width,
            y2: y1 + height,
        }
    }

    /// Create a rectangle from origin and size vectors
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Origin corner
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    /// Opposite corner
    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x2, self.y2)
    }

    /// Signed width
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Signed height
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Signed size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Same rectangle moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            x1: self.x1 + offset.x,
            y1: self.y1 + offset.y,
            x2: self.x2 + offset.x,
            y2: self.y2 + offset.y,
        }
    }

    /// Corners in outline order: `(x1,y1), (x2,y1), (x2,y2), (x1,y2)`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x1, self.y1),
            Vec2::new(self.x2, self.y1),
            Vec2::new(self.x2, self.y2),
            Vec2::new(self.x1, self.y2),
        ]
    }
}

/// Math utility functions
pub mod utils {
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians.to_degrees()
    }
}

//! # Triangle
//!
//! Ordered triple of vertices. Vertex order fixes the local frame:
//! `a` is the origin, `b - a` and `c - a` are the in-plane axes.

use crate::core::vec3::{from_array, Vec3};

/// A triangle in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Frame origin.
    pub a: Vec3,
    /// End of the first edge (`x` axis of the frame).
    pub b: Vec3,
    /// End of the second edge (`y` axis of the frame).
    pub c: Vec3,
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Create a triangle from three `[x, y, z]` arrays.
    ///
    /// # Examples
    /// ```
    /// use tri_intersect::{Triangle, Vec3};
    /// let tri = Triangle::from_array([[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    /// assert_eq!(tri.b, Vec3::X);
    /// ```
    pub fn from_array(vertices: [[f64; 3]; 3]) -> Self {
        Self::new(
            from_array(vertices[0]),
            from_array(vertices[1]),
            from_array(vertices[2]),
        )
    }

    /// Vertices in order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Unnormalized normal `(b - a) x (c - a)`.
    ///
    /// Its length is twice the triangle's area.
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a)
    }
}

impl From<[Vec3; 3]> for Triangle {
    fn from(v: [Vec3; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

//! # Segment
//!
//! Line segment between two endpoints. Endpoint order does not affect the
//! intersection answer.

use crate::core::vec3::Vec3;

/// A line segment in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub p: Vec3,
    /// Second endpoint.
    pub q: Vec3,
}

impl Segment {
    /// Create a segment from two endpoints.
    pub fn new(p: Vec3, q: Vec3) -> Self {
        Self { p, q }
    }

    /// Vector from `p` to `q`.
    pub fn direction(&self) -> Vec3 {
        self.q - self.p
    }

    /// Point at parameter `t`, where `t = 0` is `p` and `t = 1` is `q`.
    ///
    /// # Examples
    /// ```
    /// use tri_intersect::{Segment, Vec3};
    /// let s = Segment::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
    /// assert_eq!(s.point_at(0.5), Vec3::X);
    /// ```
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.p + self.direction() * t
    }

    /// Same segment with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.q, self.p)
    }
}

impl From<(Vec3, Vec3)> for Segment {
    fn from((p, q): (Vec3, Vec3)) -> Self {
        Self::new(p, q)
    }
}

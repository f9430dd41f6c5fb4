//! # Local Frame
//!
//! Coordinate frame anchored at a triangle's first vertex, plus the
//! projector that expresses world points in it.
//!
//! ## Frame
//!
//! ```text
//! origin = a
//! u      = b - a            (not normalized)
//! v      = c - a            (not normalized, not orthogonal to u)
//! w      = normalize(u x v) (unit normal)
//! ```
//!
//! In this frame the triangle maps to the unit right triangle
//! `(0,0)`, `(1,0)`, `(0,1)` and `z` is the signed distance from its plane.
//!
//! ## Projection
//!
//! The in-plane coefficients are solved from the world `x`/`y` components
//! only. That 2x2 system is singular whenever the triangle's plane contains
//! the world z direction, even though the frame itself is fine; such
//! inputs are reported as [`IntersectError::SingularProjection`].

use ::config::constants::within_scaled_tolerance;
use log::{debug, trace};

use crate::config::IntersectConfig;
use crate::core::vec3::Vec3;
use crate::error::{IntersectError, IntersectResult};
use crate::geometry::Triangle;

// =============================================================================
// LOCAL COORDINATES
// =============================================================================

/// Position of a point expressed in a [`LocalFrame`].
///
/// `point = origin + x * u + y * v + z * w`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCoord {
    /// Coefficient along `u`.
    pub x: f64,
    /// Coefficient along `v`.
    pub y: f64,
    /// Signed distance along the unit normal `w`.
    pub z: f64,
}

impl LocalCoord {
    /// Create local coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

// =============================================================================
// LOCAL FRAME
// =============================================================================

/// Triangle-local frame. Only `w` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    /// First triangle vertex.
    pub origin: Vec3,
    /// First edge, `b - a`.
    pub u: Vec3,
    /// Second edge, `c - a`.
    pub v: Vec3,
    /// Unit normal, `normalize(u x v)`.
    pub w: Vec3,
}

impl LocalFrame {
    /// Create a frame from three points.
    ///
    /// Fails with [`IntersectError::DegenerateTriangle`] when the points are
    /// collinear or coincident, i.e. when `|u x v|` does not exceed
    /// `config.degenerate_tolerance * |u| * |v|`.
    ///
    /// # Examples
    /// ```
    /// use tri_intersect::{IntersectConfig, LocalFrame, Vec3};
    /// let frame = LocalFrame::from_points(
    ///     Vec3::ZERO,
    ///     Vec3::new(2.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 3.0, 0.0),
    ///     &IntersectConfig::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(frame.u, Vec3::new(2.0, 0.0, 0.0));
    /// assert_eq!(frame.w, Vec3::Z);
    /// ```
    pub fn from_points(
        a: Vec3,
        b: Vec3,
        c: Vec3,
        config: &IntersectConfig,
    ) -> IntersectResult<Self> {
        let u = b - a;
        let v = c - a;
        let n = u.cross(v);
        let area2 = n.length();
        let scale = u.length() * v.length();

        if !area2.is_finite()
            || within_scaled_tolerance(area2, scale, config.degenerate_tolerance)
        {
            debug!("rejecting degenerate triangle {a} {b} {c}: |u x v| = {area2}");
            return Err(IntersectError::DegenerateTriangle { area2 });
        }

        let w = n / area2;
        trace!("frame: origin={a} u={u} v={v} w={w}");
        Ok(Self { origin: a, u, v, w })
    }

    /// Signed distance from `point` to the frame's plane.
    ///
    /// Positive on the side `w` points to.
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        (point - self.origin).dot(self.w)
    }

    /// Determinant of the world-xy components of `u` and `v`.
    pub fn xy_determinant(&self) -> f64 {
        self.u.x * self.v.y - self.v.x * self.u.y
    }

    /// Express `point` in this frame.
    ///
    /// `z` is the exact signed distance along `w`. The foot point
    /// `e = d - z * w` is then decomposed into `x * u + y * v` by Cramer's
    /// rule on the world `x`/`y` components. The system counts as singular
    /// when `|det| <= config.singular_tolerance * |u.xy| * |v.xy|`.
    ///
    /// # Examples
    /// ```
    /// use tri_intersect::{IntersectConfig, LocalFrame, Vec3};
    /// let cfg = IntersectConfig::default();
    /// let frame = LocalFrame::from_points(Vec3::ZERO, Vec3::X, Vec3::Y, &cfg).unwrap();
    /// let coord = frame.project(Vec3::new(1.0, 1.0, 1.0), &cfg).unwrap();
    /// assert_eq!((coord.x, coord.y, coord.z), (1.0, 1.0, 1.0));
    /// ```
    pub fn project(&self, point: Vec3, config: &IntersectConfig) -> IntersectResult<LocalCoord> {
        let z = self.signed_distance(point);
        let e = point - self.origin - self.w * z;

        let det = self.xy_determinant();
        let scale = self.u.truncate().length() * self.v.truncate().length();
        if !det.is_finite() || within_scaled_tolerance(det, scale, config.singular_tolerance) {
            debug!("singular xy projection for frame u={} v={}: det = {det}", self.u, self.v);
            return Err(IntersectError::SingularProjection { determinant: det });
        }

        let x = (e.x * self.v.y - self.v.x * e.y) / det;
        let y = (self.u.x * e.y - e.x * self.u.y) / det;
        trace!("project {point} -> ({x}, {y}, {z})");
        Ok(LocalCoord::new(x, y, z))
    }

    /// Map local coordinates back to world space.
    pub fn to_world(&self, coord: LocalCoord) -> Vec3 {
        self.origin + self.u * coord.x + self.v * coord.y + self.w * coord.z
    }
}

/// Build the local frame of `triangle`.
///
/// # Examples
/// ```
/// use tri_intersect::{build_frame, IntersectConfig, IntersectError, Triangle, Vec3};
/// let flat = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
/// assert!(matches!(
///     build_frame(&flat, &IntersectConfig::default()),
///     Err(IntersectError::DegenerateTriangle { .. })
/// ));
/// ```
pub fn build_frame(triangle: &Triangle, config: &IntersectConfig) -> IntersectResult<LocalFrame> {
    LocalFrame::from_points(triangle.a, triangle.b, triangle.c, config)
}

#[cfg(test)]
mod tests;

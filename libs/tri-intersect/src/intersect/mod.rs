//! # Segment/Triangle Intersection
//!
//! Straight-line decision procedure over the triangle's [`LocalFrame`]:
//!
//! 1. project both endpoints (`(x1, y1, z1)`, `(x2, y2, z2)`)
//! 2. straddle test: endpoints strictly on the same side miss
//! 3. interpolate the plane crossing to `z = 0`
//! 4. in-triangle test against `x >= 0`, `y >= 0`, `x + y <= 1`
//!
//! Boundaries are inclusive: an endpoint on the plane counts as crossing and
//! a crossing on an edge or vertex counts as a hit.

use std::fmt;

use ::config::constants::within_tolerance;
use log::{debug, trace};

use crate::config::IntersectConfig;
use crate::core::vec3::Vec3;
use crate::error::{IntersectError, IntersectResult};
use crate::frame::{build_frame, LocalCoord};
use crate::geometry::{Segment, Triangle};

// =============================================================================
// RESULT
// =============================================================================

/// Why a segment missed the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// Both endpoints lie strictly on the same side of the plane.
    SameSide,
    /// The segment crosses the plane outside the triangle.
    OutsideTriangle,
}

/// Outcome of a segment/triangle query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The segment does not touch the triangle.
    Miss(MissReason),
    /// The segment crosses the triangle.
    Hit {
        /// Crossing point in frame coordinates (`z` is always `0`).
        coord: LocalCoord,
        /// Crossing point in world space.
        point: Vec3,
    },
}

impl Intersection {
    /// Returns `true` for [`Intersection::Hit`].
    pub fn is_hit(&self) -> bool {
        matches!(self, Intersection::Hit { .. })
    }

    /// World-space crossing point, if any.
    pub fn point(&self) -> Option<Vec3> {
        match self {
            Intersection::Hit { point, .. } => Some(*point),
            Intersection::Miss(_) => None,
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hit() {
            f.write_str("intersect")
        } else {
            f.write_str("not intersect")
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Test `segment` against `triangle` and report where it crosses.
///
/// # Errors
///
/// - [`IntersectError::DegenerateTriangle`] for collinear/coincident vertices
/// - [`IntersectError::SingularProjection`] when the triangle's xy projection
///   is singular (e.g. its plane contains the world z axis)
/// - [`IntersectError::CoplanarSegment`] when both endpoints lie in the plane
///
/// # Examples
/// ```
/// use tri_intersect::{intersect_segment_triangle, IntersectConfig, Segment, Triangle, Vec3};
///
/// let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
/// let seg = Segment::new(Vec3::new(0.25, 0.25, 1.0), Vec3::new(0.25, 0.25, -1.0));
///
/// let hit = intersect_segment_triangle(&tri, &seg, &IntersectConfig::default()).unwrap();
/// assert_eq!(hit.point(), Some(Vec3::new(0.25, 0.25, 0.0)));
/// assert_eq!(hit.to_string(), "intersect");
/// ```
pub fn intersect_segment_triangle(
    triangle: &Triangle,
    segment: &Segment,
    config: &IntersectConfig,
) -> IntersectResult<Intersection> {
    let frame = build_frame(triangle, config)?;
    let near = frame.project(segment.p, config)?;
    let far = frame.project(segment.q, config)?;

    let tol = config.boundary_tolerance;
    let z1 = snap_to_plane(near.z, tol);
    let z2 = snap_to_plane(far.z, tol);

    if (z1 > 0.0 && z2 > 0.0) || (z1 < 0.0 && z2 < 0.0) {
        trace!("miss: endpoints on the same side (z1={z1}, z2={z2})");
        return Ok(Intersection::Miss(MissReason::SameSide));
    }

    if z1 == 0.0 && z2 == 0.0 {
        debug!("segment {} -> {} lies in the triangle plane", segment.p, segment.q);
        return Err(IntersectError::CoplanarSegment);
    }

    let x = near.x - (far.x - near.x) / (z2 - z1) * z1;
    let y = near.y - (far.y - near.y) / (z2 - z1) * z1;

    if x < -tol || y < -tol || x + y > 1.0 + tol {
        trace!("miss: plane crossing ({x}, {y}) outside triangle");
        return Ok(Intersection::Miss(MissReason::OutsideTriangle));
    }

    let coord = LocalCoord::new(x, y, 0.0);
    let point = frame.to_world(coord);
    trace!("hit at ({x}, {y}) -> {point}");
    Ok(Intersection::Hit { coord, point })
}

/// Returns whether `segment` intersects `triangle`, using exact comparisons.
///
/// # Examples
/// ```
/// use tri_intersect::{segment_intersects_triangle, Segment, Triangle, Vec3};
///
/// let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
/// let above = Segment::new(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.2, 0.2, 2.0));
/// assert!(!segment_intersects_triangle(&tri, &above).unwrap());
/// ```
pub fn segment_intersects_triangle(
    triangle: &Triangle,
    segment: &Segment,
) -> IntersectResult<bool> {
    segment_intersects_triangle_with(triangle, segment, &IntersectConfig::default())
}

/// Returns whether `segment` intersects `triangle` under `config`.
pub fn segment_intersects_triangle_with(
    triangle: &Triangle,
    segment: &Segment,
    config: &IntersectConfig,
) -> IntersectResult<bool> {
    intersect_segment_triangle(triangle, segment, config).map(|hit| hit.is_hit())
}

/// Signed distances within `tolerance` of the plane collapse to zero.
fn snap_to_plane(z: f64, tolerance: f64) -> f64 {
    if within_tolerance(z, tolerance) {
        0.0
    } else {
        z
    }
}

//! # Error Types
//!
//! Error types for intersection queries. Every failure is reported at the
//! point of detection and none of them is retried: the inputs are simply
//! unsuitable for this algorithm.

use ::config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while testing a segment against a triangle.
///
/// ## Example
///
/// ```rust
/// use tri_intersect::{segment_intersects_triangle, IntersectError, Segment, Triangle, Vec3};
///
/// let collinear = Triangle::new(
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(2.0, 0.0, 0.0),
/// );
/// let segment = Segment::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
///
/// match segment_intersects_triangle(&collinear, &segment) {
///     Err(IntersectError::DegenerateTriangle { .. }) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntersectError {
    /// The triangle's vertices are collinear or coincident.
    ///
    /// Carries the magnitude of the edge cross product (twice the area).
    #[error("Degenerate triangle: edge cross product magnitude is {area2}")]
    DegenerateTriangle {
        /// `|(b - a) x (c - a)|`
        area2: f64,
    },

    /// The world x/y components of the triangle edges are linearly dependent,
    /// so in-plane coordinates cannot be solved for.
    #[error("Singular projection: xy determinant of the frame edges is {determinant}")]
    SingularProjection {
        /// `u.x * v.y - v.x * u.y`
        determinant: f64,
    },

    /// Both segment endpoints lie in the triangle's plane.
    #[error("Segment lies in the triangle's plane")]
    CoplanarSegment,

    /// Tolerances supplied to the kernel were rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for intersection queries.
pub type IntersectResult<T> = Result<T, IntersectError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let degenerate = IntersectError::DegenerateTriangle { area2: 0.0 };
        assert!(degenerate.to_string().contains("Degenerate triangle"));

        let singular = IntersectError::SingularProjection { determinant: 0.0 };
        assert!(singular.to_string().contains("Singular projection"));

        assert!(IntersectError::CoplanarSegment
            .to_string()
            .contains("plane"));
    }

    #[test]
    fn test_config_error_converts() {
        let cfg_err = ConfigError::NegativeTolerance {
            name: "boundary_tolerance",
            value: -1.0,
        };
        let err: IntersectError = cfg_err.into();
        assert_eq!(err, IntersectError::InvalidConfig(cfg_err));
        assert!(err.to_string().contains("boundary_tolerance"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntersectError>();
    }
}

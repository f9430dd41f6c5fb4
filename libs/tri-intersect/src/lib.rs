//! Segment/triangle intersection kernel.
//!
//! Decides whether a line segment crosses a triangle in 3-D space by building
//! a frame on the triangle (`a`, `b - a`, `c - a`, unit normal), projecting
//! both endpoints into it and running sign and position tests on the
//! projected coordinates.
//!
//! ```
//! use tri_intersect::{segment_intersects_triangle, Segment, Triangle, Vec3};
//!
//! let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
//! let seg = Segment::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
//!
//! // Crosses the plane at (0.5, 0.5), on the hypotenuse
//! assert!(segment_intersects_triangle(&tri, &seg).unwrap());
//! ```
//!
//! All queries are pure functions over `Copy` values and may run on any
//! number of threads at once.

pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod intersect;

pub use crate::config::IntersectConfig;
pub use crate::core::vec3::Vec3;
pub use crate::error::{IntersectError, IntersectResult};
pub use crate::frame::{build_frame, LocalCoord, LocalFrame};
pub use crate::geometry::{Segment, Triangle};
pub use crate::intersect::{
    intersect_segment_triangle, segment_intersects_triangle, segment_intersects_triangle_with,
    Intersection, MissReason,
};

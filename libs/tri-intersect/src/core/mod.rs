//! Core data structures shared by the intersection kernel.
//!
//! Currently only the vector alias (`Vec3`).

pub mod vec3;

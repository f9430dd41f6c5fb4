//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helpers keep vector creation readable while avoiding direct
//! dependencies on `glam` from callers of the kernel.

pub use glam::DVec3 as Vec3;

/// Builds a vector from a `[x, y, z]` array.
///
/// # Examples
/// ```
/// use tri_intersect::core::vec3::from_array;
/// let v = from_array([1.0, 2.0, 3.0]);
/// assert_eq!(v.z, 3.0);
/// ```
pub fn from_array(xyz: [f64; 3]) -> Vec3 {
    Vec3::from_array(xyz)
}

#[cfg(test)]
mod tests;

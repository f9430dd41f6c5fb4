//! Tests for the Vec3 helpers.

use super::*;

#[test]
fn from_array_keeps_component_order() {
    let v = from_array([1.0, -2.0, 0.5]);
    assert_eq!(v, Vec3::new(1.0, -2.0, 0.5));
}

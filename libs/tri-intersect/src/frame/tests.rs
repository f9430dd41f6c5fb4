//! Tests for the frame builder and projector.

use super::*;
use approx::assert_abs_diff_eq;

fn cfg() -> IntersectConfig {
    IntersectConfig::default()
}

fn skewed_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 2.0, 5.0),
        Vec3::new(2.0, 7.0, 1.0),
    )
}

// =============================================================================
// FRAME BUILDER
// =============================================================================

#[test]
fn test_frame_of_unit_right_triangle() {
    let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    let frame = build_frame(&tri, &cfg()).unwrap();

    assert_eq!(frame.origin, Vec3::ZERO);
    assert_eq!(frame.u, Vec3::X);
    assert_eq!(frame.v, Vec3::Y);
    assert_eq!(frame.w, Vec3::Z);
}

#[test]
fn test_frame_keeps_edge_lengths_and_angle() {
    let tri = skewed_triangle();
    let frame = build_frame(&tri, &cfg()).unwrap();

    // Edges are used as-is
    assert_eq!(frame.u, Vec3::new(3.0, 0.0, 2.0));
    assert_eq!(frame.v, Vec3::new(1.0, 5.0, -2.0));
    assert!(frame.u.dot(frame.v).abs() > 0.0);
}

#[test]
fn test_frame_normal_is_unit_and_perpendicular() {
    let frame = build_frame(&skewed_triangle(), &cfg()).unwrap();

    assert_abs_diff_eq!(frame.w.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frame.w.dot(frame.u), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frame.w.dot(frame.v), 0.0, epsilon = 1e-12);
}

#[test]
fn test_frame_rejects_collinear_vertices() {
    let tri = Triangle::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
    assert_eq!(
        build_frame(&tri, &cfg()).unwrap_err(),
        IntersectError::DegenerateTriangle { area2: 0.0 }
    );
}

#[test]
fn test_frame_rejects_coincident_vertices() {
    let p = Vec3::new(3.0, -1.0, 2.0);
    let tri = Triangle::new(p, p, Vec3::new(0.0, 0.0, 1.0));
    assert!(matches!(
        build_frame(&tri, &cfg()),
        Err(IntersectError::DegenerateTriangle { .. })
    ));

    let all_same = Triangle::new(p, p, p);
    assert!(matches!(
        build_frame(&all_same, &cfg()),
        Err(IntersectError::DegenerateTriangle { .. })
    ));
}

#[test]
fn test_frame_rejects_collinear_decimal_vertices() {
    // Decimal inputs leave a rounding residue in u x v
    let cases = [
        (Vec3::new(0.1, 0.2, 0.3), Vec3::new(0.3, 0.6, 0.9)),
        (Vec3::new(0.1, 0.7, 0.0), Vec3::new(0.3, 2.1, 0.0)),
        (Vec3::new(0.1, 0.3, 0.7), Vec3::new(0.7, 2.1, 4.9)),
    ];
    for (b, c) in cases {
        let tri = Triangle::new(Vec3::ZERO, b, c);
        assert!(
            matches!(
                build_frame(&tri, &cfg()),
                Err(IntersectError::DegenerateTriangle { .. })
            ),
            "collinear {b} {c}"
        );
    }
}

#[test]
fn test_frame_degenerate_check_is_scale_free() {
    for scale in [1e-7, 1.0, 1e7] {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X * scale, Vec3::Y * scale);
        let frame = build_frame(&tri, &cfg()).unwrap();
        assert_abs_diff_eq!(frame.w.z, 1.0, epsilon = 1e-15);

        let flat = Triangle::new(Vec3::ZERO, Vec3::X * scale, Vec3::X * (0.3 * scale));
        assert!(matches!(
            build_frame(&flat, &cfg()),
            Err(IntersectError::DegenerateTriangle { .. })
        ));
    }
}

#[test]
fn test_frame_degenerate_tolerance_rejects_slivers() {
    let sliver = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(0.5, 1e-9, 0.0));
    assert!(build_frame(&sliver, &cfg()).is_ok());

    let strict = IntersectConfig::new(0.0, 1e-6, 1e-12).unwrap();
    assert!(matches!(
        build_frame(&sliver, &strict),
        Err(IntersectError::DegenerateTriangle { .. })
    ));
}

// =============================================================================
// PROJECTOR
// =============================================================================

#[test]
fn test_project_canonical_endpoints() {
    let frame = LocalFrame::from_points(Vec3::ZERO, Vec3::X, Vec3::Y, &cfg()).unwrap();

    let e = frame.project(Vec3::new(1.0, 1.0, 1.0), &cfg()).unwrap();
    assert_eq!(e, LocalCoord::new(1.0, 1.0, 1.0));

    let f = frame.project(Vec3::new(0.0, 0.0, -1.0), &cfg()).unwrap();
    assert_eq!(f, LocalCoord::new(0.0, 0.0, -1.0));
}

#[test]
fn test_project_uses_skewed_basis() {
    let frame = build_frame(&skewed_triangle(), &cfg()).unwrap();
    let point = frame.origin + frame.u * 0.25 + frame.v * 0.5 + frame.w * 2.0;

    let coord = frame.project(point, &cfg()).unwrap();
    assert_abs_diff_eq!(coord.x, 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(coord.y, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(coord.z, 2.0, epsilon = 1e-12);
}

#[test]
fn test_project_z_is_signed_distance() {
    let frame = build_frame(&skewed_triangle(), &cfg()).unwrap();
    let point = Vec3::new(-4.0, 9.0, 0.5);

    let coord = frame.project(point, &cfg()).unwrap();
    assert_abs_diff_eq!(coord.z, frame.signed_distance(point), epsilon = 1e-12);
}

#[test]
fn test_project_round_trip() {
    let frame = build_frame(&skewed_triangle(), &cfg()).unwrap();
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-7.5, 3.25, 11.0),
        Vec3::new(100.0, -40.0, 0.125),
    ];

    for point in points {
        let back = frame.to_world(frame.project(point, &cfg()).unwrap());
        assert_abs_diff_eq!(back.x, point.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, point.y, epsilon = 1e-9);
        assert_abs_diff_eq!(back.z, point.z, epsilon = 1e-9);
    }
}

#[test]
fn test_project_vertices_map_to_unit_triangle() {
    let tri = skewed_triangle();
    let frame = build_frame(&tri, &cfg()).unwrap();

    let expected = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    for (vertex, (x, y)) in tri.vertices().into_iter().zip(expected) {
        let coord = frame.project(vertex, &cfg()).unwrap();
        assert_abs_diff_eq!(coord.x, x, epsilon = 1e-12);
        assert_abs_diff_eq!(coord.y, y, epsilon = 1e-12);
        assert_abs_diff_eq!(coord.z, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_project_small_triangle_is_not_singular() {
    let tri = Triangle::new(
        Vec3::ZERO,
        Vec3::new(1e-7, 0.0, 0.0),
        Vec3::new(0.0, 1e-7, 0.0),
    );
    let frame = build_frame(&tri, &cfg()).unwrap();

    let coord = frame.project(Vec3::new(2e-8, 3e-8, 1.0), &cfg()).unwrap();
    assert_abs_diff_eq!(coord.x, 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(coord.y, 0.3, epsilon = 1e-9);
    assert_abs_diff_eq!(coord.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_project_vertical_plane_is_singular() {
    // Plane y = 0 contains the world z axis
    let frame = LocalFrame::from_points(Vec3::ZERO, Vec3::X, Vec3::Z, &cfg()).unwrap();
    assert_eq!(frame.xy_determinant(), 0.0);
    assert_eq!(
        frame.project(Vec3::new(0.2, 1.0, 0.2), &cfg()).unwrap_err(),
        IntersectError::SingularProjection { determinant: 0.0 }
    );
}

#[test]
fn test_project_singular_threshold_comes_from_config() {
    // Edge xy projections (1, 0) and (1, 1e-10) are nearly parallel
    let frame =
        LocalFrame::from_points(Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1e-10, 1.0), &cfg()).unwrap();
    assert!(frame.project(Vec3::Y, &cfg()).is_ok());

    let loose = IntersectConfig::new(0.0, 0.0, 1e-8).unwrap();
    assert!(matches!(
        frame.project(Vec3::Y, &loose),
        Err(IntersectError::SingularProjection { .. })
    ));
}

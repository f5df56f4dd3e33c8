use super::*;
use crate::error::ValidationError;
use crate::record::Geometry;
use nalgebra::{vector, Vector2};

fn rect12() -> Ring {
    validate_ring(&Geometry::rectangle(0.0, 0.0, 4.0, 3.0), RingCfg::default()).unwrap()
}

#[test]
fn shoelace_matches_width_times_height() {
    let r = rect12();
    assert!((ring_area(&r) - 12.0).abs() < 1e-12);
    assert!(signed_area(&r) > 0.0);
    let cw: Vec<Vector2<f64>> = r.iter().rev().copied().collect();
    assert!((signed_area(&cw) + 12.0).abs() < 1e-12);
    assert!((ring_area(&cw) - 12.0).abs() < 1e-12);
}

#[test]
fn area_of_rotated_square() {
    // Diamond with diagonals of length 2 -> area 2.
    let g = Geometry::polygon(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)]);
    let r = validate_ring(&g, RingCfg::default()).unwrap();
    assert!((ring_area(&r) - 2.0).abs() < 1e-12);
}

#[test]
fn half_open_edges() {
    let r = rect12();
    let b = Bounds2::from_points(&r).unwrap();
    // left and top edges in
    assert!(contains_point(&r, &b, vector![0.0, 1.0]));
    assert!(contains_point(&r, &b, vector![2.0, 3.0]));
    assert!(contains_point(&r, &b, vector![0.0, 3.0]));
    // right and bottom edges out
    assert!(!contains_point(&r, &b, vector![4.0, 1.0]));
    assert!(!contains_point(&r, &b, vector![2.0, 0.0]));
    assert!(!contains_point(&r, &b, vector![0.0, 0.0]));
    assert!(!contains_point(&r, &b, vector![4.0, 3.0]));
}

#[test]
fn diamond_interior_and_exterior() {
    let g = Geometry::polygon(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)]);
    let r = validate_ring(&g, RingCfg::default()).unwrap();
    let b = Bounds2::from_points(&r).unwrap();
    assert!(contains_point(&r, &b, vector![0.0, 0.0]));
    assert!(contains_point(&r, &b, vector![0.4, 0.4]));
    // inside the bounding box, outside the diamond
    assert!(!contains_point(&r, &b, vector![0.9, 0.9]));
    assert!(!contains_point(&r, &b, vector![-0.6, -0.6]));
}

#[test]
fn closure_uses_tolerance() {
    let nearly = Geometry::polygon(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 3.0),
        (0.0, 3.0),
        (1e-10, -1e-10),
    ]);
    let r = validate_ring(&nearly, RingCfg::default()).unwrap();
    assert_eq!(r[4], r[0]);

    let strict = RingCfg {
        rtol: 0.0,
        atol: 0.0,
    };
    assert!(matches!(
        validate_ring(&nearly, strict),
        Err(ValidationError::NotClosed { .. })
    ));
}

#[test]
fn rejects_malformed_positions() {
    let short = Geometry::Polygon {
        coordinates: vec![vec![
            vec![0.0, 0.0],
            vec![1.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]],
    };
    assert_eq!(
        validate_ring(&short, RingCfg::default()),
        Err(ValidationError::BadPosition { index: 1, len: 1 })
    );

    let nan = Geometry::polygon(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (f64::NAN, 1.0),
        (0.0, 1.0),
        (0.0, 0.0),
    ]);
    assert_eq!(
        validate_ring(&nan, RingCfg::default()),
        Err(ValidationError::NonFinite(2))
    );

    let no_ring = Geometry::Polygon {
        coordinates: vec![],
    };
    assert_eq!(
        validate_ring(&no_ring, RingCfg::default()),
        Err(ValidationError::MissingRing)
    );
}

#[test]
fn extra_position_entries_are_ignored() {
    let g = Geometry::Polygon {
        coordinates: vec![vec![
            vec![0.0, 0.0, 100.0],
            vec![2.0, 0.0, 100.0],
            vec![2.0, 2.0, 100.0],
            vec![0.0, 2.0, 100.0],
            vec![0.0, 0.0, 100.0],
        ]],
    };
    let r = validate_ring(&g, RingCfg::default()).unwrap();
    assert!((ring_area(&r) - 4.0).abs() < 1e-12);
}

#[test]
fn bounds_of_points() {
    assert!(Bounds2::from_points(&[]).is_none());
    let b = Bounds2::from_points(&rect12()).unwrap();
    assert_eq!(b.min, vector![0.0, 0.0]);
    assert_eq!(b.max, vector![4.0, 3.0]);
    assert_eq!(b.width(), 4.0);
    assert_eq!(b.height(), 3.0);
}

#[test]
fn area_is_translation_invariant() {
    let side = 2f64.powi(-17);
    for (x, y) in [(0.0, 0.0), (170.0, 45.0), (-179.5, -89.25)] {
        let g = Geometry::rectangle(x, y, x + side, y + side);
        let r = validate_ring(&g, RingCfg::default()).unwrap();
        assert_eq!(ring_area(&r), side * side);
    }
}

#[test]
fn rejects_overflowing_area() {
    let huge = Geometry::rectangle(0.0, 0.0, 1e200, 1e200);
    assert_eq!(
        validate_ring(&huge, RingCfg::default()),
        Err(ValidationError::NonFiniteArea)
    );
}

#[test]
fn bounds_of_ring_match_bounds_of_points() {
    let r = rect12();
    assert_eq!(Some(Bounds2::from_ring(&r)), Bounds2::from_points(&r));
}

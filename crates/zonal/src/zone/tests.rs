use super::*;
use crate::record::Geometry;
use nalgebra::vector;

/// rect12: 4 x 3 at the origin; rect6: 3 x 2 at (10, 10).
fn rects() -> [Feature; 2] {
    [
        Feature::new(Geometry::rectangle(0.0, 0.0, 4.0, 3.0)),
        Feature::new(Geometry::rectangle(10.0, 10.0, 13.0, 12.0)),
    ]
}

fn probes() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![2.0, 0.01],
        vector![2.0, 2.0],
        vector![10.0, 10.0],
        vector![11.0, 10.01],
        vector![11.0, 11.0],
        vector![-5.0, -5.0],
    ]
}

#[test]
fn rejects_non_polygon() {
    let [mut f, _] = rects();
    f.geometry = Geometry::Point {
        coordinates: vec![0.0, 0.0],
    };
    assert_eq!(
        Zone::new(&f).unwrap_err(),
        ValidationError::NotPolygon("Point")
    );
}

#[test]
fn rejects_non_quadrilateral() {
    let [mut f, _] = rects();
    f.geometry = Geometry::polygon(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (5.0, 0.0),
        (4.0, 3.0),
        (0.0, 3.0),
        (0.0, 0.0),
    ]);
    assert_eq!(Zone::new(&f).unwrap_err(), ValidationError::VertexCount(6));
}

#[test]
fn rejects_open_ring() {
    let [mut f, _] = rects();
    f.geometry = Geometry::polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 2.0)]);
    assert!(matches!(
        Zone::new(&f),
        Err(ValidationError::NotClosed { .. })
    ));
}

#[test]
fn area_of_fixtures() {
    let [a, b] = rects();
    assert_eq!(Zone::new(&a).unwrap().area(), 12.0);
    assert_eq!(Zone::new(&b).unwrap().area(), 6.0);
}

#[test]
fn contains_probe_points() {
    let [a, b] = rects();
    let za = Zone::new(&a).unwrap();
    assert_eq!(
        za.contains(&probes()),
        vec![false, true, true, false, false, false, false]
    );
    let zb = Zone::new(&b).unwrap();
    assert_eq!(
        zb.contains(&probes()),
        vec![false, false, false, false, true, true, false]
    );
    assert!(za.contains(&[]).is_empty());
}

#[test]
fn associate_keeps_inside_samples_in_order() {
    let samples = [
        Sample::new(2.0, 2.0, 1.23),
        Sample::new(2.5, 2.5, 4.56),
        Sample::new(100.0, 100.0, 7.89),
    ];
    let [a, _] = rects();
    let mut zone = Zone::new(&a).unwrap();
    assert!(zone.samples().is_empty());
    assert_eq!(zone.associate(&samples), 2);
    assert_eq!(zone.samples(), &samples[..2]);
}

#[test]
fn avg_samples_no_data_then_mean() {
    let samples = [
        Sample::new(2.0, 2.0, 2.5),
        Sample::new(2.5, 2.5, 7.5),
        Sample::new(100.0, 100.0, -100.0),
    ];
    let [a, _] = rects();
    let mut zone = Zone::new(&a).unwrap();
    assert_eq!(zone.avg_samples(), None);
    zone.associate(&samples);
    assert!((zone.avg_samples().unwrap() - 5.0).abs() < 1e-12);
}

#[test]
fn associate_accumulates_duplicates() {
    let batch = [Sample::new(1.0, 1.0, 1.0), Sample::new(3.0, 1.0, 3.0)];
    let overlap = [Sample::new(3.0, 1.0, 3.0), Sample::new(3.5, 2.5, 8.0)];
    let [a, _] = rects();
    let mut zone = Zone::new(&a).unwrap();
    zone.associate(&batch);
    zone.associate(&overlap);
    assert_eq!(zone.samples().len(), 4);
    assert_eq!(zone.samples()[1], zone.samples()[2]);
    assert!((zone.avg_samples().unwrap() - 15.0 / 4.0).abs() < 1e-12);

    zone.clear_samples();
    assert_eq!(zone.avg_samples(), None);
}

#[test]
fn properties_survive_construction() {
    let mut props = Map::new();
    props.insert("id".into(), Value::from("z-1"));
    let f = Feature::new(Geometry::rectangle(0.0, 0.0, 1.0, 1.0)).with_properties(props);
    let zone = Zone::try_from(&f).unwrap();
    assert_eq!(zone.properties().unwrap()["id"], "z-1");
    assert!(Zone::from_geometry(&f.geometry).unwrap().properties().is_none());
}

#[test]
fn rotated_quadrilateral_zone() {
    // Square of side sqrt(2) rotated 45 degrees, centered at (5, 5).
    let g = Geometry::polygon(&[(6.0, 5.0), (5.0, 6.0), (4.0, 5.0), (5.0, 4.0), (6.0, 5.0)]);
    let zone = Zone::from_geometry(&g).unwrap();
    assert!((zone.area() - 2.0).abs() < 1e-12);
    assert_eq!(
        zone.contains(&[vector![5.0, 5.0], vector![5.9, 5.9], vector![5.2, 4.3]]),
        vec![true, false, true]
    );
}

#[test]
fn grid_tiles_partition_samples() {
    // 3 x 2 grid of unit tiles; every sample in the grid's open interior or on
    // an internal edge lands in exactly one tile.
    let mut zones: Vec<Zone> = (0..3)
        .flat_map(|i| (0..2).map(move |j| (i as f64, j as f64)))
        .map(|(x, y)| Zone::from_geometry(&Geometry::rectangle(x, y, x + 1.0, y + 1.0)).unwrap())
        .collect();
    let samples: Vec<Sample> = [
        (0.5, 0.5),
        (1.0, 0.5),
        (2.0, 1.0),
        (1.0, 1.0),
        (2.9, 1.9),
        (0.1, 1.0),
    ]
    .iter()
    .map(|&(x, y)| Sample::new(x, y, 1.0))
    .collect();
    for z in &mut zones {
        z.associate(&samples);
    }
    let total: usize = zones.iter().map(|z| z.samples().len()).sum();
    assert_eq!(total, samples.len());
}

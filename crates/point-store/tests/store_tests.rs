//! Integration tests for the point store: loading, weighting, and the two
//! range-query strategies.

use std::collections::BTreeSet;
use std::io::Write;

use serde_json::json;

use heat_common::{GeoBounds, GeoPoint, HeatError, PointData};
use point_store::{PointStore, QueryStrategy};

fn sorted_keys(points: &[GeoPoint]) -> BTreeSet<(i64, i64)> {
    points
        .iter()
        .map(|p| ((p.lat * 1e7) as i64, (p.lng * 1e7) as i64))
        .collect()
}

// ============================================================================
// Delimited loading
// ============================================================================

#[test]
fn test_load_delimited_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id1,37.8044,-122.2712").unwrap();
    writeln!(file, "id2,51.5074,-0.1278").unwrap();
    file.flush().unwrap();

    let mut store = PointStore::new();
    let count = store.load_delimited(file.path()).unwrap();
    assert_eq!(count, 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.all_points()[0].lat, 37.8044);
    assert_eq!(store.all_points()[0].weight, None);
}

#[test]
fn test_load_delimited_weighted_forces_uniform_weight() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,10.0,20.0").unwrap();
    writeln!(file, "b,11.0,21.0").unwrap();
    file.flush().unwrap();

    let mut store = PointStore::new();
    store.load_delimited_weighted(file.path(), 0.5).unwrap();
    assert!(store.all_points().iter().all(|p| p.weight == Some(0.5)));
}

#[test]
fn test_malformed_line_aborts_whole_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,10.0,20.0").unwrap();
    writeln!(file, "b,bogus,21.0").unwrap();
    file.flush().unwrap();

    let mut store = PointStore::new();
    let err = store.load_delimited(file.path()).unwrap_err();
    assert!(matches!(err, HeatError::ParseError(_)));
    // Nothing from the file was kept.
    assert!(store.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let mut store = PointStore::new();
    let err = store.load_delimited("/nonexistent/points.csv").unwrap_err();
    assert!(matches!(err, HeatError::Io(_)));
}

// ============================================================================
// Weight evaluation
// ============================================================================

#[test]
fn test_recompute_weights_rescores_payload_points() {
    let mut store = PointStore::with_evaluator(Box::new(|data: &PointData| {
        data.get("visits").and_then(|v| v.as_f64()).unwrap_or(0.0) / 10.0
    }));

    store.add_point(GeoPoint::with_data(1.0, 1.0, json!({"visits": 30.0})));
    store.add_point(GeoPoint::new(2.0, 2.0));
    assert_eq!(store.all_points()[0].weight, Some(3.0));

    store.recompute_weights().unwrap();
    assert_eq!(store.all_points()[0].weight, Some(3.0));
    // Points without payload stay unweighted.
    assert_eq!(store.all_points()[1].weight, None);
}

// ============================================================================
// Range query equivalence
// ============================================================================

#[test]
fn test_serial_and_parallel_agree_on_random_points() {
    let mut store = PointStore::new();
    // Deterministic pseudo-random spread, no RNG needed.
    for i in 0..5000u64 {
        let lat = ((i * 2654435761) % 180_000) as f64 / 1000.0 - 90.0;
        let lng = ((i * 40503) % 360_000) as f64 / 1000.0 - 180.0;
        store.add_point(GeoPoint::new(lat, lng));
    }

    let bounds = GeoBounds::new(45.0, -45.0, -90.0, 90.0);
    let serial = store.range_query(bounds, QueryStrategy::Serial);
    let parallel = store.range_query(bounds, QueryStrategy::Parallel);

    assert!(!serial.is_empty());
    assert_eq!(sorted_keys(&serial), sorted_keys(&parallel));
}

#[test]
fn test_strategies_agree_on_empty_store() {
    let store = PointStore::new();
    let bounds = GeoBounds::new(10.0, -10.0, -10.0, 10.0);
    assert!(store.range_query(bounds, QueryStrategy::Serial).is_empty());
    assert!(store.range_query(bounds, QueryStrategy::Parallel).is_empty());
}

#[test]
fn test_boundary_points_are_inclusive_in_both_strategies() {
    let mut store = PointStore::new();
    store.add_points(vec![
        GeoPoint::new(10.0, 5.0),   // north edge
        GeoPoint::new(-10.0, 5.0),  // south edge
        GeoPoint::new(0.0, -20.0),  // west edge
        GeoPoint::new(0.0, 20.0),   // east edge
        GeoPoint::new(10.0, 20.0),  // corner
        GeoPoint::new(10.001, 0.0), // just outside
    ]);

    let bounds = GeoBounds::new(10.0, -10.0, -20.0, 20.0);
    for strategy in [QueryStrategy::Serial, QueryStrategy::Parallel] {
        let hits = store.range_query(bounds, strategy);
        assert_eq!(hits.len(), 5, "{strategy}");
    }
}

#[test]
fn test_parallel_covers_uneven_tail() {
    // A count chosen to not divide evenly by typical worker counts.
    let mut store = PointStore::new();
    for i in 0..1013 {
        store.add_point(GeoPoint::new(0.0, (i % 100) as f64));
    }
    let bounds = GeoBounds::new(1.0, -1.0, -0.5, 200.0);
    let serial = store.range_query(bounds, QueryStrategy::Serial);
    let parallel = store.range_query(bounds, QueryStrategy::Parallel);
    assert_eq!(serial.len(), parallel.len());
}

// ============================================================================
// Tile and center queries
// ============================================================================

#[test]
fn test_points_for_tile_projects_to_tile_local_pixels() {
    let mut store = PointStore::new();
    // World center lands in tile (512, 512) at zoom 10 (origin pixel 131072).
    store.add_point(GeoPoint::new(0.0, 0.0));

    let points = store
        .points_for_tile(512, 512, 16, 10, QueryStrategy::Serial)
        .unwrap();
    assert_eq!(points.len(), 1);
    // Tile-local coordinates sit inside the tile.
    assert!((0..256).contains(&points[0].x), "x = {}", points[0].x);
    assert!((0..256).contains(&points[0].y), "y = {}", points[0].y);
}

#[test]
fn test_points_for_tile_preserves_data_and_weight() {
    let mut store = PointStore::new();
    let mut p = GeoPoint::with_weight(0.0, 0.0, 1.5);
    p.data = Some(json!({"id": 9}));
    store.add_point(p);

    let points = store
        .points_for_tile(512, 512, 16, 10, QueryStrategy::Serial)
        .unwrap();
    assert_eq!(points[0].weight, Some(1.5));
    assert_eq!(points[0].data, Some(json!({"id": 9})));
}

#[test]
fn test_points_for_tile_includes_bleed_margin() {
    let mut store = PointStore::new();
    store.add_point(GeoPoint::new(0.0, 0.0));

    // The neighboring tile to the west: the world-center point is a few
    // pixels past its right edge, inside the one-dot-width margin.
    let points = store
        .points_for_tile(511, 512, 16, 10, QueryStrategy::Serial)
        .unwrap();
    assert_eq!(points.len(), 1);
    assert!(points[0].x >= 256, "x = {}", points[0].x);

    // Two tiles away it is far outside the margin.
    let points = store
        .points_for_tile(510, 512, 16, 10, QueryStrategy::Serial)
        .unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_points_around_center_world_pixels() {
    let mut store = PointStore::new();
    store.add_point(GeoPoint::new(0.0, 0.0));
    store.add_point(GeoPoint::new(50.0, 100.0));

    let points = store.points_around_center(0.0, 0.0, 10, 10).unwrap();
    assert_eq!(points.len(), 1);
    // World pixel of (0, 0) at zoom 10 is the center of a 262144px world.
    assert!((points[0].x - 131072).abs() <= 1);
    assert!((points[0].y - 131072).abs() <= 1);
}

#[test]
fn test_out_of_range_zoom_propagates() {
    let store = PointStore::new();
    let err = store
        .points_for_tile(0, 0, 16, 40, QueryStrategy::Serial)
        .unwrap_err();
    assert!(matches!(err, HeatError::InvalidArgument(_)));
}

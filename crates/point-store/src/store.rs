//! The point store.
//!
//! Holds the weighted point collection and answers the spatial queries the
//! tile pipeline needs. Mutation is single-writer; callers that need
//! concurrent mutation and query wrap the store in a reader/writer lock.

use std::path::Path;
use std::sync::Mutex;

use rayon::prelude::*;
use tracing::{debug, info};

use heat_common::{GeoBounds, GeoPoint, HeatError, PixelPoint, Result, TILE_SIZE};
use projection::Mercator;

use crate::loader;
use crate::strategy::QueryStrategy;
use crate::weight::WeightEvaluator;

/// Weighted geographic point collection with range queries.
pub struct PointStore {
    points: Vec<GeoPoint>,
    evaluator: Option<Box<dyn WeightEvaluator>>,
    projection: Mercator,
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PointStore {
    /// An empty store with no weight evaluator.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            evaluator: None,
            projection: Mercator::new(),
        }
    }

    /// An empty store that scores points carrying payload data at
    /// insertion time.
    pub fn with_evaluator(evaluator: Box<dyn WeightEvaluator>) -> Self {
        Self {
            points: Vec::new(),
            evaluator: Some(evaluator),
            projection: Mercator::new(),
        }
    }

    /// Insert one point, scoring it when it carries payload data and an
    /// evaluator is configured.
    pub fn add_point(&mut self, mut point: GeoPoint) {
        if let (Some(evaluator), Some(data)) = (&self.evaluator, &point.data) {
            point.weight = Some(evaluator.evaluate(data));
        }
        self.points.push(point);
    }

    /// Insert many points, scoring each as in [`PointStore::add_point`].
    pub fn add_points(&mut self, points: impl IntoIterator<Item = GeoPoint>) {
        for point in points {
            self.add_point(point);
        }
    }

    /// Re-score every stored point that carries payload data.
    ///
    /// Fails with a precondition error when no evaluator is configured.
    pub fn recompute_weights(&mut self) -> Result<()> {
        let evaluator = self.evaluator.as_ref().ok_or_else(|| {
            HeatError::precondition_failed(
                "point weights can't be recomputed because no weight evaluator was configured",
            )
        })?;

        let mut updated = 0usize;
        for point in &mut self.points {
            if let Some(data) = &point.data {
                point.weight = Some(evaluator.evaluate(data));
                updated += 1;
            }
        }
        debug!(updated, total = self.points.len(), "recomputed point weights");
        Ok(())
    }

    /// Load points from a delimited file. Returns the number of points
    /// loaded; a malformed record fails the whole load.
    pub fn load_delimited(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let parsed = loader::parse_delimited(&content)?;
        let count = parsed.len();
        for (lat, lng) in parsed {
            self.points.push(GeoPoint::new(lat, lng));
        }
        info!(path = %path.display(), count, "loaded points");
        Ok(count)
    }

    /// Load points from a delimited file, forcing a uniform weight onto
    /// every loaded point.
    pub fn load_delimited_weighted(&mut self, path: impl AsRef<Path>, weight: f64) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let parsed = loader::parse_delimited(&content)?;
        let count = parsed.len();
        for (lat, lng) in parsed {
            self.points.push(GeoPoint::with_weight(lat, lng, weight));
        }
        info!(path = %path.display(), count, weight, "loaded weighted points");
        Ok(count)
    }

    /// Every point inside the inclusive rectangle.
    pub fn range_query(&self, bounds: GeoBounds, strategy: QueryStrategy) -> Vec<GeoPoint> {
        match strategy {
            QueryStrategy::Serial => self.range_query_serial(bounds),
            QueryStrategy::Parallel => self.range_query_parallel(bounds),
        }
    }

    fn range_query_serial(&self, bounds: GeoBounds) -> Vec<GeoPoint> {
        self.points
            .iter()
            .filter(|p| bounds.contains(p.lat, p.lng))
            .cloned()
            .collect()
    }

    /// Partitioned scan: contiguous slices across the thread pool, each
    /// worker filtering into a private list, merged under one lock.
    fn range_query_parallel(&self, bounds: GeoBounds) -> Vec<GeoPoint> {
        if self.points.is_empty() {
            return Vec::new();
        }

        let workers = rayon::current_num_threads().max(1);
        let chunk = (self.points.len() / workers).max(1);

        let merged = Mutex::new(Vec::new());
        self.points.par_chunks(chunk).for_each(|slice| {
            let local: Vec<GeoPoint> = slice
                .iter()
                .filter(|p| bounds.contains(p.lat, p.lng))
                .cloned()
                .collect();
            if !local.is_empty() {
                merged
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .extend(local);
            }
        });
        merged.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Every point whose stamp could touch the tile, projected into
    /// tile-local pixel coordinates.
    ///
    /// The tile's pixel rectangle grows by one dot width on every side to
    /// catch points whose stamp bleeds in from outside, converts back to a
    /// lat/lng rectangle, and runs [`PointStore::range_query`]. Matches keep
    /// their payload and weight through the projection.
    pub fn points_for_tile(
        &self,
        tile_x: i64,
        tile_y: i64,
        dot_width: u32,
        zoom: u8,
        strategy: QueryStrategy,
    ) -> Result<Vec<PixelPoint>> {
        let (origin_x, origin_y) = self.projection.tile_origin_pixel(tile_x, tile_y);
        let pad = dot_width as i64;
        let size = TILE_SIZE as i64;

        let top_left = (origin_x - pad, origin_y - pad);
        let bottom_right = (origin_x + size + pad, origin_y + size + pad);

        let (north, west) =
            self.projection
                .pixel_to_lat_lng(top_left.0 as f64, top_left.1 as f64, zoom)?;
        let (south, east) =
            self.projection
                .pixel_to_lat_lng(bottom_right.0 as f64, bottom_right.1 as f64, zoom)?;
        let bounds = GeoBounds::from_corners((north, west), (south, east));

        let matches = self.range_query(bounds, strategy);
        debug!(
            tile_x,
            tile_y,
            zoom,
            matches = matches.len(),
            strategy = %strategy,
            "tile range query"
        );

        let mut out = Vec::with_capacity(matches.len());
        for point in matches {
            let (px, py) = self
                .projection
                .lat_lng_to_pixel_rounded(point.lat, point.lng, zoom)?;
            out.push(PixelPoint::carrying(
                px - origin_x,
                py - origin_y,
                point.data,
                point.weight,
            ));
        }
        Ok(out)
    }

    /// Every point inside a square centered on a geographic point,
    /// projected to world-pixel coordinates at the zoom.
    pub fn points_around_center(
        &self,
        lat: f64,
        lng: f64,
        radius_pixels: i64,
        zoom: u8,
    ) -> Result<Vec<PixelPoint>> {
        let (cx, cy) = self.projection.lat_lng_to_pixel_rounded(lat, lng, zoom)?;

        let (north, west) = self.projection.pixel_to_lat_lng(
            (cx - radius_pixels) as f64,
            (cy - radius_pixels) as f64,
            zoom,
        )?;
        let (south, east) = self.projection.pixel_to_lat_lng(
            (cx + radius_pixels) as f64,
            (cy + radius_pixels) as f64,
            zoom,
        )?;
        let bounds = GeoBounds::from_corners((north, west), (south, east));

        let mut out = Vec::new();
        for point in self.range_query(bounds, QueryStrategy::Serial) {
            let (px, py) = self
                .projection
                .lat_lng_to_pixel_rounded(point.lat, point.lng, zoom)?;
            out.push(PixelPoint::carrying(px, py, point.data, point.weight));
        }
        Ok(out)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove every stored point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Every stored point, in insertion order.
    pub fn all_points(&self) -> &[GeoPoint] {
        &self.points
    }
}

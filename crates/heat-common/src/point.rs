//! Geographic and pixel-space point types.
//!
//! A point optionally carries an opaque payload and a weight. The weight is
//! attached by a scoring function when the payload is present; a point with
//! no weight renders at full intensity, while a weight of exactly zero
//! suppresses the point entirely. The two cases are distinct and both must
//! survive every coordinate transform.

use serde::{Deserialize, Serialize};

/// Opaque payload attached to a point and fed to a weight evaluator.
pub type PointData = serde_json::Value;

/// A geographic point with optional payload and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Payload consumed by a weight evaluator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PointData>,
    /// Rendering weight. `None` means full intensity; `Some(0.0)` means
    /// the point is suppressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl GeoPoint {
    /// Create an unweighted point with no payload.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            data: None,
            weight: None,
        }
    }

    /// Create a point with an explicit weight.
    pub fn with_weight(lat: f64, lng: f64, weight: f64) -> Self {
        Self {
            lat,
            lng,
            data: None,
            weight: Some(weight),
        }
    }

    /// Create a point carrying payload data for later weight evaluation.
    pub fn with_data(lat: f64, lng: f64, data: PointData) -> Self {
        Self {
            lat,
            lng,
            data: Some(data),
            weight: None,
        }
    }
}

/// A point projected into pixel space at a specific zoom.
///
/// Carries the source point's payload and weight through the transform
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Pixel column. Tile-local coordinates may be negative when the point
    /// sits in a neighboring tile but its stamp bleeds into this one.
    pub x: i64,
    /// Pixel row.
    pub y: i64,
    /// Payload carried over from the source point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PointData>,
    /// Weight carried over from the source point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl PixelPoint {
    /// Create a bare pixel point with no payload or weight.
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            data: None,
            weight: None,
        }
    }

    /// Pair a pixel position with the payload and weight of a source point.
    pub fn carrying(x: i64, y: i64, data: Option<PointData>, weight: Option<f64>) -> Self {
        Self { x, y, data, weight }
    }

    /// True when the point scored so low it must not show up at all.
    pub fn is_suppressed(&self) -> bool {
        self.weight == Some(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geo_point_constructors() {
        let p = GeoPoint::new(37.8, -122.4);
        assert!(p.data.is_none());
        assert!(p.weight.is_none());

        let p = GeoPoint::with_weight(37.8, -122.4, 0.5);
        assert_eq!(p.weight, Some(0.5));

        let p = GeoPoint::with_data(37.8, -122.4, json!({"visits": 12}));
        assert!(p.data.is_some());
        assert!(p.weight.is_none());
    }

    #[test]
    fn test_suppression_only_for_exact_zero() {
        assert!(PixelPoint::carrying(0, 0, None, Some(0.0)).is_suppressed());
        assert!(!PixelPoint::carrying(0, 0, None, Some(0.001)).is_suppressed());
        assert!(!PixelPoint::new(0, 0).is_suppressed());
    }

    #[test]
    fn test_carrying_preserves_payload() {
        let data = json!({"id": 7});
        let p = PixelPoint::carrying(10, 20, Some(data.clone()), Some(1.5));
        assert_eq!(p.data, Some(data));
        assert_eq!(p.weight, Some(1.5));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = GeoPoint::with_weight(12.5, -3.25, 2.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

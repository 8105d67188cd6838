//! Coordinate value types for the map viewport and record locations.
//!
//! The map layer speaks GeoJSON, so each type converts to and from the
//! GeoJSON shape a map renderer consumes: a `[lon, lat]` position for a
//! [`Location`] and a `[west, south, east, north]` bounding box for a
//! [`Region`].

use serde::{Deserialize, Serialize};

/// A point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// Extent of a region around its center, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Map viewport: a center location plus a span.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub location: Location,
    pub span: Span,
}

/// GeoJSON position, `[longitude, latitude]`.
pub type Position = [f64; 2];

/// GeoJSON bounding box, `[west, south, east, north]`.
pub type BoundingBox = [f64; 4];

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Span {
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

impl Region {
    /// Initial viewport of the app, centered on Wilmington, NC.
    pub const WILMINGTON: Region = Region::new(
        Location::new(34.125727, -77.874710),
        Span::new(8.0, 8.0),
    );

    pub const fn new(location: Location, span: Span) -> Self {
        Self { location, span }
    }

    /// Whether `point` lies inside the viewport. Edges are inclusive.
    pub fn contains(&self, point: Location) -> bool {
        let [west, south, east, north] = BoundingBox::from(*self);
        (south..=north).contains(&point.latitude) && (west..=east).contains(&point.longitude)
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        [location.longitude, location.latitude]
    }
}

impl From<Position> for Location {
    fn from([longitude, latitude]: Position) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Region> for BoundingBox {
    fn from(region: Region) -> Self {
        let half_lat = region.span.latitude_delta / 2.0;
        let half_lon = region.span.longitude_delta / 2.0;
        [
            region.location.longitude - half_lon,
            region.location.latitude - half_lat,
            region.location.longitude + half_lon,
            region.location.latitude + half_lat,
        ]
    }
}

impl From<BoundingBox> for Region {
    fn from([west, south, east, north]: BoundingBox) -> Self {
        Self {
            location: Location::new((south + north) / 2.0, (west + east) / 2.0),
            span: Span::new(north - south, east - west),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_longitude_first() {
        let position: Position = Location::new(34.0, -78.0).into();
        assert_eq!(position, [-78.0, 34.0]);
        assert_eq!(Location::from(position), Location::new(34.0, -78.0));
    }

    #[test]
    fn region_bbox_round_trip() {
        let region = Region::new(Location::new(34.0, -78.0), Span::new(8.0, 4.0));
        let bbox = BoundingBox::from(region);
        assert_eq!(bbox, [-80.0, 30.0, -76.0, 38.0]);
        assert_eq!(Region::from(bbox), region);
    }

    #[test]
    fn contains_is_inclusive() {
        let region = Region::new(Location::new(34.0, -78.0), Span::new(8.0, 4.0));
        assert!(region.contains(Location::new(34.0, -78.0)));
        assert!(region.contains(Location::new(38.0, -80.0)));
        assert!(!region.contains(Location::new(38.5, -78.0)));
        assert!(!region.contains(Location::new(34.0, -75.5)));
    }

    #[test]
    fn wilmington_covers_seed_area() {
        assert!(Region::WILMINGTON.contains(Location::new(33.2, -77.1)));
        assert!(!Region::WILMINGTON.contains(Location::new(40.7, -74.0)));
    }

    #[test]
    fn location_serializes_with_short_keys() {
        let json = serde_json::to_value(Location::new(1.5, -2.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lon": -2.5 }));
    }
}

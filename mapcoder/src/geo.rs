//! Coordinates, rectangles and great-circle distance.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north, `[-90, 90]`
//! - Longitude: degrees east, normalized into `[-180, 180)`
//! - Distance: meters on a spherical earth

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Wrap a longitude into `[-180, 180)`.
///
/// # Examples
///
/// ```
/// use mapcoder::geo::normalize_lon;
///
/// assert_eq!(normalize_lon(181.0), -179.0);
/// assert_eq!(normalize_lon(-181.0), 179.0);
/// assert_eq!(normalize_lon(180.0), -180.0);
/// ```
pub fn normalize_lon(lon_deg: f64) -> f64 {
    if (-180.0..180.0).contains(&lon_deg) {
        return lon_deg;
    }
    let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid may round up to exactly 360 for values just below -180
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// A WGS84 coordinate with its longitude already normalized.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Point {
    /// Create a point. Latitude is clamped to `[-90, 90]`, longitude wrapped.
    ///
    /// Range checking against user input happens in [`crate::params`];
    /// this constructor only keeps the value in range.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat_deg: lat_deg.clamp(-90.0, 90.0),
            lon_deg: normalize_lon(lon_deg),
        }
    }

    /// Great-circle distance to `other` in meters (haversine).
    pub fn distance_meters(&self, other: &Point) -> f64 {
        let lat1 = self.lat_deg * DEG_TO_RAD;
        let lat2 = other.lat_deg * DEG_TO_RAD;
        let dlat = lat2 - lat1;
        let dlon = (other.lon_deg - self.lon_deg) * DEG_TO_RAD;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }
}

/// A bounding box as returned by decode-to-rectangle.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub south_west: Point,
    pub north_east: Point,
    /// Centroid reported by the decoder, if it knows better than the midpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Point>,
}

impl Rectangle {
    pub fn new(south_west: Point, north_east: Point) -> Self {
        Self {
            south_west,
            north_east,
            centroid: None,
        }
    }

    /// Attach a decoder-provided centroid.
    pub fn with_centroid(mut self, centroid: Point) -> Self {
        self.centroid = Some(centroid);
        self
    }

    /// Whether the rectangle straddles the ±180 meridian.
    ///
    /// Longitudes are normalized, so a box crossing the antimeridian has its
    /// western edge east of its eastern edge.
    pub fn crosses_antimeridian(&self) -> bool {
        self.south_west.lon_deg > self.north_east.lon_deg
    }

    /// East-west extent in degrees, measured eastward from the western edge.
    pub fn lon_span(&self) -> f64 {
        let span = self.north_east.lon_deg - self.south_west.lon_deg;
        if self.crosses_antimeridian() {
            span + 360.0
        } else {
            span
        }
    }

    /// The decoder centroid, else the midpoint of the corners.
    pub fn center(&self) -> Point {
        self.centroid.unwrap_or_else(|| {
            Point::new(
                (self.south_west.lat_deg + self.north_east.lat_deg) / 2.0,
                self.south_west.lon_deg + self.lon_span() / 2.0,
            )
        })
    }

    /// Whether `point` lies inside the rectangle (edges included).
    pub fn contains(&self, point: &Point) -> bool {
        let lat_inside = point.lat_deg >= self.south_west.lat_deg
            && point.lat_deg <= self.north_east.lat_deg;
        let lon_inside = if self.crosses_antimeridian() {
            point.lon_deg >= self.south_west.lon_deg || point.lon_deg <= self.north_east.lon_deg
        } else {
            point.lon_deg >= self.south_west.lon_deg && point.lon_deg <= self.north_east.lon_deg
        };
        lat_inside && lon_inside
    }

    /// Corners are finite and ordered south to north.
    ///
    /// Any longitude order is accepted: a western edge east of the eastern
    /// edge is a box across the antimeridian.
    pub fn is_well_formed(&self) -> bool {
        let corners = [self.south_west, self.north_east];
        corners
            .iter()
            .all(|p| p.lat_deg.is_finite() && p.lon_deg.is_finite())
            && self.south_west.lat_deg <= self.north_east.lat_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lon() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(179.5), 179.5);
        assert_eq!(normalize_lon(181.0), -179.0);
        assert_eq!(normalize_lon(-181.0), 179.0);
        assert_eq!(normalize_lon(-180.0), -180.0);
        assert_eq!(normalize_lon(540.0), -180.0);
        assert!((normalize_lon(725.25) - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_lon_always_in_range() {
        for i in -2000..2000 {
            let lon = normalize_lon(i as f64 * 0.37);
            assert!((-180.0..180.0).contains(&lon), "{} -> {}", i, lon);
        }
    }

    #[test]
    fn test_point_new_normalizes() {
        let p = Point::new(52.0, 365.0);
        assert_eq!(p.lat_deg, 52.0);
        assert_eq!(p.lon_deg, 5.0);
    }

    #[test]
    fn test_distance_zero() {
        let p = Point::new(50.141706, 6.135864);
        assert_eq!(p.distance_meters(&p), 0.0);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let d = a.distance_meters(&b);
        // ~111.19 km per degree on a 6371 km sphere
        assert!((d - 111_194.9).abs() < 1.0, "distance was {}", d);
    }

    #[test]
    fn test_distance_across_antimeridian() {
        let a = Point::new(0.0, 179.9);
        let b = Point::new(0.0, -179.9);
        let d = a.distance_meters(&b);
        assert!(d < 23_000.0, "distance was {}", d);
    }

    #[test]
    fn test_rectangle_center_midpoint() {
        let rect = Rectangle::new(Point::new(50.0, 6.0), Point::new(51.0, 7.0));
        let c = rect.center();
        assert_eq!(c.lat_deg, 50.5);
        assert_eq!(c.lon_deg, 6.5);
    }

    #[test]
    fn test_rectangle_center_prefers_centroid() {
        let rect = Rectangle::new(Point::new(50.0, 6.0), Point::new(51.0, 7.0))
            .with_centroid(Point::new(50.2, 6.9));
        assert_eq!(rect.center(), Point::new(50.2, 6.9));
    }

    #[test]
    fn test_rectangle_contains_and_well_formed() {
        let rect = Rectangle::new(Point::new(50.0, 6.0), Point::new(51.0, 7.0));
        assert!(rect.is_well_formed());
        assert!(rect.contains(&Point::new(50.5, 6.5)));
        assert!(!rect.contains(&Point::new(49.9, 6.5)));

        let inverted = Rectangle::new(Point::new(51.0, 7.0), Point::new(50.0, 6.0));
        assert!(!inverted.is_well_formed());

        let not_finite = Rectangle::new(Point::new(50.0, f64::NAN), Point::new(51.0, 7.0));
        assert!(!not_finite.is_well_formed());
    }

    #[test]
    fn test_rectangle_across_antimeridian() {
        let rect = Rectangle::new(Point::new(-16.6, 179.9), Point::new(-16.4, -179.9));
        assert!(rect.crosses_antimeridian());
        assert!(rect.is_well_formed());
        assert!((rect.lon_span() - 0.2).abs() < 1e-9);

        assert!(rect.contains(&Point::new(-16.5, 179.95)));
        assert!(rect.contains(&Point::new(-16.5, -179.95)));
        assert!(rect.contains(&Point::new(-16.5, -180.0)));
        assert!(!rect.contains(&Point::new(-16.5, 0.0)));
        assert!(!rect.contains(&Point::new(-16.5, 179.8)));

        let c = rect.center();
        assert!((c.lat_deg + 16.5).abs() < 1e-9);
        assert!(c.lon_deg == -180.0 || (c.lon_deg.abs() - 180.0).abs() < 1e-9, "{}", c.lon_deg);
    }

    #[test]
    fn test_rectangle_center_wraps_east_of_seam() {
        let rect = Rectangle::new(Point::new(0.0, 179.0), Point::new(1.0, -177.0));
        let c = rect.center();
        assert!((c.lon_deg + 179.0).abs() < 1e-9, "{}", c.lon_deg);
    }
}

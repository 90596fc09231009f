use chrono::{DateTime, Utc};
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A position in decimal degrees, latitude in [-90, 90] and longitude
/// in [-180, 180].
///
/// Membership tests against a route polyline compare coordinates after
/// rounding both axes to 5 decimal places, see [`Coordinate::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both axes rounded to 5 decimal places (~1 m resolution), the
    /// precision of the encoded polyline format.
    pub fn rounded(self) -> Self {
        Self {
            latitude: round5(self.latitude),
            longitude: round5(self.longitude),
        }
    }

    /// Reads a provider fix, substituting 0.0 for absent axes.
    ///
    /// The substitution is a deliberate fallback so distance math stays
    /// total; callers should check fix availability first since (0, 0)
    /// stands in for "unknown", not for a real position.
    pub fn from_fix(fix: &LocationFix) -> Self {
        Self {
            latitude: fix.latitude.unwrap_or(0.0),
            longitude: fix.longitude.unwrap_or(0.0),
        }
    }
}

fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

/// One reading from an external location provider. Either axis may be
/// missing while the provider is still acquiring a fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }
}

use std::f64::consts::PI;

use crate::coordinate::{Coordinate, LocationFix};

/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Great-circle distance between two coordinates in km (Haversine).
///
/// Symmetric, returns 0.0 for identical inputs. Full floating-point
/// precision; use [`format_km`] for the 2-decimal display form.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = degrees_to_radians(a.latitude - b.latitude);
    let d_lon = degrees_to_radians(a.longitude - b.longitude);

    let h = (d_lat / 2.0).sin().powi(2)
        + degrees_to_radians(b.latitude).cos()
            * degrees_to_radians(a.latitude).cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from a coordinate to a provider fix, absent axes read as 0.0.
pub fn distance_to_fix(a: Coordinate, fix: &LocationFix) -> f64 {
    distance_km(a, Coordinate::from_fix(fix))
}

/// Display form of a distance, exactly two decimal places.
pub fn format_km(km: f64) -> String {
    format!("{km:.2}")
}

/// Distance rounded to two decimals, the precision route comparisons
/// operate at.
pub(crate) fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCRA: Coordinate = Coordinate {
        latitude: 5.6037,
        longitude: -0.1870,
    };
    const KUMASI: Coordinate = Coordinate {
        latitude: 6.6885,
        longitude: -1.6244,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(ACCRA, ACCRA), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_km(ACCRA, KUMASI), distance_km(KUMASI, ACCRA));
    }

    #[test]
    fn accra_to_kumasi_is_about_200_km() {
        let d = distance_km(ACCRA, KUMASI);
        assert!((d - 200.0).abs() < 50.0, "got {d} km");
    }

    #[test]
    fn degree_conversions() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-12);
        assert!((degrees_to_radians(-90.0) + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn display_form_has_two_decimals() {
        assert_eq!(format_km(199.84712), "199.85");
        assert_eq!(format_km(0.0), "0.00");
    }

    #[test]
    fn fix_distance_falls_back_to_origin() {
        let fix = LocationFix::new(None, None, chrono::Utc::now());
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(distance_to_fix(origin, &fix), 0.0);
    }
}

//! Spherical geometry helpers for radius queries
//!
//! Radius queries treat the Earth as a sphere: a distance in miles is
//! converted to an angular radius and containment is a great-circle
//! central-angle test, which stays correct near the poles and across the
//! antimeridian where flat Euclidean distance does not.

/// Earth radius in miles, matching the constant used for radius queries
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Convert a distance in miles to an angular radius in radians
pub fn miles_to_angular(distance_miles: f64) -> f64 {
    distance_miles / EARTH_RADIUS_MILES
}

/// Great-circle central angle in radians between two (lat, lng) points in degrees
pub fn central_angle(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let phi_a = lat_a.to_radians();
    let phi_b = lat_b.to_radians();
    let delta_lng = (lng_b - lng_a).to_radians();

    let cos_angle = phi_a.sin() * phi_b.sin() + phi_a.cos() * phi_b.cos() * delta_lng.cos();
    // Guard against floating point drift outside acos' domain
    cos_angle.clamp(-1.0, 1.0).acos()
}

/// Whether point `b` lies within the spherical cap of `angular_radius`
/// radians centered on point `a`
pub fn within_radius(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64, angular_radius: f64) -> bool {
    central_angle(lat_a, lng_a, lat_b, lng_b) <= angular_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    // Beverly Hills 90210
    const BH: (f64, f64) = (34.0901, -118.4065);
    // Downtown Los Angeles, roughly 12 miles from Beverly Hills
    const LA: (f64, f64) = (34.0522, -118.2437);
    // New York City, roughly 2,450 miles from Beverly Hills
    const NYC: (f64, f64) = (40.7128, -74.0060);

    #[test]
    fn test_zero_distance() {
        assert_eq!(central_angle(BH.0, BH.1, BH.0, BH.1), 0.0);
    }

    #[test]
    fn test_center_is_included() {
        let radius = miles_to_angular(10.0);
        assert!(within_radius(BH.0, BH.1, BH.0, BH.1, radius));
    }

    #[test]
    fn test_nearby_point_within_25_miles() {
        let radius = miles_to_angular(25.0);
        assert!(within_radius(BH.0, BH.1, LA.0, LA.1, radius));
    }

    #[test]
    fn test_distant_point_excluded_at_500_miles() {
        let radius = miles_to_angular(500.0);
        assert!(!within_radius(BH.0, BH.1, NYC.0, NYC.1, radius));
    }

    #[test]
    fn test_known_distance_la_to_nyc() {
        let miles = central_angle(LA.0, LA.1, NYC.0, NYC.1) * EARTH_RADIUS_MILES;
        assert!((miles - 2445.0).abs() < 30.0, "got {miles}");
    }

    #[test]
    fn test_antimeridian_wraparound() {
        // Two points straddling the 180th meridian are ~83 miles apart,
        // not most of the way around the globe
        let miles = central_angle(0.0, 179.4, 0.0, -179.4) * EARTH_RADIUS_MILES;
        assert!(miles < 100.0, "got {miles}");
    }

    #[test]
    fn test_near_pole() {
        // Longitude degenerates at the poles; two points at 89.9N with
        // opposite longitudes are only a few miles apart
        let miles = central_angle(89.9, 0.0, 89.9, 180.0) * EARTH_RADIUS_MILES;
        assert!(miles < 20.0, "got {miles}");
    }

    #[test]
    fn test_miles_to_angular() {
        assert!((miles_to_angular(3963.0) - 1.0).abs() < f64::EPSILON);
        assert!((miles_to_angular(10.0) - 10.0 / 3963.0).abs() < f64::EPSILON);
    }
}

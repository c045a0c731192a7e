//! Circular geofence evaluation.
//!
//! This crate provides the pure math behind geofence-triggered
//! reminders: great-circle distance between two coordinates and a
//! containment test against a trigger radius. It holds no state and
//! performs no I/O; callers fetch reminder coordinates elsewhere and
//! pass everything in by value.
//!
//! # Example
//!
//! ```rust
//! use geofence::{haversine_distance, is_inside};
//!
//! // Times Square to the Empire State Building is under a kilometer.
//! let d = haversine_distance(40.7580, -73.9855, 40.7484, -73.9857);
//! assert!(d < 1_100.0);
//! assert!(is_inside(40.7580, -73.9855, 40.7484, -73.9857, 1_100.0));
//! ```

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates given in
/// decimal degrees, using the haversine formula.
///
/// Total over all real inputs: degenerate or out-of-range coordinates
/// still produce a numeric result, they are not rejected here.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Whether a probe coordinate lies within a circular geofence.
///
/// The boundary is inclusive: a probe exactly `radius` meters from the
/// center counts as inside.
pub fn is_inside(
    probe_lat: f64,
    probe_lon: f64,
    center_lat: f64,
    center_lon: f64,
    radius: f64,
) -> bool {
    haversine_distance(probe_lat, probe_lon, center_lat, center_lon) <= radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_distance(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
        assert_eq!(haversine_distance(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(haversine_distance(-33.8688, 151.2093, -33.8688, 151.2093), 0.0);
    }

    #[test]
    fn known_distances() {
        // New York to Los Angeles, roughly 3,936 km.
        let nyc_la = haversine_distance(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((nyc_la - 3_935_746.0).abs() < 5_000.0, "got {nyc_la}");

        // London to Paris, roughly 344 km.
        let lon_par = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((lon_par - 343_556.0).abs() < 2_000.0, "got {lon_par}");

        // One degree of latitude at the equator, roughly 111.2 km.
        let one_deg = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((one_deg - 111_195.0).abs() < 100.0, "got {one_deg}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_distance(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((d - half_circumference).abs() < 1.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let center = (40.7128, -74.0060);
        let probe = (40.7200, -74.0060);
        let d = haversine_distance(probe.0, probe.1, center.0, center.1);

        // Exactly at the boundary counts as inside.
        assert!(is_inside(probe.0, probe.1, center.0, center.1, d));
        assert!(!is_inside(probe.0, probe.1, center.0, center.1, d - 0.001));
    }

    #[test]
    fn inside_and_outside() {
        // ~500 m fence around lower Manhattan.
        assert!(is_inside(40.7130, -74.0062, 40.7128, -74.0060, 500.0));
        // Los Angeles is well outside it.
        assert!(!is_inside(34.0522, -118.2437, 40.7128, -74.0060, 500.0));
    }

    proptest! {
        /// Inside iff distance <= radius: no gap, no overlap.
        #[test]
        fn prop_containment_partitions_on_radius(
            probe_lat in -90.0f64..=90.0,
            probe_lon in -180.0f64..=180.0,
            center_lat in -90.0f64..=90.0,
            center_lon in -180.0f64..=180.0,
            radius in 1.0f64..=100_000.0,
        ) {
            let d = haversine_distance(probe_lat, probe_lon, center_lat, center_lon);
            let inside = is_inside(probe_lat, probe_lon, center_lat, center_lon, radius);
            prop_assert_eq!(inside, d <= radius);
        }

        /// Distance is symmetric in its endpoints.
        #[test]
        fn prop_distance_symmetric(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let ab = haversine_distance(lat1, lon1, lat2, lon2);
            let ba = haversine_distance(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// Distance from any point to itself is zero.
        #[test]
        fn prop_distance_reflexive(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
        ) {
            prop_assert_eq!(haversine_distance(lat, lon, lat, lon), 0.0);
        }

        /// Distance is never negative and never exceeds half the
        /// Earth's circumference for in-range coordinates.
        #[test]
        fn prop_distance_bounded(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let d = haversine_distance(lat1, lon1, lat2, lon2);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_METERS + 1.0);
        }
    }
}

//! Geodesic step offsets
//!
//! Small-scale flat-step approximation for advancing a coordinate by a few
//! meters along a heading. Latitude uses a fixed meters-per-degree constant;
//! longitude scales with the cosine of the latitude so east-west steps
//! narrow toward the poles.

/// Meters per degree of latitude (WGS-84 mean), applied uniformly.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

/// Equatorial circumference in meters.
pub const EQUATORIAL_CIRCUMFERENCE_METERS: f64 = 40_075_000.0;

/// Latitude/longitude delta for moving `meters` along `heading_rad` starting
/// from latitude `lat_deg`. Negative `meters` steps backward.
///
/// Deterministic and side-effect free. At the exact poles
/// (`cos(lat) == 0`) the longitude divisor collapses and the returned
/// longitude delta is non-finite; callers operating near ±90° must guard.
pub fn offset(lat_deg: f64, meters: f64, heading_rad: f64) -> (f64, f64) {
    let d_lat = (meters / METERS_PER_DEGREE_LATITUDE) * heading_rad.cos();
    let meters_per_degree_longitude =
        EQUATORIAL_CIRCUMFERENCE_METERS * lat_deg.to_radians().cos() / 360.0;
    let d_lng = (meters / meters_per_degree_longitude) * heading_rad.sin();
    (d_lat, d_lng)
}

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Vehicle pose: position plus compass heading.
///
/// Heading is in whole degrees, clockwise, and always normalized to
/// `[0, 360)`. Construction normalizes so a `Pose` never carries a
/// negative or out-of-range heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: LatLng,
    pub heading_degrees: i32,
}

impl Pose {
    pub fn new(position: LatLng, heading_degrees: i32) -> Self {
        Pose {
            position,
            heading_degrees: normalize_heading(heading_degrees),
        }
    }
}

/// Wrap a heading in degrees into `[0, 360)`.
pub fn normalize_heading(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

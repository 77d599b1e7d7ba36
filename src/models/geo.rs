use serde::{Deserialize, Serialize};

/// A single clicked location on the map.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// An intermediate stop the drawn route must pass through.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Waypoint {
    pub location: GeoPoint,
    pub stopover: bool,
}

impl Waypoint {
    /// A mandatory stop at `location` (stopover waypoints force the drawn
    /// route to actually halt there instead of just passing nearby).
    pub fn stop_at(location: GeoPoint) -> Self {
        Self {
            location,
            stopover: true,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{GeoPoint, Waypoint};

/// Request handed to the map provider's directions capability.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DirectionsRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub waypoints: Vec<Waypoint>,
    pub travel_mode: String,
}

impl DirectionsRequest {
    /// Travel mode is fixed: the backend optimizes truck routes.
    pub fn driving(origin: GeoPoint, destination: GeoPoint, waypoints: Vec<Waypoint>) -> Self {
        Self {
            origin,
            destination,
            waypoints,
            travel_mode: "DRIVING".to_string(),
        }
    }
}

/// Raw answer of the directions capability: a status plus the drawable
/// payload. The payload stays opaque to Rust and is handed back to the map
/// glue for rendering.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DirectionsResult {
    pub status: String,
    #[serde(default)]
    pub route: Option<serde_json::Value>,
}

impl DirectionsResult {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// The drawable path currently shown on the map, as the JSON the glue
/// consumes. Replaced wholesale on each successful request, never patched.
#[derive(Clone, PartialEq, Debug)]
pub struct DisplayedRoute(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driving_request_shape() {
        let origin = GeoPoint { lat: 1.0, lng: 2.0 };
        let destination = GeoPoint { lat: 3.0, lng: 4.0 };
        let request = DirectionsRequest::driving(origin, destination, vec![]);

        assert_eq!(request.travel_mode, "DRIVING");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["origin"]["lat"], 1.0);
        assert_eq!(json["destination"]["lng"], 4.0);
    }

    #[test]
    fn only_ok_status_counts_as_success() {
        let ok: DirectionsResult =
            serde_json::from_str(r#"{"status": "OK", "route": {}}"#).unwrap();
        assert!(ok.is_ok());

        let failed: DirectionsResult =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert!(!failed.is_ok());
        assert!(failed.route.is_none());
    }
}

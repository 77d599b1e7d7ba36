use serde::{Deserialize, Serialize};

use super::{GeoPoint, Waypoint};

/// A point along the route suggested by the backend. `fuel_to_buy > 0`
/// marks it as a mandatory refueling stop.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub fuel_to_buy: Option<f64>,
}

impl RoutePoint {
    pub fn is_fuel_stop(&self) -> bool {
        self.fuel_to_buy.map(|fuel| fuel > 0.0).unwrap_or(false)
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Response of the routing backend, kept as received for display.
///
/// The backend is free to omit `routes` (nothing to draw then) and
/// `cum_cost` (no cost line shown); a body that does not decode at all is
/// reported as a malformed-response error by the API client.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RouteResponse {
    #[serde(default)]
    pub routes: Option<Vec<RoutePoint>>,
    #[serde(default)]
    pub cum_cost: Option<f64>,
}

impl RouteResponse {
    /// Refueling stops in travel order, ready for the directions request.
    /// `None` when the backend sent no `routes` at all.
    pub fn waypoints(&self) -> Option<Vec<Waypoint>> {
        self.routes.as_ref().map(|points| {
            points
                .iter()
                .filter(|point| point.is_fuel_stop())
                .map(|point| Waypoint::stop_at(point.location()))
                .collect()
        })
    }

    /// Total trip cost rounded to hundredths, or `None` when the backend
    /// did not report one.
    pub fn display_cost(&self) -> Option<f64> {
        self.cum_cost.map(|cost| (cost * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUEL_ROUTE_JSON: &str = r#"{
        "routes": [
            {"lat": 1, "lng": 2, "fuel_to_buy": 5},
            {"lat": 3, "lng": 4, "fuel_to_buy": 0},
            {"lat": 5, "lng": 6, "fuel_to_buy": 2}
        ],
        "cum_cost": 12.345
    }"#;

    #[test]
    fn derives_fuel_stops_in_travel_order() {
        let response: RouteResponse = serde_json::from_str(FUEL_ROUTE_JSON).unwrap();
        let waypoints = response.waypoints().unwrap();

        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[0].location, GeoPoint { lat: 1.0, lng: 2.0 });
        assert_eq!(waypoints[1].location, GeoPoint { lat: 5.0, lng: 6.0 });
        assert!(waypoints.iter().all(|w| w.stopover));
    }

    #[test]
    fn zero_and_missing_fuel_are_not_stops() {
        let point: RoutePoint = serde_json::from_str(r#"{"lat": 3, "lng": 4, "fuel_to_buy": 0}"#).unwrap();
        assert!(!point.is_fuel_stop());

        let point: RoutePoint = serde_json::from_str(r#"{"lat": 3, "lng": 4}"#).unwrap();
        assert!(point.fuel_to_buy.is_none());
        assert!(!point.is_fuel_stop());
    }

    #[test]
    fn rounds_cost_half_up_to_hundredths() {
        let response = RouteResponse {
            routes: None,
            cum_cost: Some(12.345),
        };
        assert_eq!(response.display_cost(), Some(12.35));

        let response = RouteResponse {
            routes: None,
            cum_cost: Some(12.344),
        };
        assert_eq!(response.display_cost(), Some(12.34));
    }

    #[test]
    fn missing_cum_cost_means_no_cost_line() {
        let response: RouteResponse = serde_json::from_str(r#"{"routes": []}"#).unwrap();
        assert_eq!(response.display_cost(), None);
    }

    #[test]
    fn missing_routes_field_is_tolerated() {
        let response: RouteResponse = serde_json::from_str(r#"{"cum_cost": 3.0}"#).unwrap();
        assert!(response.waypoints().is_none());
        assert_eq!(response.display_cost(), Some(3.0));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "routes": [{"lat": 1, "lng": 2, "fuel_to_buy": 1, "station_name": "Pilot #42"}],
            "cum_cost": 7.0,
            "engine_version": "2.1"
        }"#;
        let response: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.waypoints().unwrap().len(), 1);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(serde_json::from_str::<RouteResponse>("<html>502</html>").is_err());
        assert!(serde_json::from_str::<RouteResponse>(r#"{"routes": "nope"}"#).is_err());
    }
}

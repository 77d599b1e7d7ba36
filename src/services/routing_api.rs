// ============================================================================
// ROUTING API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here, just the request to the routing backend
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{GeoPoint, RouteResponse};
use crate::utils::ROUTING_API_URL;

/// Failure modes of the routing backend call. All of them are logged and
/// swallowed by the caller; the session never dies over a bad route fetch.
#[derive(Error, Debug)]
pub enum RoutingApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Client for the fuel-route engine - HTTP communication only (stateless)
#[derive(Clone)]
pub struct RoutingApiClient {
    base_url: String,
}

impl RoutingApiClient {
    pub fn new() -> Self {
        Self {
            base_url: ROUTING_API_URL.to_string(),
        }
    }

    /// Fetches the fuel-cost-optimized route between the two endpoints.
    pub async fn get_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteResponse, RoutingApiError> {
        let url = format!(
            "{}/get_route/?start_lat={}&start_lng={}&end_lat={}&end_lng={}",
            self.base_url, origin.lat, origin.lng, destination.lat, destination.lng
        );

        log::info!(
            "🛣️ Requesting route ({}, {}) → ({}, {})",
            origin.lat,
            origin.lng,
            destination.lat,
            destination.lng
        );

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| RoutingApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RoutingApiError::Http { status, text });
        }

        response
            .json::<RouteResponse>()
            .await
            .map_err(|e| RoutingApiError::MalformedResponse(e.to_string()))
    }
}

impl Default for RoutingApiClient {
    fn default() -> Self {
        Self::new()
    }
}

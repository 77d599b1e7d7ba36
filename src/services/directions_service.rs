use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::models::{DirectionsRequest, DirectionsResult, DisplayedRoute};
use crate::utils::map_ffi;

#[derive(Error, Debug)]
pub enum DirectionsError {
    #[error("directions request failed: {0}")]
    Failed(String),

    /// The capability answered, but not with a drawable route.
    #[error("directions status {0}")]
    NotOk(String),

    #[error("malformed directions payload: {0}")]
    Malformed(String),
}

/// Asks the map provider for a drivable path origin → waypoints →
/// destination.
///
/// The capability is Promise-based on the JS side; awaiting it here turns
/// the callback completion into ordinary sequential control flow.
pub async fn compute_route(request: &DirectionsRequest) -> Result<DisplayedRoute, DirectionsError> {
    let request_json =
        serde_json::to_string(request).map_err(|e| DirectionsError::Malformed(e.to_string()))?;

    let promise = map_ffi::compute_route(&request_json);
    let value: JsValue = JsFuture::from(promise)
        .await
        .map_err(|e| DirectionsError::Failed(js_error_text(&e)))?;

    let directions_json = value
        .as_string()
        .ok_or_else(|| DirectionsError::Malformed("expected a JSON string".to_string()))?;

    let result: DirectionsResult = serde_json::from_str(&directions_json)
        .map_err(|e| DirectionsError::Malformed(e.to_string()))?;

    if !result.is_ok() {
        return Err(DirectionsError::NotOk(result.status));
    }
    if result.route.is_none() {
        return Err(DirectionsError::Malformed(
            "status OK but no route payload".to_string(),
        ));
    }

    Ok(DisplayedRoute(directions_json))
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

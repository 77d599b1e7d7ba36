// ============================================================================
// MAP FFI - Foreign Function Interface to the JavaScript map glue
// ============================================================================
// Thin wrappers over window.* functions - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Attaches the map to `container_id` and wires click events back to us
    /// as "map-click" CustomEvents on window.
    #[wasm_bindgen(js_name = initMap)]
    pub fn init_map(container_id: &str, access_token: &str, center_lat: f64, center_lng: f64, zoom: f64);

    /// Places (or moves) the labeled endpoint marker.
    #[wasm_bindgen(js_name = setMarker)]
    pub fn set_marker(label: &str, lat: f64, lng: f64);

    /// Asks the provider's directions capability for a drivable path.
    /// Resolves to a JSON string `{status, route}`.
    #[wasm_bindgen(js_name = computeRoute)]
    pub fn compute_route(request_json: &str) -> js_sys::Promise;

    /// Draws the directions payload, replacing any previous overlay.
    #[wasm_bindgen(js_name = renderDirections)]
    pub fn render_directions(directions_json: &str);
}

// ============================================================================
// USE ROUTE HOOK - the whole click → fetch → render interaction state
// ============================================================================
// Owns selection, route data and the displayed path; components only get
// state handles and callbacks
// ============================================================================

use yew::prelude::*;

use crate::models::{DirectionsRequest, DisplayedRoute, GeoPoint, RouteResponse};
use crate::services::{directions_service, RoutingApiClient};
use crate::state::{RequestSeq, SelectionState};
use crate::utils::map_ffi;

/// Handle of the hook.
#[derive(Clone)]
pub struct UseRouteHandle {
    pub selection: UseStateHandle<SelectionState>,
    pub route_data: UseStateHandle<Option<RouteResponse>>,
    pub directions: UseStateHandle<Option<DisplayedRoute>>,
    pub loading: UseStateHandle<bool>,

    pub handle_click: Callback<GeoPoint>,
    pub fetch_route: Callback<()>,
}

#[hook]
pub fn use_route() -> UseRouteHandle {
    let selection = use_state(SelectionState::default);
    let route_data = use_state(|| None::<RouteResponse>);
    let directions = use_state(|| None::<DisplayedRoute>);
    let loading = use_state(|| false);
    let request_seq = use_mut_ref(RequestSeq::new);

    // First click sets the origin, the second the destination, the rest
    // are ignored until reload
    let handle_click = {
        let selection = selection.clone();
        Callback::from(move |point: GeoPoint| {
            let (next, slot) = selection.click(point);
            if let Some(slot) = slot {
                log::info!("📍 Marker {} = ({}, {})", slot.label(), point.lat, point.lng);
                map_ffi::set_marker(slot.label(), point.lat, point.lng);
                selection.set(next);
            }
        })
    };

    let fetch_route = {
        let selection = selection.clone();
        let route_data = route_data.clone();
        let directions = directions.clone();
        let loading = loading.clone();
        let request_seq = request_seq.clone();

        Callback::from(move |_| {
            // UI keeps the button disabled until both points exist; this is
            // the belt to that suspender
            let Some((origin, destination)) = selection.endpoints() else {
                return;
            };

            let route_data = route_data.clone();
            let directions = directions.clone();
            let loading = loading.clone();
            let seq = request_seq.borrow().clone();
            let generation = seq.begin();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);

                match RoutingApiClient::new().get_route(origin, destination).await {
                    Ok(_) if !seq.is_current(generation) => {
                        log::warn!("⚠️ Discarding stale route response (generation {})", generation);
                    }
                    Ok(response) => {
                        let waypoints = response.waypoints();
                        route_data.set(Some(response));

                        // No `routes` field → nothing to draw, cost line stays off
                        if let Some(waypoints) = waypoints {
                            log::info!("🗺️ {} refueling stop(s) on the route", waypoints.len());
                            let request =
                                DirectionsRequest::driving(origin, destination, waypoints);

                            match directions_service::compute_route(&request).await {
                                Ok(displayed) if seq.is_current(generation) => {
                                    map_ffi::render_directions(&displayed.0);
                                    directions.set(Some(displayed));
                                }
                                Ok(_) => {
                                    log::warn!(
                                        "⚠️ Discarding stale directions result (generation {})",
                                        generation
                                    );
                                }
                                // Prior displayed route stays; the user retries manually
                                Err(e) => log::error!("❌ Directions request failed: {}", e),
                            }
                        }
                    }
                    Err(e) => log::error!("❌ Error fetching route: {}", e),
                }

                loading.set(false);
            });
        })
    };

    UseRouteHandle {
        selection,
        route_data,
        directions,
        loading,
        handle_click,
        fetch_route,
    }
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent};
use yew::prelude::*;

use super::{MapContainer, RoutePanel};
use crate::hooks::use_route;
use crate::models::GeoPoint;

#[function_component(App)]
pub fn app() -> Html {
    let route = use_route();

    // Map clicks arrive from the JS glue as "map-click" CustomEvents on
    // window. The app lives for the whole session, so the listener is
    // registered once on mount and leaked on purpose.
    {
        let handle_click = route.handle_click.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Ok(event) = event.dyn_into::<CustomEvent>() {
                    match serde_wasm_bindgen::from_value::<GeoPoint>(event.detail()) {
                        Ok(point) => handle_click.emit(point),
                        Err(e) => log::error!("❌ Bad map-click payload: {}", e),
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("map-click", closure.as_ref().unchecked_ref());
            }
            closure.forget();

            || ()
        });
    }

    let hint = if route.selection.origin().is_none() {
        Some("Click the map to pick a start point (A)")
    } else if route.selection.destination().is_none() {
        Some("Click again to pick a destination (B)")
    } else {
        None
    };

    // Cost only makes sense once a path is actually on screen
    let cost = route
        .directions
        .as_ref()
        .and(route.route_data.as_ref())
        .and_then(|data| data.display_cost());

    html! {
        <>
            <MapContainer />
            <RoutePanel
                can_request={route.selection.is_complete()}
                loading={*route.loading}
                cost={cost}
                on_get_route={route.fetch_route.clone()}
            />
            if let Some(hint) = hint {
                <p class="hint">{ hint }</p>
            }
        </>
    }
}

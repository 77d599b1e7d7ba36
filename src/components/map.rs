use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::MapConfig;
use crate::utils::{map_ffi, MAP_ACCESS_TOKEN};

#[function_component(MapContainer)]
pub fn map_container() -> Html {
    // Initialize map on mount
    use_effect_with((), move |_| {
        let config = MapConfig::default();

        // Short delay so the container div is laid out before the map attaches
        Timeout::new(100, move || {
            log::info!("🗺️ Initializing map");
            map_ffi::init_map(
                "map",
                MAP_ACCESS_TOKEN,
                config.default_center_lat,
                config.default_center_lng,
                config.default_zoom,
            );
        })
        .forget();

        || ()
    });

    html! {
        <div id="map" class="map-container"></div>
    }
}

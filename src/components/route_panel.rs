use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoutePanelProps {
    /// Both endpoints picked, the button may be pressed.
    pub can_request: bool,
    pub loading: bool,
    /// Rounded trip cost; `None` until a route with a cost was fetched.
    pub cost: Option<f64>,
    pub on_get_route: Callback<()>,
}

#[function_component(RoutePanel)]
pub fn route_panel(props: &RoutePanelProps) -> Html {
    let onclick = {
        let on_get_route = props.on_get_route.clone();
        Callback::from(move |_: MouseEvent| on_get_route.emit(()))
    };

    html! {
        <div class="route-panel">
            <button {onclick} disabled={!props.can_request}>
                { if props.loading { "Loading…" } else { "Get Route" } }
            </button>
            if let Some(cost) = props.cost {
                <p class="route-cost">{ "Cost: " }<b>{ format!("{} $", cost) }</b></p>
            }
        </div>
    }
}

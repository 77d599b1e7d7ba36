pub mod app;
pub mod map;
pub mod route_panel;

pub use app::App;
pub use map::MapContainer;
pub use route_panel::RoutePanel;

pub mod directions;
pub mod geo;
pub mod route;

pub use directions::{DirectionsRequest, DirectionsResult, DisplayedRoute};
pub use geo::{GeoPoint, Waypoint};
pub use route::{RoutePoint, RouteResponse};

pub mod directions_service;
pub mod routing_api;

pub use directions_service::DirectionsError;
pub use routing_api::{RoutingApiClient, RoutingApiError};

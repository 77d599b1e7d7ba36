pub mod constants;
pub mod map_ffi;

pub use constants::{MAP_ACCESS_TOKEN, ROUTING_API_URL};

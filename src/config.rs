use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Geographic center of the contiguous US
            default_center_lat: 39.809_734_3,
            default_center_lng: -98.555_619_9,
            default_zoom: 5.0,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Kilometers between two coordinates, as returned by `GET /haversine`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DistanceResult {
    pub distance: f64,
}

impl DistanceResult {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }
}

use axum::extract::Query;
use axum::Json;
use tracing::debug;

use crate::handlers::haversine;
use crate::models::coordinate::{Coordinate, DistanceResult};
use crate::models::error::HaversineError;

#[derive(Debug, Default)]
pub struct HaversineQuery {
    pub lat1: Option<String>,
    pub lon1: Option<String>,
    pub lat2: Option<String>,
    pub lon2: Option<String>,
}

impl HaversineQuery {
    /// Keeps the first value of each coordinate key; repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat1" => &mut query.lat1,
                "lon1" => &mut query.lon1,
                "lat2" => &mut query.lat2,
                "lon2" => &mut query.lon2,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Presence of all four fields is checked before any of them is parsed.
    pub fn coordinates(&self) -> Result<(Coordinate, Coordinate), HaversineError> {
        let (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) = (
            non_empty(&self.lat1),
            non_empty(&self.lon1),
            non_empty(&self.lat2),
            non_empty(&self.lon2),
        ) else {
            return Err(HaversineError::MissingParameter);
        };

        let lat1 = parse_field("lat1", lat1)?;
        let lon1 = parse_field("lon1", lon1)?;
        let lat2 = parse_field("lat2", lat2)?;
        let lon2 = parse_field("lon2", lon2)?;

        Ok((Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2)))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// NaN and infinities parse fine but have no JSON representation.
fn parse_field(name: &'static str, value: &str) -> Result<f64, HaversineError> {
    value.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(HaversineError::InvalidParameter(name))
}

pub async fn haversine_handler(Query(pairs): Query<Vec<(String, String)>>) -> Result<Json<DistanceResult>, HaversineError> {
    let query = HaversineQuery::from_pairs(pairs);
    let (p1, p2) = query.coordinates().map_err(|e| {
        debug!("Rejected haversine request {:?}: {}", query, e);
        e
    })?;

    // Finite but huge degrees overflow in the radian conversion.
    let distance = haversine::distance(p1, p2);
    if !distance.is_finite() {
        debug!("Distance between {:?} and {:?} is not finite", p1, p2);
        return Err(HaversineError::UncomputableDistance);
    }
    debug!("Distance between {:?} and {:?} is {} km", p1, p2, distance);

    Ok(Json(DistanceResult::new(distance)))
}

use std::f64::consts::PI;

use crate::models::coordinate::Coordinate;

/// Mean Earth radius, km.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    degrees * PI / 180.
}

/// Gets great-circle distance in kilometers between two points using haversine formula.
pub fn distance(p1: Coordinate, p2: Coordinate) -> f64 {
    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);
    let d_lat = degree_rad(p2.lat - p1.lat);
    let d_lon = degree_rad(p2.lon - p1.lon);

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin() + lat1.cos() * lat2.cos() * (d_lon / 2.).sin() * (d_lon / 2.).sin();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

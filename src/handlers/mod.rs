pub mod haversine;
pub mod haversine_handler;
pub mod input_handler;

pub mod coordinate;
pub mod error;

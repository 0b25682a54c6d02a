use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Validation failures of the compute operation. Both are client errors.
#[derive(Debug, Error, PartialEq)]
pub enum HaversineError {
    #[error("Missing query parameters. Expected lat1, lon1, lat2, lon2.")]
    MissingParameter,

    #[error("Invalid value for {0}")]
    InvalidParameter(&'static str),

    #[error("Coordinates are too large to compute a distance.")]
    UncomputableDistance,
}

impl IntoResponse for HaversineError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Unable to bind {addr}: {source}")]
    BindFailure {
        addr: SocketAddr,
        #[source]
        source: hyper::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] hyper::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(
            HaversineError::MissingParameter.to_string(),
            "Missing query parameters. Expected lat1, lon1, lat2, lon2."
        );
        assert_eq!(HaversineError::InvalidParameter("lon2").to_string(), "Invalid value for lon2");
        assert_eq!(
            HaversineError::UncomputableDistance.to_string(),
            "Coordinates are too large to compute a distance."
        );
    }

    #[test]
    fn errors_render_as_bad_request() {
        let response = HaversineError::InvalidParameter("lat1").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

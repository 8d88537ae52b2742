//! HTTP error mapping
//!
//! Converts core errors into a status code and a JSON error body.
//! Query text is never rejected, so every core error that reaches a
//! handler is a server-side failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::TelusurError;

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for TelusurError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

//! Shopping assistant HTTP server
//!
//! Exposes the chatbot over `POST /api/chatbot/message` and reports
//! liveness on `GET /api/chatbot/health`.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// User-facing text for a missing or blank message
pub const MESSAGE_REQUIRED: &str = "Le message est requis";
/// Prefix of the 500 envelope message
pub const PROCESSING_FAILED: &str = "Erreur lors du traitement du message";

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Detail is logged, the client always gets `MESSAGE_REQUIRED`
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = match &self {
            ServerError::InvalidRequest(detail) => {
                tracing::debug!(detail = %detail, "Rejected chatbot request");
                MESSAGE_REQUIRED.to_string()
            }
            ServerError::Internal(detail) => {
                tracing::error!(detail = %detail, "Chatbot request failed");
                format!("{}: {}", PROCESSING_FAILED, detail)
            }
        };

        let status = StatusCode::from(self);
        (
            status,
            Json(serde_json::json!({
                "success": false,
                "message": message,
            })),
        )
            .into_response()
    }
}

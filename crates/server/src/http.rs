//! HTTP Endpoints
//!
//! REST API for the chatbot.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;
    let cors_layer = build_cors_layer(&server.cors_origins, server.cors_enabled);

    Router::new()
        .route("/api/chatbot/message", post(process_message))
        .route("/api/chatbot/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configuration
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        // Widget is embedded on arbitrary storefront pages
        tracing::info!("CORS restrictions disabled, allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::warn!("No valid CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:3000"))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Chat message request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_user_id")]
    pub user_id: Option<i64>,
}

/// Accept a number, a numeric string, or null. Anything else is dropped.
fn lenient_user_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

async fn process_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatMessageRequest>, JsonRejection>,
) -> Result<Json<Value>, ServerError> {
    let Json(request) = payload.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;

    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("message is missing or blank".to_string()))?;
    let user_id = request.user_id;

    // Own task so a panic in the pipeline becomes a 500 envelope
    let agent = state.agent.clone();
    let mut task = tokio::spawn(async move { agent.process(&message, user_id).await });

    let deadline = Duration::from_secs(state.config.server.request_timeout_secs);
    let joined = match tokio::time::timeout(deadline, &mut task).await {
        Ok(joined) => joined,
        Err(_) => {
            task.abort();
            return Err(ServerError::Internal(format!(
                "processing timed out after {}s",
                deadline.as_secs()
            )));
        }
    };
    let response = joined.map_err(|e| ServerError::Internal(join_error_detail(e)))?;

    tracing::info!(
        intent = %response.analysis.intent,
        confidence = response.analysis.confidence,
        user_id = ?user_id,
        "Processed chatbot message"
    );

    let data = serde_json::to_value(&response).map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": data,
    })))
}

fn join_error_detail(err: tokio::task::JoinError) -> String {
    if err.is_cancelled() {
        return "processing was cancelled".to_string();
    }
    let payload = err.into_panic();
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "processing panicked".to_string()
    }
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "UP",
        "service": state.config.server.service_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

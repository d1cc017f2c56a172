use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/translate", post(handlers::translate_text))
        .route("/voice", post(handlers::translate_voice))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

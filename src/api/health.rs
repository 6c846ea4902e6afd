use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// Reports whether the callback has already received a token.
pub async fn health(
    Extension(shared_state): Extension<Arc<Mutex<Option<String>>>>,
) -> Json<Value> {
    let authorized = shared_state.lock().await.is_some();

    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "authorized": authorized,
    }))
}

use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{mixcloud, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<String>>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        if let Some(reason) = params.get("error") {
            warning!("Authorization was refused: {}", reason);
        }
        return Html("<h4>Missing authorization code.</h4>");
    };

    match mixcloud::auth::exchange_code(code).await {
        Ok(token) => {
            *shared_state.lock().await = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}

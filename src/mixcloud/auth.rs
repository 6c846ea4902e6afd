use std::{sync::Arc, time::Duration};

use reqwest::{Url, header::ACCEPT};
use tokio::sync::Mutex;

use crate::{config, info, server::start_api_server, types::AccessTokenResponse, warning};

/// How long [`authorize`] waits for the browser to come back.
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

/// Builds the URL the user visits to grant access.
pub fn authorize_url() -> Result<String, String> {
    let url = Url::parse_with_params(
        &format!("{}/authorize", config::mixcloud_oauth_url()),
        &[
            ("client_id", config::mixcloud_client_id()?),
            ("redirect_uri", config::mixcloud_redirect_uri()),
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(url.to_string())
}

/// Exchanges an authorization code for an access token.
///
/// Mixcloud tokens do not expire, so only the token itself is returned.
///
/// # Arguments
///
/// * `code` - The `code` query parameter Mixcloud appended to the redirect
///   URI, or the code the user pasted via `mixcast auth --code`
///
/// # Errors
///
/// - `MIXCLOUD_CLIENT_ID` or `MIXCLOUD_CLIENT_SECRET` is not configured
/// - The request fails or the response cannot be decoded
/// - The response carries no token (for example an expired code)
///
/// # Example
///
/// ```
/// let token = exchange_code("a1b2c3").await?;
/// ```
pub async fn exchange_code(code: &str) -> Result<String, String> {
    let client = super::client().map_err(|e| e.to_string())?;
    let res = client
        .get(format!("{}/access_token", config::mixcloud_oauth_url()))
        .query(&[
            ("client_id", config::mixcloud_client_id()?),
            ("redirect_uri", config::mixcloud_redirect_uri()),
            ("client_secret", config::mixcloud_client_secret()?),
            ("code", code.trim().to_string()),
        ])
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| format!("Error fetching access token: {}", e))?;

    let json: AccessTokenResponse = res
        .json()
        .await
        .map_err(|e| format!("Error decoding response from API - {}", e))?;

    json.access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| "Error fetching access token".to_string())
}

/// Runs the browser flow: starts the callback server, opens the authorize
/// page and waits until the callback has stored a token in `shared_state`.
///
/// # Arguments
///
/// * `shared_state` - Slot the `/callback` handler writes the token into
///
/// # Authentication Flow
///
/// 1. **Server Start**: Launches the local callback server on `SERVER_ADDRESS`
/// 2. **Browser Launch**: Opens the authorize URL, or prints it when no
///    browser can be started
/// 3. **Callback Handling**: The server exchanges the returned code
/// 4. **Wait**: Polls `shared_state` once a second for up to [`AUTH_TIMEOUT`]
///
/// # Errors
///
/// Fails when the client id is missing or no token arrives in time.
pub async fn authorize(shared_state: Arc<Mutex<Option<String>>>) -> Result<String, String> {
    let auth_url = authorize_url()?;

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for authorization in your browser...");
    }

    wait_for_token(shared_state, AUTH_TIMEOUT)
        .await
        .ok_or_else(|| "Authentication failed or timed out.".to_string())
}

async fn wait_for_token(
    shared_state: Arc<Mutex<Option<String>>>,
    max_wait: Duration,
) -> Option<String> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(token) = shared_state.lock().await.as_ref() {
            return Some(token.clone());
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

use std::time::Duration;

use reqwest::{
    Response, StatusCode,
    header::{ACCEPT, RETRY_AFTER},
};
use tokio::time::sleep;

use crate::{config, types::User, warning};

/// Fetches the profile of the account the token belongs to.
///
/// # Arguments
///
/// * `token` - Access token from the settings file
///
/// # Behavior
///
/// - `429 Too Many Requests`: waits for `Retry-After` seconds and retries,
///   as long as the delay is at most [`super::MAX_RETRY_AFTER_SECS`]
/// - `502 Bad Gateway`: waits 10 seconds and retries
/// - Any other error status is returned
///
/// # Example
///
/// ```
/// let user = fetch_me(settings.access_token()?).await?;
/// if user.is_pro {
///     info!("Pro account, scheduling is available");
/// }
/// ```
pub async fn fetch_me(token: &str) -> Result<User, reqwest::Error> {
    let api_url = format!("{}/me/", config::mixcloud_api_url());

    loop {
        let client = super::client()?;
        let response = client
            .get(&api_url)
            .query(&[("access_token", token)])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let wait = retry_after(&response);
            if wait <= super::MAX_RETRY_AFTER_SECS {
                warning!("Rate limited by Mixcloud, retrying in {} seconds", wait);
                sleep(Duration::from_secs(wait)).await;
                continue;
            }
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if err.status() == Some(StatusCode::BAD_GATEWAY) {
                    sleep(Duration::from_secs(10)).await;
                    continue; // retry
                }
                return Err(err);
            }
        };

        return response.json::<User>().await;
    }
}

fn retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(1)
}

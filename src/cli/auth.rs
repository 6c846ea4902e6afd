use std::sync::Arc;

use tokio::sync::Mutex;

use super::{prompt, spinner};
use crate::{
    error, management::SettingsManager, mixcloud, success, types::Settings, utils, warning,
};

/// Authorizes mixcast with Mixcloud and stores the token and default tags.
///
/// # Arguments
///
/// * `code` - Authorization code to exchange directly; without it the
///   browser flow of [`mixcloud::auth::authorize`] runs
/// * `tags` - Default tags; asked for when missing
///
/// An existing token is only replaced after confirmation.
pub async fn auth(code: Option<String>, tags: Option<String>) {
    if let Ok(existing) = SettingsManager::load().await {
        if existing.access_token().is_ok() {
            match prompt::confirm("You are already authorized. Authorize again?") {
                Ok(true) => {}
                Ok(false) => return,
                Err(e) => error!("{}", e),
            }
        }
    }

    let token = match code {
        Some(code) => mixcloud::auth::exchange_code(&code).await,
        None => {
            let shared_state: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
            mixcloud::auth::authorize(shared_state).await
        }
    };

    let token = match token {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching your user data...");
    let user = mixcloud::user::fetch_me(&token).await;
    pb.finish_and_clear();

    match user {
        Ok(user) => success!("Authorized as {}", user.username),
        Err(e) => warning!("Error fetching your profile data: {}", e),
    }

    let default_tags = match tags {
        Some(tags) => tags,
        None => match prompt::ask("Enter default tags (comma separated): ") {
            Ok(tags) => tags,
            Err(e) => error!("Incorrect tag format. {}", e),
        },
    };

    let settings_mgr = SettingsManager::new(Settings {
        access_token: token,
        default_tags: utils::split_tags(&default_tags).join(","),
    });

    if let Err(e) = settings_mgr.persist().await {
        error!(
            "Unable to save configuration file {} - {}",
            settings_mgr.path().display(),
            e
        );
    }

    success!("Configuration saved.");
}

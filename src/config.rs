//! Configuration management for mixcast.
//!
//! OAuth credentials and endpoints come from environment variables, optionally
//! seeded from a `.env` file in the local data directory. Variables already set
//! in the environment win over the file. Everything except the client
//! credentials has a default.

use std::{
    env,
    path::{Path, PathBuf},
};

use dotenv;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8080/callback";
pub const DEFAULT_API_URL: &str = "https://api.mixcloud.com";
pub const DEFAULT_OAUTH_URL: &str = "https://www.mixcloud.com/oauth";

/// Returns `<data_local_dir>/mixcast`.
///
/// - Linux: `~/.local/share/mixcast`
/// - macOS: `~/Library/Application Support/mixcast`
/// - Windows: `%LOCALAPPDATA%/mixcast`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mixcast");
    path
}

/// Loads environment variables from `<data_dir>/.env`.
///
/// Creates the data directory if needed. A missing `.env` file is fine, the
/// variables may come from the environment instead.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    load_env_file(&path)
}

pub fn load_env_file(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required(key: &str) -> Result<String, String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("{} must be set", key))
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// `MIXCLOUD_CLIENT_ID`, from the Mixcloud developer application.
pub fn mixcloud_client_id() -> Result<String, String> {
    required("MIXCLOUD_CLIENT_ID")
}

/// `MIXCLOUD_CLIENT_SECRET`. Keep it out of logs and version control.
pub fn mixcloud_client_secret() -> Result<String, String> {
    required("MIXCLOUD_CLIENT_SECRET")
}

/// `MIXCLOUD_REDIRECT_URI`, must match the one registered with the application.
pub fn mixcloud_redirect_uri() -> String {
    var_or("MIXCLOUD_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// `MIXCLOUD_API_URL`, without trailing slash.
pub fn mixcloud_api_url() -> String {
    var_or("MIXCLOUD_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// `MIXCLOUD_OAUTH_URL`, without trailing slash.
pub fn mixcloud_oauth_url() -> String {
    var_or("MIXCLOUD_OAUTH_URL", DEFAULT_OAUTH_URL)
        .trim_end_matches('/')
        .to_string()
}

use crate::{config, info, management::SettingsManager};

pub fn about() {
    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("{}", env!("CARGO_PKG_DESCRIPTION"));
    info!("Settings: {}", SettingsManager::settings_path().display());
    info!("Environment: {}", config::data_dir().join(".env").display());
    info!("API: {}", config::mixcloud_api_url());
}

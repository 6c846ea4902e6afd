use std::{env, path::PathBuf};

use crate::{config, types::Settings};

pub struct SettingsManager {
    settings: Settings,
    path: PathBuf,
}

impl SettingsManager {
    pub fn new(settings: Settings) -> Self {
        Self::with_path(settings, Self::settings_path())
    }

    pub fn with_path(settings: Settings, path: PathBuf) -> Self {
        SettingsManager { settings, path }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::settings_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { settings, path })
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn access_token(&self) -> Result<&str, String> {
        if self.settings.access_token.trim().is_empty() {
            return Err("Access token configuration missing. Please run mixcast auth".to_string());
        }
        Ok(&self.settings.access_token)
    }

    pub fn default_tags(&self) -> &str {
        &self.settings.default_tags
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// `MIXCAST_CONFIG_PATH` if set, `<data_dir>/config.json` otherwise.
    pub fn settings_path() -> PathBuf {
        match env::var_os("MIXCAST_CONFIG_PATH") {
            Some(p) => PathBuf::from(p),
            None => config::data_dir().join("config.json"),
        }
    }
}

mod settings;

pub use settings::SettingsManager;

// LinkVault Settings Engine
// Reads client settings from a JSON file and applies environment overrides.
// The path comes from LINKVAULT_CONFIG, falling back to ./linkvault.json.

use std::fs;
use std::io::ErrorKind;

use tracing::debug;

use crate::types::errors::SettingsError;
use crate::types::settings::ClientSettings;

pub const CONFIG_PATH_ENV: &str = "LINKVAULT_CONFIG";
pub const BASE_URL_ENV: &str = "LINKVAULT_BASE_URL";
const DEFAULT_CONFIG_FILE: &str = "linkvault.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ClientSettings, SettingsError>;
    fn get_settings(&self) -> &ClientSettings;
    fn get_config_path(&self) -> &str;
}

/// Read-only settings source backed by a JSON file.
pub struct SettingsEngine {
    config_path: String,
    settings: ClientSettings,
}

impl SettingsEngine {
    /// Uses `path_override` when given, otherwise `$LINKVAULT_CONFIG`, then
    /// `linkvault.json` in the working directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        Self {
            config_path,
            settings: ClientSettings::default(),
        }
    }

    /// Returns the loaded settings with `LINKVAULT_BASE_URL` applied.
    ///
    /// A blank override is ignored. The result is validated again, so a bad
    /// override fails the same way a bad file value does.
    pub fn effective_settings(&self) -> Result<ClientSettings, SettingsError> {
        let mut settings = self.settings.clone();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                debug!(base_url, "api base url overridden from environment");
                settings.api.base_url = base_url.to_string();
            }
        }
        validate(&settings)?;
        Ok(settings)
    }
}

fn validate(settings: &ClientSettings) -> Result<(), SettingsError> {
    let base_url = &settings.api.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(SettingsError::InvalidValue(format!(
            "api.base_url must be an http(s) URL, got '{}'",
            base_url
        )));
    }
    Ok(())
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the config file. A missing file yields the defaults; sections
    /// and fields absent from the file keep their default values.
    fn load(&mut self) -> Result<ClientSettings, SettingsError> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path, "no settings file, using defaults");
                self.settings = ClientSettings::default();
                return Ok(self.settings.clone());
            }
            Err(e) => {
                return Err(SettingsError::IoError(format!(
                    "Failed to read config file: {}",
                    e
                )))
            }
        };

        let settings: ClientSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        validate(&settings)?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn get_settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}

//! Application settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default mimetype requested from the image selection when saving an avatar
pub const DEFAULT_AVATAR_MIMETYPE: &str = "image/png";

/// Default view shown after a contact has been created
pub const DEFAULT_POST_CREATE_PATH: &str = crate::ui::location::CONTACTS_ROUTE;

/// Application settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
///
/// # Example
/// ```rust,no_run
/// use contactbook::config::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// settings.server_url = "https://esn.example.org".to_string();
/// settings.save("settings.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the groupware REST API
    pub server_url: String,
    /// Timeout applied to every HTTP request, in milliseconds
    pub request_timeout_ms: u64,
    /// Mimetype requested from the image selection for avatars
    pub avatar_mimetype: String,
    /// Path navigated to once a contact has been created
    pub post_create_path: String,
    /// Log filter directive used by [`crate::init_with_filter`]
    pub log_filter: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file, creating parent directories as needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Request timeout as a [`std::time::Duration`]
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }

    /// Check values that would otherwise only fail later at use time
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server_url)
            .map_err(|e| Error::Config(format!("Invalid server_url '{}': {}", self.server_url, e)))?;

        if !self.post_create_path.starts_with('/') {
            return Err(Error::Config(format!(
                "post_create_path must be absolute, got '{}'",
                self.post_create_path
            )));
        }

        if !self.avatar_mimetype.starts_with("image/") {
            return Err(Error::Config(format!(
                "avatar_mimetype must be an image type, got '{}'",
                self.avatar_mimetype
            )));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 30_000,
            avatar_mimetype: DEFAULT_AVATAR_MIMETYPE.to_string(),
            post_create_path: DEFAULT_POST_CREATE_PATH.to_string(),
            log_filter: "contactbook=info".to_string(),
        }
    }
}

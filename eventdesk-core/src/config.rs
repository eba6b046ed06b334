//! Global eventdesk configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{EventDeskError, EventDeskResult};
use crate::session::Session;

static DEFAULT_API_URL: &str = "http://localhost:8000";
static FALLBACK_TIMEZONE: &str = "Europe/Berlin";
static ENV_PREFIX: &str = "EVENTDESK";

/// Timezone of the host, if it is one chrono-tz knows about.
fn default_timezone() -> String {
    iana_time_zone::get_timezone()
        .ok()
        .filter(|name| name.parse::<Tz>().is_ok())
        .unwrap_or_else(|| FALLBACK_TIMEZONE.to_string())
}

/// Settings at ~/.config/eventdesk/config.toml
///
/// Sources are layered: built-in defaults, then the config file (optional),
/// then `EVENTDESK_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the event API, without the `/api/events` path
    pub api_url: String,

    /// IANA timezone occurrences are interpreted in
    pub timezone: String,
}

impl Settings {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from the default config path.
    pub fn load() -> EventDeskResult<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load settings with `path` as the config file layer.
    pub fn load_from(path: &Path) -> EventDeskResult<Self> {
        let config = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)
            .and_then(|b| b.set_default("timezone", default_timezone()))
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))?;

        tracing::debug!(api_url = %settings.api_url, timezone = %settings.timezone, "loaded settings");

        Ok(settings)
    }

    /// Session for the configured timezone.
    pub fn session(&self) -> EventDeskResult<Session> {
        Session::from_timezone_name(&self.timezone)
    }

    /// URL of the endpoint serving the full event list.
    pub fn events_url(&self) -> String {
        format!("{}/api/events", self.api_url.trim_end_matches('/'))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# Where the event API lives:
# api_url = \"{DEFAULT_API_URL}\"

# Timezone occurrence times are shown in:
# timezone = \"{FALLBACK_TIMEZONE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(settings.session().is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"https://events.example.org/\"\ntimezone = \"America/Chicago\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.events_url(), "https://events.example.org/api/events");
        assert_eq!(settings.session().unwrap().timezone, chrono_tz::America::Chicago);
    }

    #[test]
    fn unknown_timezone_is_a_config_error() {
        let settings = Settings {
            api_url: DEFAULT_API_URL.to_string(),
            timezone: "Nowhere/Special".to_string(),
        };

        assert!(matches!(settings.session(), Err(EventDeskError::Config(_))));
    }

    #[test]
    fn default_config_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Settings::create_default_config(&path).unwrap();
        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }
}

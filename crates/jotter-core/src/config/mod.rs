//! Settings file loading.
//!
//! Settings are read once at startup and never written back.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::models::Settings;

/// File name looked up inside the application config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Load settings from `path`.
///
/// A missing file yields the defaults. Unreadable or malformed files are errors
/// so the caller can decide whether to log and fall back.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let payload = match fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(error) => return Err(error.into()),
    };

    parse_settings(&payload)
}

/// Parse settings from a raw JSON payload.
pub fn parse_settings(payload: &str) -> Result<Settings> {
    if payload.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::models::ThemeMode;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn loads_settings_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{"font_size": 18, "theme": "light"}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(
            settings,
            Settings {
                font_size: 18,
                theme: ThemeMode::Light,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn blank_payload_yields_defaults() {
        assert_eq!(parse_settings("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let error = parse_settings(r#"{"colour": "red"}"#).unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
        assert!(error.to_string().contains("unknown field"));
    }
}

//! Reading and writing the settings file.

use ron::ser::PrettyConfig;
use std::fs;
use std::path::Path;

use crate::content::ron_options;

use super::ScreenSettings;

/// Error type for settings file failures.
#[derive(Debug)]
pub struct SettingsError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Settings file {}: {}", self.file, self.message)
    }
}

/// Parse settings from RON text and clamp them into range.
pub fn parse_settings(file_name: &str, contents: &str) -> Result<ScreenSettings, SettingsError> {
    let mut settings: ScreenSettings =
        ron_options()
            .from_str(contents)
            .map_err(|e| SettingsError {
                file: file_name.to_string(),
                message: format!("Parse error: {}", e),
            })?;
    settings.sanitize();
    Ok(settings)
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<ScreenSettings, SettingsError> {
    let file_name = path.display().to_string();
    if !path.exists() {
        return Ok(ScreenSettings::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| SettingsError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_settings(&file_name, &contents)
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &ScreenSettings) -> Result<(), SettingsError> {
    let file_name = path.display().to_string();

    let text = ron::ser::to_string_pretty(settings, PrettyConfig::new()).map_err(|e| {
        SettingsError {
            file: file_name.clone(),
            message: format!("Serialize error: {}", e),
        }
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SettingsError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })?;
    }

    fs::write(path, text).map_err(|e| SettingsError {
        file: file_name,
        message: format!("IO error: {}", e),
    })
}

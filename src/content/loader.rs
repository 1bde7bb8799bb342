//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&file_name, &contents)
}

/// Everything authored in the content directory.
#[derive(Debug, Default)]
pub struct ScreenContent {
    pub screens: Vec<ScreenDef>,
    pub shows: Vec<ShowDef>,
}

/// Load televisions.ron and shows.ron from `base_path`.
/// Files that fail to load are reported and skipped; the rest still load.
pub fn load_screen_content(base_path: &Path) -> (ScreenContent, Vec<ContentLoadError>) {
    let mut content = ScreenContent::default();
    let mut errors = Vec::new();

    match load_data_file::<ScreenDef>(&base_path.join("televisions.ron")) {
        Ok(items) => content.screens = items,
        Err(e) => errors.push(e),
    }

    match load_data_file::<ShowDef>(&base_path.join("shows.ron")) {
        Ok(items) => content.shows = items,
        Err(e) => errors.push(e),
    }

    (content, errors)
}

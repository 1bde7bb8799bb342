//! Content domain: screen types and built-in shows authored as RON files.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{DataFile, ScreenDef, ShowDef};
pub use loader::{ContentLoadError, ScreenContent, load_screen_content};
pub(crate) use loader::{parse_data_file, ron_options};
pub use registry::ScreenDefRegistry;
pub use validation::{ValidationError, validate_content, validate_screen_def};

use bevy::prelude::*;

use crate::settings::ScreenShowsPaths;

/// Show definitions read at startup, waiting to be registered.
#[derive(Resource, Debug, Default)]
pub struct BuiltinShowDefs(pub Vec<ShowDef>);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenDefRegistry>()
            .init_resource::<BuiltinShowDefs>();
    }
}

/// Load and validate the content directory.
pub(crate) fn load_content(
    paths: Res<ScreenShowsPaths>,
    mut screens: ResMut<ScreenDefRegistry>,
    mut shows: ResMut<BuiltinShowDefs>,
) {
    let (content, errors) = load_screen_content(&paths.content_dir);
    for e in &errors {
        warn!("{}", e);
    }

    for def in content.screens {
        screens.insert(def);
    }

    for e in validate_content(&screens, &content.shows) {
        warn!("Content validation: {}", e);
    }

    info!(
        "Loaded {} screen types and {} shows from {}",
        screens.len(),
        content.shows.len(),
        paths.content_dir.display()
    );
    shows.0 = content.shows;
}

//! Shows domain: the registry of all shows, the per-screen catalogs that
//! filter it, per-type enable flags, and user-added shows.

mod catalog;
mod registry;
mod show;
mod status;
mod user;

pub use catalog::ShowCatalog;
pub use registry::ShowRegistry;
pub use show::{Frame, Show, ShowSource, USER_SHOW_LABEL};
pub use status::ShowStatusTable;
pub use user::{
    UserShowDraft, UserShowError, UserShowRecord, add_user_show, delete_user_show,
    edit_user_show, load_user_show, load_user_shows, scan_frames, unique_user_show_id,
};

use bevy::prelude::*;

use crate::content::{BuiltinShowDefs, ScreenDefRegistry};
use crate::settings::ScreenSettings;

pub struct ShowsPlugin;

impl Plugin for ShowsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShowRegistry>();
    }
}

/// Register the built-in shows loaded from content files.
pub(crate) fn register_builtin_shows(
    mut defs: ResMut<BuiltinShowDefs>,
    asset_server: Res<AssetServer>,
    mut registry: ResMut<ShowRegistry>,
) {
    for def in defs.0.drain(..) {
        registry.insert(Show::from_def(&def, |path| asset_server.load(path.to_string())));
    }
    info!("Registered {} built-in shows", registry.live_count());
}

/// Register the user shows saved in the settings file.
pub(crate) fn register_user_shows(
    asset_server: Res<AssetServer>,
    mut registry: ResMut<ShowRegistry>,
    mut settings: ResMut<ScreenSettings>,
) {
    let count = load_user_shows(&mut registry, &mut settings, |path| {
        asset_server.load(path.to_string())
    });
    info!("Registered {} user shows", count);
}

/// Resolve every show's enable flags against the known screen types.
pub(crate) fn resolve_show_status(
    screens: Res<ScreenDefRegistry>,
    mut registry: ResMut<ShowRegistry>,
    mut settings: ResMut<ScreenSettings>,
) {
    registry.resolve_status(&mut settings.show_status, &screens.ids());
    let disabled = registry
        .iter()
        .filter(|show| !show.deleted && show.disabled)
        .count();
    info!(
        "{} shows available, {} disabled",
        registry.live_count(),
        disabled
    );
}

//! Animated television screens for Bevy.
//!
//! Each screen object cycles through a slideshow ("show") drawn onto its
//! surface. Shows advance while someone watches, frames advance on a
//! per-show timer, the frame is placed per facing and sized by a fit
//! policy, and power draw follows playback.
//!
//! - [`geometry`]: facings, per-facing placement, fit policy
//! - [`shows`]: show registry, per-screen catalogs, user shows
//! - [`screen`]: playback state machine and its systems
//! - [`settings`]: persisted configuration
//! - [`content`]: screen types and built-in shows from RON files

pub mod content;
pub mod core;
pub mod geometry;
pub mod screen;
pub mod settings;
pub mod shows;

use bevy::prelude::*;
use std::path::PathBuf;

use crate::content::{ContentPlugin, load_content};
use crate::screen::ScreenPlugin;
use crate::settings::{ScreenShowsPaths, SettingsPlugin, load_settings_at_startup};
use crate::shows::{ShowsPlugin, register_builtin_shows, register_user_shows, resolve_show_status};

pub mod prelude {
    pub use crate::ScreenShowsPlugin;
    pub use crate::geometry::{Facing, FitPolicy, GeometryPair, RotationGeometry};
    pub use crate::screen::{
        NextShow, PowerTrader, SavedScreen, Screen, ScreenRecord, ScreenWatched, SelectShow,
        SelectShowById, Television, ToggleAutoAdvance,
    };
    pub use crate::settings::{SaveScreenSettings, ScreenSettings};
    pub use crate::shows::{ShowRegistry, UserShowDraft};
}

pub struct ScreenShowsPlugin {
    /// Directory holding televisions.ron and shows.ron.
    pub content_dir: PathBuf,
    /// RON file the settings are read from and saved to.
    pub settings_path: PathBuf,
}

impl Default for ScreenShowsPlugin {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("assets/data"),
            settings_path: PathBuf::from("config/screen_shows.ron"),
        }
    }
}

impl Plugin for ScreenShowsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ScreenShowsPaths {
            content_dir: self.content_dir.clone(),
            settings_path: self.settings_path.clone(),
        })
        .add_plugins((ContentPlugin, SettingsPlugin, ShowsPlugin, ScreenPlugin))
        .add_systems(
            Startup,
            (
                load_content,
                load_settings_at_startup,
                register_builtin_shows,
                register_user_shows,
                resolve_show_status,
            )
                .chain(),
        );
    }
}

//! Screen domain: per-object playback state, its tick and draw systems, and
//! the messages that drive it.

mod components;
mod events;
mod playback;
mod record;
mod systems;

pub use components::{PowerTrader, SavedScreen, ScreenFrame, ScreenFrameLink, Television};
pub use events::{NextShow, ScreenWatched, SelectShow, SelectShowById, ToggleAutoAdvance};
pub use playback::{ResolvedFrame, Screen, ScreenContext, WATCH_TICKS};
pub use record::ScreenRecord;
pub use systems::{PIXELS_PER_UNIT, frame_translation};

use bevy::prelude::*;

use crate::core::TICKS_PER_SECOND;
use crate::screen::systems::{apply_screen_requests, draw_screens, setup_new_screens, tick_screens};

pub struct ScreenPlugin;

impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND as f64))
            .add_message::<ScreenWatched>()
            .add_message::<SelectShow>()
            .add_message::<SelectShowById>()
            .add_message::<NextShow>()
            .add_message::<ToggleAutoAdvance>()
            .add_systems(FixedUpdate, (apply_screen_requests, tick_screens).chain())
            .add_systems(Update, (setup_new_screens, draw_screens).chain());
    }
}

//! Screen domain: components attached to screen objects.

use bevy::prelude::*;

use super::record::ScreenRecord;

/// An object with a screen. `def_id` names its screen type.
#[derive(Component, Debug, Clone)]
pub struct Television {
    pub def_id: String,
}

impl Television {
    pub fn new(def_id: impl Into<String>) -> Self {
        Self {
            def_id: def_id.into(),
        }
    }
}

/// Host power connection of a screen object.
///
/// The host sets `power_on`; the screen writes `power_output` every tick.
#[derive(Component, Debug, Clone)]
pub struct PowerTrader {
    /// Draw at 100 %, as a positive number.
    pub base_consumption: f32,
    pub power_on: bool,
    /// Current output, negative while consuming.
    pub power_output: f32,
}

impl PowerTrader {
    pub fn new(base_consumption: f32) -> Self {
        Self {
            base_consumption,
            power_on: true,
            power_output: -base_consumption,
        }
    }
}

/// Marker for the child sprite that shows the current frame.
#[derive(Component, Debug, Default)]
pub struct ScreenFrame;

/// Link from a screen object to its frame sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScreenFrameLink(pub Entity);

/// Saved playback state to restore when the screen object is set up.
#[derive(Component, Debug, Clone)]
pub struct SavedScreen(pub ScreenRecord);

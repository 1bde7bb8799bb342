//! Screen domain: messages from watchers, commands, and UI.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Someone is watching `screen` this tick.
#[derive(Debug, Clone, Copy)]
pub struct ScreenWatched {
    pub screen: Entity,
}

impl Message for ScreenWatched {}

/// Switch `screen` to the show at `index` in its catalog.
#[derive(Debug, Clone, Copy)]
pub struct SelectShow {
    pub screen: Entity,
    pub index: usize,
}

impl Message for SelectShow {}

/// Switch `screen` to the show with `show_id`.
#[derive(Debug, Clone)]
pub struct SelectShowById {
    pub screen: Entity,
    pub show_id: String,
}

impl Message for SelectShowById {}

/// Move `screen` to the next show in its catalog.
#[derive(Debug, Clone, Copy)]
pub struct NextShow {
    pub screen: Entity,
}

impl Message for NextShow {}

/// Flip whether watchers may advance shows on `screen`.
#[derive(Debug, Clone, Copy)]
pub struct ToggleAutoAdvance {
    pub screen: Entity,
}

impl Message for ToggleAutoAdvance {}

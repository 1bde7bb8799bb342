//! Settings domain: persisted screen configuration, per-type geometry
//! overrides, show enable flags, and user show records.

mod persist;
#[cfg(test)]
mod tests;

pub use persist::{SettingsError, load_settings, parse_settings, save_settings};

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::content::ScreenDef;
use crate::core::VersionClock;
use crate::geometry::{Facing, FitPolicy, GeometryPair, RotationGeometry};
use crate::shows::{ShowStatusTable, UserShowRecord};

pub const MIN_SECONDS_BETWEEN_SHOWS: f32 = 1.0;
pub const MAX_SECONDS_BETWEEN_SHOWS: f32 = 10_000.0;
pub const MAX_POWER_PERCENT: f32 = 10_000.0;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenSettings {
    /// Play even when nobody is watching.
    pub play_always: bool,
    /// Power draw while playing, as a percentage of the object's base draw.
    pub power_draw_on: f32,
    /// Power draw while idle, as a percentage of the object's base draw.
    pub power_draw_off: f32,
    /// How long a watched screen stays on one show before moving on.
    pub seconds_between_shows: f32,
    fit_policy: FitPolicy,
    pub user_shows: Vec<UserShowRecord>,
    pub show_status: ShowStatusTable,
    geometry: BTreeMap<String, RotationGeometry>,
    /// Authored defaults each entry of `geometry` was derived from.
    geometry_defaults: BTreeMap<String, RotationGeometry>,
    #[serde(skip)]
    geometry_clock: VersionClock,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            play_always: true,
            power_draw_on: 100.0,
            power_draw_off: 100.0,
            seconds_between_shows: 60.0,
            fit_policy: FitPolicy::Stretch,
            user_shows: Vec::new(),
            show_status: ShowStatusTable::default(),
            geometry: BTreeMap::new(),
            geometry_defaults: BTreeMap::new(),
            geometry_clock: VersionClock::default(),
        }
    }
}

impl ScreenSettings {
    /// Clamp numeric settings into their allowed ranges.
    pub fn sanitize(&mut self) {
        self.seconds_between_shows = self
            .seconds_between_shows
            .clamp(MIN_SECONDS_BETWEEN_SHOWS, MAX_SECONDS_BETWEEN_SHOWS);
        self.power_draw_on = self.power_draw_on.clamp(0.0, MAX_POWER_PERCENT);
        self.power_draw_off = self.power_draw_off.clamp(0.0, MAX_POWER_PERCENT);
    }

    pub fn fit_policy(&self) -> FitPolicy {
        self.fit_policy
    }

    pub fn set_fit_policy(&mut self, policy: FitPolicy) {
        if self.fit_policy != policy {
            self.fit_policy = policy;
            self.geometry_clock.bump();
        }
    }

    /// Clock bumped whenever anything affecting frame placement changes.
    pub fn geometry_clock(&self) -> &VersionClock {
        &self.geometry_clock
    }

    /// Geometry for a screen type.
    ///
    /// Materialized from the type's defaults on first use. Local edits are
    /// kept until the authored defaults change, then the entry is rebuilt
    /// from the new defaults.
    pub fn geometry_for(&mut self, def: &ScreenDef) -> &RotationGeometry {
        if self.geometry_defaults.get(&def.id) != Some(&def.default_geometry) {
            if self.geometry.contains_key(&def.id) {
                info!("Screen type '{}' has new default geometry", def.id);
            }
            self.apply_defaults(def);
        }
        self.geometry
            .entry(def.id.clone())
            .or_insert_with(|| def.default_geometry.clone())
    }

    fn apply_defaults(&mut self, def: &ScreenDef) {
        self.geometry
            .insert(def.id.clone(), def.default_geometry.clone());
        self.geometry_defaults
            .insert(def.id.clone(), def.default_geometry.clone());
        self.geometry_clock.bump();
    }

    pub fn geometry(&self, type_id: &str) -> Option<&RotationGeometry> {
        self.geometry.get(type_id)
    }

    /// Replace (or clear) one facing of a screen type's geometry.
    pub fn set_geometry(&mut self, def: &ScreenDef, facing: Facing, pair: Option<GeometryPair>) {
        self.geometry_for(def);
        if let Some(geometry) = self.geometry.get_mut(&def.id) {
            geometry.set(facing, pair);
        }
        self.geometry_clock.bump();
    }

    /// Discard overrides for a screen type.
    pub fn reset_geometry(&mut self, def: &ScreenDef) {
        self.geometry
            .entry(def.id.clone())
            .or_default()
            .reset_to_defaults(&def.default_geometry);
        self.geometry_defaults
            .insert(def.id.clone(), def.default_geometry.clone());
        self.geometry_clock.bump();
    }

    /// Take over `other`'s values while keeping this clock monotonic, so
    /// screens that cached geometry under the old values refresh.
    pub fn replace_with(&mut self, other: ScreenSettings) {
        let clock = self.geometry_clock;
        *self = other;
        self.geometry_clock = clock;
        self.geometry_clock.bump();
    }

    /// Power output for an object with `base_consumption`, negative when it
    /// consumes.
    pub fn power_output(&self, base_consumption: f32, playing: bool) -> f32 {
        let percent = if playing {
            self.power_draw_on
        } else {
            self.power_draw_off
        };
        -base_consumption * percent / 100.0
    }
}

/// Where the plugin reads content and keeps its settings file.
#[derive(Resource, Debug, Clone)]
pub struct ScreenShowsPaths {
    pub content_dir: PathBuf,
    pub settings_path: PathBuf,
}

/// Request to write the settings file.
#[derive(Debug, Default)]
pub struct SaveScreenSettings;

impl Message for SaveScreenSettings {}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenSettings>()
            .add_message::<SaveScreenSettings>()
            .add_systems(Update, persist_settings);
    }
}

/// Read the settings file at startup, falling back to defaults.
pub(crate) fn load_settings_at_startup(
    paths: Res<ScreenShowsPaths>,
    mut settings: ResMut<ScreenSettings>,
) {
    match load_settings(&paths.settings_path) {
        Ok(loaded) => {
            settings.replace_with(loaded);
            info!(
                "Loaded screen settings ({} user shows, {} screen overrides)",
                settings.user_shows.len(),
                settings.geometry.len()
            );
        }
        Err(e) => {
            warn!("{}. Using default screen settings.", e);
            settings.replace_with(ScreenSettings::default());
        }
    }
}

fn persist_settings(
    mut requests: MessageReader<SaveScreenSettings>,
    paths: Res<ScreenShowsPaths>,
    settings: Res<ScreenSettings>,
) {
    if requests.read().count() == 0 {
        return;
    }

    match save_settings(&paths.settings_path, &settings) {
        Ok(()) => info!("Saved screen settings to {}", paths.settings_path.display()),
        Err(e) => warn!("{}", e),
    }
}

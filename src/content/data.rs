//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ScreenDefRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::{RotationGeometry, vec2_serde};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Screen types (televisions.ron)
// ============================================================================

/// An object type that carries a screen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreenDef {
    pub id: String,
    pub label: String,
    /// Size the object is drawn at, in map units.
    #[serde(with = "vec2_serde")]
    pub draw_size: Vec2,
    /// Nominal power draw of the object at 100 %.
    #[serde(default)]
    pub power_consumption: f32,
    pub default_geometry: RotationGeometry,
}

// ============================================================================
// Built-in shows (shows.ron)
// ============================================================================

fn default_seconds_between_frames() -> f32 {
    1.0
}

fn default_pack() -> String {
    "Built-in".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShowDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Asset paths of the frame images, in playback order.
    pub frames: Vec<String>,
    #[serde(default = "default_seconds_between_frames")]
    pub seconds_between_frames: f32,
    /// Screen type ids this show plays on by default.
    pub television_defs: Vec<String>,
    /// Name of the content pack the show ships in, used for sorting.
    #[serde(default = "default_pack")]
    pub pack: String,
}

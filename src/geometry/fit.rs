//! Sizing a frame image onto a screen area.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How a frame image is scaled onto the screen area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect)]
pub enum FitPolicy {
    /// Fill the screen exactly, ignoring the image's aspect ratio.
    #[default]
    Stretch,
    /// Keep the aspect ratio and stay inside the screen.
    Fit,
    /// Keep the aspect ratio and cover the screen (may overflow it).
    Fill,
}

impl FitPolicy {
    /// Map a legacy numeric setting to a policy. Unknown values stretch.
    pub fn from_index(index: i64) -> FitPolicy {
        match index {
            1 => FitPolicy::Fit,
            2 => FitPolicy::Fill,
            _ => FitPolicy::Stretch,
        }
    }
}

/// Size of a `source` image drawn into a `container` under `policy`.
pub fn resolve_size(container: Vec2, source: Vec2, policy: FitPolicy) -> Vec2 {
    let is_wide = source.x / container.x > source.y / container.y;

    match policy {
        FitPolicy::Stretch => container,
        FitPolicy::Fit => {
            if is_wide {
                Vec2::new(container.x, container.x * source.y / source.x)
            } else {
                Vec2::new(container.y * source.x / source.y, container.y)
            }
        }
        // Branch choice is the inverse of Fit: the wide image is matched on
        // height and overflows horizontally.
        FitPolicy::Fill => {
            if is_wide {
                Vec2::new(container.y * source.x / source.y, container.y)
            } else {
                Vec2::new(container.x, source.y / source.x * container.x)
            }
        }
    }
}

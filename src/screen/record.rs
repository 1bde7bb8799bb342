//! Persisted per-screen playback state.

use serde::{Deserialize, Serialize};

fn default_auto_advance() -> bool {
    true
}

/// What a screen saves. The show is stored by id because catalog positions
/// shift whenever shows are added, removed, or disabled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScreenRecord {
    #[serde(default)]
    pub show_id: Option<String>,
    #[serde(default)]
    pub frame_index: usize,
    #[serde(default)]
    pub show_ticks: u32,
    #[serde(default)]
    pub frame_ticks: u32,
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
}

impl Default for ScreenRecord {
    fn default() -> Self {
        Self {
            show_id: None,
            frame_index: 0,
            show_ticks: 0,
            frame_ticks: 0,
            auto_advance: true,
        }
    }
}

//! Core domain: simulation tick constants and the version clocks shared by
//! the show catalog and the screen geometry cache.

mod clock;

pub use clock::{VersionClock, Versioned};

/// Fixed simulation rate of the host loop.
pub const TICKS_PER_SECOND: f32 = 60.0;

/// Convert a duration in seconds to a whole number of simulation ticks,
/// truncating toward zero. Negative inputs map to 0.
pub fn seconds_to_ticks(seconds: f32) -> u32 {
    (seconds * TICKS_PER_SECOND) as u32
}

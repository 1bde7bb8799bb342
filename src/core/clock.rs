//! Logical version clocks and the caches that follow them.
//!
//! A [`VersionClock`] is bumped by every mutation of some shared data (the
//! show list, the screen geometry). Readers keep a [`Versioned`] snapshot
//! and only recompute it when the clock has moved past the version they
//! last saw.

/// Monotonic logical clock. Starts at 1 so that a fresh [`Versioned`]
/// cache (which has seen nothing) is always stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionClock(u64);

impl Default for VersionClock {
    fn default() -> Self {
        Self(1)
    }
}

impl VersionClock {
    pub fn current(&self) -> u64 {
        self.0
    }

    /// Advance the clock, returning the new version.
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// A cached value tagged with the clock version it was computed at.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    seen: Option<u64>,
    value: T,
}

impl<T: Default> Default for Versioned<T> {
    fn default() -> Self {
        Self {
            seen: None,
            value: T::default(),
        }
    }
}

impl<T> Versioned<T> {
    pub fn new(value: T) -> Self {
        Self { seen: None, value }
    }

    pub fn is_stale(&self, clock: &VersionClock) -> bool {
        self.seen.is_none_or(|seen| seen < clock.current())
    }

    /// Recompute the cached value if `clock` has advanced.
    /// Returns `true` when a recompute happened.
    pub fn refresh(&mut self, clock: &VersionClock, recompute: impl FnOnce() -> T) -> bool {
        if !self.is_stale(clock) {
            return false;
        }
        self.value = recompute();
        self.seen = Some(clock.current());
        true
    }

    pub fn invalidate(&mut self) {
        self.seen = None;
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

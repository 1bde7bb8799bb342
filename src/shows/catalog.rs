//! Per-screen snapshot of the shows a screen type can play.

use crate::core::Versioned;

use super::registry::ShowRegistry;
use super::show::Show;

/// Cached list of shows for one screen, refreshed when the registry's
/// clock moves.
#[derive(Debug, Clone, Default)]
pub struct ShowCatalog {
    cache: Versioned<Vec<usize>>,
}

impl ShowCatalog {
    /// Re-filter the registry if it changed since the last refresh.
    /// Returns true when the list was recomputed.
    pub fn refresh(&mut self, registry: &ShowRegistry, type_id: &str) -> bool {
        self.cache
            .refresh(registry.clock(), || registry.shows_for(type_id))
    }

    pub fn len(&self) -> usize {
        self.cache.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.get().is_empty()
    }

    /// Show at `position` in this catalog.
    pub fn show<'r>(&self, registry: &'r ShowRegistry, position: usize) -> Option<&'r Show> {
        let index = *self.cache.get().get(position)?;
        registry.get(index)
    }

    /// Position of the show with `show_id` in this catalog.
    pub fn position_of(&self, registry: &ShowRegistry, show_id: &str) -> Option<usize> {
        self.cache
            .get()
            .iter()
            .position(|&index| registry.get(index).is_some_and(|s| s.id == show_id))
    }

    pub fn shows<'r>(&self, registry: &'r ShowRegistry) -> Vec<&'r Show> {
        self.cache
            .get()
            .iter()
            .filter_map(|&index| registry.get(index))
            .collect()
    }
}

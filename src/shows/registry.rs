//! ShowRegistry resource: every show ever registered, plus the catalog
//! clock that screens use to notice changes.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::VersionClock;

use super::show::Show;
use super::status::ShowStatusTable;

/// Source of truth for all show definitions, built-in and user-added.
///
/// Shows are never removed, only tombstoned, so indices into `shows` stay
/// valid for the lifetime of the registry.
#[derive(Resource, Debug, Default)]
pub struct ShowRegistry {
    shows: Vec<Show>,
    by_id: HashMap<String, usize>,
    clock: VersionClock,
}

impl ShowRegistry {
    /// Register a show, or replace the show with the same id in place.
    /// Returns the show's registry index.
    pub fn insert(&mut self, show: Show) -> usize {
        let index = match self.by_id.get(&show.id) {
            Some(&index) => {
                self.shows[index] = show;
                index
            }
            None => {
                self.by_id.insert(show.id.clone(), self.shows.len());
                self.shows.push(show);
                self.shows.len() - 1
            }
        };
        self.clock.bump();
        index
    }

    pub fn get(&self, index: usize) -> Option<&Show> {
        self.shows.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn find(&self, id: &str) -> Option<&Show> {
        self.index_of(id).and_then(|index| self.get(index))
    }

    /// Mutable access for in-place edits. Callers must call
    /// [`ShowRegistry::mark_changed`] afterwards.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Show> {
        let index = self.index_of(id)?;
        self.shows.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Show> {
        self.shows.iter()
    }

    /// Registry indices of the shows listed for `type_id`, in registration
    /// order.
    pub fn shows_for(&self, type_id: &str) -> Vec<usize> {
        self.shows
            .iter()
            .enumerate()
            .filter(|(_, show)| show.is_listed_for(type_id))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of shows that are not deleted.
    pub fn live_count(&self) -> usize {
        self.shows.iter().filter(|s| !s.deleted).count()
    }

    pub fn clock(&self) -> &VersionClock {
        &self.clock
    }

    pub fn mark_changed(&mut self) {
        self.clock.bump();
    }

    /// Recompute `supported_types` and `disabled` for every show from the
    /// status table, filling in defaults for shows and screen types the
    /// table has not seen yet.
    pub fn resolve_status(&mut self, status: &mut ShowStatusTable, screen_ids: &[String]) {
        for show in &mut self.shows {
            apply_status(show, status, screen_ids);
        }
        self.clock.bump();
    }

    /// Enable or disable one show on one screen type.
    /// Returns false if the show is unknown.
    pub fn set_enabled_for(
        &mut self,
        show_id: &str,
        type_id: &str,
        enabled: bool,
        status: &mut ShowStatusTable,
        screen_ids: &[String],
    ) -> bool {
        let Some(index) = self.index_of(show_id) else {
            return false;
        };
        let show = &mut self.shows[index];
        status.resolve(&show.id, &show.default_types, screen_ids);
        if status.get(show_id, type_id) == Some(enabled) {
            return true;
        }
        status.set(show_id, type_id, enabled);
        apply_status(show, status, screen_ids);
        self.clock.bump();
        info!(
            "Show '{}' {} on '{}'",
            show_id,
            if enabled { "enabled" } else { "disabled" },
            type_id
        );
        true
    }

    /// Enable a show on its authored screen types, or disable it everywhere.
    /// Returns false if the show is unknown.
    pub fn set_enabled(
        &mut self,
        show_id: &str,
        enabled: bool,
        status: &mut ShowStatusTable,
        screen_ids: &[String],
    ) -> bool {
        let Some(index) = self.index_of(show_id) else {
            return false;
        };
        let show = &mut self.shows[index];
        let types = if enabled {
            show.default_types.clone()
        } else {
            Vec::new()
        };
        status.replace(show_id, &types, screen_ids);
        apply_status(show, status, screen_ids);
        self.clock.bump();
        info!(
            "Show '{}' {}",
            show_id,
            if enabled { "enabled" } else { "disabled" }
        );
        true
    }

    /// Tombstone a show. Returns false if it is unknown or already deleted.
    pub fn delete(&mut self, show_id: &str) -> bool {
        match self.find_mut(show_id) {
            Some(show) if !show.deleted => {
                show.deleted = true;
                self.clock.bump();
                true
            }
            _ => false,
        }
    }
}

fn apply_status(show: &mut Show, status: &mut ShowStatusTable, screen_ids: &[String]) {
    show.supported_types = status.resolve(&show.id, &show.default_types, screen_ids);
    show.disabled = show.supported_types.is_empty();
}

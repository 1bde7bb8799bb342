//! Per-show, per-screen-type enable flags, persisted with the settings.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ShowStatusTable {
    entries: BTreeMap<String, BTreeMap<String, bool>>,
}

impl ShowStatusTable {
    /// Enabled screen types for `show_id`.
    ///
    /// A show without an entry gets one enabling its `default_types`. Every
    /// screen type in `screen_ids` missing from the entry is added as
    /// disabled.
    pub fn resolve(
        &mut self,
        show_id: &str,
        default_types: &[String],
        screen_ids: &[String],
    ) -> BTreeSet<String> {
        let entry = self.entries.entry(show_id.to_string()).or_insert_with(|| {
            default_types
                .iter()
                .map(|id| (id.clone(), true))
                .collect()
        });

        for id in screen_ids {
            entry.entry(id.clone()).or_insert(false);
        }

        entry
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn set(&mut self, show_id: &str, type_id: &str, enabled: bool) {
        self.entries
            .entry(show_id.to_string())
            .or_default()
            .insert(type_id.to_string(), enabled);
    }

    /// Set every known type of `show_id` to enabled iff it is in `enabled`.
    pub fn replace(&mut self, show_id: &str, enabled: &[String], screen_ids: &[String]) {
        let entry = self.entries.entry(show_id.to_string()).or_default();
        for id in screen_ids.iter().chain(enabled.iter()) {
            entry.insert(id.clone(), enabled.contains(id));
        }
    }

    pub fn get(&self, show_id: &str, type_id: &str) -> Option<bool> {
        self.entries.get(show_id)?.get(type_id).copied()
    }

    pub fn contains(&self, show_id: &str) -> bool {
        self.entries.contains_key(show_id)
    }
}

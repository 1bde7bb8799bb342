//! ScreenDefRegistry resource providing lookups for loaded screen types.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::ScreenDef;

/// Central registry for all loaded screen types.
#[derive(Resource, Default)]
pub struct ScreenDefRegistry {
    pub defs: HashMap<String, ScreenDef>,
}

impl ScreenDefRegistry {
    pub fn insert(&mut self, def: ScreenDef) {
        self.defs.insert(def.id.clone(), def);
    }

    pub fn get(&self, id: &str) -> Option<&ScreenDef> {
        self.defs.get(id)
    }

    /// Ids of every known screen type, sorted for stable iteration.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.defs.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

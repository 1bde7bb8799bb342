//! Show records: built-in shows from content files and user shows from
//! image directories.

use bevy::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::content::ShowDef;

use super::user::UserShowRecord;

/// Sort-name prefix for shows that were added by the user.
pub const USER_SHOW_LABEL: &str = "User show";

/// Where a show came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowSource {
    /// Shipped in a content pack.
    Pack(String),
    /// Added by the user from an image directory.
    User { path: PathBuf },
}

/// A single image of a show.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub path: String,
    pub image: Handle<Image>,
}

#[derive(Debug, Clone)]
pub struct Show {
    pub id: String,
    pub label: String,
    pub description: String,
    pub frames: Vec<Frame>,
    pub seconds_between_frames: f32,
    /// Screen types the show was authored for.
    pub default_types: Vec<String>,
    /// Screen types the show currently plays on, after user overrides.
    pub supported_types: BTreeSet<String>,
    /// Set when no screen type is enabled.
    pub disabled: bool,
    /// Tombstone. Deleted shows stay resolvable by id but are never listed.
    pub deleted: bool,
    pub sort_name: String,
    pub source: ShowSource,
}

impl Show {
    pub fn from_def(def: &ShowDef, mut load_image: impl FnMut(&str) -> Handle<Image>) -> Self {
        let frames = def
            .frames
            .iter()
            .map(|path| Frame {
                path: path.clone(),
                image: load_image(path),
            })
            .collect();

        Self {
            id: def.id.clone(),
            label: def.label.clone(),
            description: def.description.clone(),
            frames,
            seconds_between_frames: def.seconds_between_frames,
            default_types: def.television_defs.clone(),
            supported_types: def.television_defs.iter().cloned().collect(),
            disabled: false,
            deleted: false,
            sort_name: format!("{} : {}", def.pack, def.label),
            source: ShowSource::Pack(def.pack.clone()),
        }
    }

    pub fn from_user_record(record: &UserShowRecord, frames: Vec<Frame>) -> Self {
        Self {
            id: record.id.clone(),
            label: record.label.clone(),
            description: record.description.clone(),
            frames,
            seconds_between_frames: record.seconds_between_frames,
            default_types: record.television_defs.clone(),
            supported_types: record.television_defs.iter().cloned().collect(),
            disabled: false,
            deleted: false,
            sort_name: format!("{} : {}", USER_SHOW_LABEL, record.label),
            source: ShowSource::User {
                path: PathBuf::from(&record.path),
            },
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.source, ShowSource::User { .. })
    }

    pub fn supports(&self, type_id: &str) -> bool {
        self.supported_types.contains(type_id)
    }

    /// Whether the show belongs in the catalog of `type_id`.
    pub fn is_listed_for(&self, type_id: &str) -> bool {
        !self.deleted && !self.disabled && self.supports(type_id)
    }
}

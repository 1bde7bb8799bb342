//! User shows: image directories registered at runtime and persisted in
//! the settings file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::settings::ScreenSettings;

use super::registry::ShowRegistry;
use super::show::{Frame, Show};

/// Unix time of 2019-03-10T00:00:00Z. User show ids count seconds from here.
const USER_SHOW_EPOCH_SECS: u64 = 1_552_176_000;

const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Persisted description of a user show.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserShowRecord {
    pub id: String,
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub seconds_between_frames: f32,
    #[serde(default)]
    pub television_defs: Vec<String>,
}

/// Fields supplied when creating or editing a user show.
#[derive(Debug, Clone, PartialEq)]
pub struct UserShowDraft {
    pub path: PathBuf,
    pub label: String,
    pub seconds_between_frames: f32,
    pub television_defs: Vec<String>,
}

/// Error type for user show failures.
#[derive(Debug)]
pub struct UserShowError {
    pub show: String,
    pub message: String,
}

impl std::fmt::Display for UserShowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User show {}: {}", self.show, self.message)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Image files directly inside `dir`, sorted by file name.
pub fn scan_frames(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && is_image(&path) && !is_hidden(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Fresh user show id based on the current time, skipping ids for which
/// `taken` returns true.
pub fn unique_user_show_id(now: SystemTime, taken: impl Fn(&str) -> bool) -> String {
    let epoch = UNIX_EPOCH + Duration::from_secs(USER_SHOW_EPOCH_SECS);
    let mut secs = now
        .duration_since(epoch)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    loop {
        let id = format!("UserShow_{:0>10}", secs);
        if !taken(&id) {
            return id;
        }
        secs += 1;
    }
}

/// Build a show from a record by scanning its directory.
///
/// A missing or unreadable directory is an error; an empty one yields a
/// show without frames.
pub fn load_user_show(
    record: &UserShowRecord,
    mut load_image: impl FnMut(&str) -> Handle<Image>,
) -> Result<Show, UserShowError> {
    let dir = Path::new(&record.path);
    if !dir.is_dir() {
        return Err(UserShowError {
            show: format!("{} : {}", record.id, record.label),
            message: format!("path <{}> does not exist", record.path),
        });
    }

    let paths = scan_frames(dir).map_err(|e| UserShowError {
        show: format!("{} : {}", record.id, record.label),
        message: format!("error reading <{}>: {}", record.path, e),
    })?;

    if paths.is_empty() {
        info!(
            "User show {} : {}: no images found in <{}>",
            record.id, record.label, record.path
        );
    }

    let frames = paths
        .iter()
        .map(|path| {
            let path = path.to_string_lossy().replace('\\', "/");
            Frame {
                image: load_image(&path),
                path,
            }
        })
        .collect();

    Ok(Show::from_user_record(record, frames))
}

/// Register every user show saved in `settings`. Records whose directory
/// cannot be read are dropped from the settings. Returns how many loaded.
pub fn load_user_shows(
    registry: &mut ShowRegistry,
    settings: &mut ScreenSettings,
    mut load_image: impl FnMut(&str) -> Handle<Image>,
) -> usize {
    let total = settings.user_shows.len();
    let mut kept = Vec::with_capacity(total);

    for record in settings.user_shows.drain(..) {
        match load_user_show(&record, &mut load_image) {
            Ok(show) => {
                registry.insert(show);
                kept.push(record);
            }
            Err(e) => info!("{}. Removed from list.", e),
        }
    }

    let count = kept.len();
    settings.user_shows = kept;
    if count != total {
        info!("{} out of {} user shows loaded", count, total);
    }
    count
}

fn validate_draft(draft: &UserShowDraft, show: &str) -> Result<(), UserShowError> {
    if !draft.path.is_dir() {
        return Err(UserShowError {
            show: show.to_string(),
            message: format!("directory <{}> not found", draft.path.display()),
        });
    }
    if draft.label.trim().is_empty() {
        return Err(UserShowError {
            show: show.to_string(),
            message: "show name is empty".to_string(),
        });
    }
    Ok(())
}

/// Create a user show from `draft`, register it, and save its record in
/// `settings`. Returns the new show id.
pub fn add_user_show(
    registry: &mut ShowRegistry,
    settings: &mut ScreenSettings,
    draft: &UserShowDraft,
    screen_ids: &[String],
    now: SystemTime,
    load_image: impl FnMut(&str) -> Handle<Image>,
) -> Result<String, UserShowError> {
    validate_draft(draft, &draft.label)?;

    let id = unique_user_show_id(now, |id| registry.index_of(id).is_some());
    let path = draft.path.to_string_lossy().into_owned();
    let record = UserShowRecord {
        id: id.clone(),
        description: format!("Images from {}", path),
        path,
        label: draft.label.clone(),
        seconds_between_frames: draft.seconds_between_frames,
        television_defs: draft.television_defs.clone(),
    };

    let show = load_user_show(&record, load_image)?;
    settings
        .show_status
        .replace(&id, &draft.television_defs, screen_ids);
    registry.insert(show);
    registry.resolve_status(&mut settings.show_status, screen_ids);
    settings.user_shows.push(record);

    info!("Added user show {} : {}", id, draft.label);
    Ok(id)
}

/// Apply `draft` to an existing user show, rescanning its directory.
pub fn edit_user_show(
    registry: &mut ShowRegistry,
    settings: &mut ScreenSettings,
    show_id: &str,
    draft: &UserShowDraft,
    screen_ids: &[String],
    load_image: impl FnMut(&str) -> Handle<Image>,
) -> Result<(), UserShowError> {
    validate_draft(draft, show_id)?;

    let Some(record) = settings.user_shows.iter_mut().find(|r| r.id == show_id) else {
        return Err(UserShowError {
            show: show_id.to_string(),
            message: "not a user show".to_string(),
        });
    };

    let path = draft.path.to_string_lossy().into_owned();
    let updated = UserShowRecord {
        id: record.id.clone(),
        description: format!("Images from {}", path),
        path,
        label: draft.label.clone(),
        seconds_between_frames: draft.seconds_between_frames,
        television_defs: draft.television_defs.clone(),
    };

    let show = load_user_show(&updated, load_image)?;
    *record = updated;
    settings
        .show_status
        .replace(show_id, &draft.television_defs, screen_ids);
    registry.insert(show);
    registry.resolve_status(&mut settings.show_status, screen_ids);

    info!("Edited user show {} : {}", show_id, draft.label);
    Ok(())
}

/// Tombstone a user show and drop its record from `settings`.
/// Returns false if no such user show exists.
pub fn delete_user_show(
    registry: &mut ShowRegistry,
    settings: &mut ScreenSettings,
    show_id: &str,
) -> bool {
    let Some(position) = settings.user_shows.iter().position(|r| r.id == show_id) else {
        info!("Could not find user show {}", show_id);
        return false;
    };

    let record = settings.user_shows.remove(position);
    registry.delete(show_id);
    info!("Deleted user show {} : {}", record.id, record.label);
    true
}

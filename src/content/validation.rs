//! Validation for screen types and the shows that reference them.

use super::data::{ScreenDef, ShowDef};
use super::registry::ScreenDefRegistry;

/// A validation error with context about what failed.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Check a screen type on its own.
pub fn validate_screen_def(def: &ScreenDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !def.default_geometry.supports_any() {
        errors.push(ValidationError {
            source_type: "Screen",
            source_id: def.id.clone(),
            field: "default_geometry",
            message: "does not support any facing".to_string(),
        });
    }

    if def.draw_size.x <= 0.0 || def.draw_size.y <= 0.0 {
        errors.push(ValidationError {
            source_type: "Screen",
            source_id: def.id.clone(),
            field: "draw_size",
            message: format!("must be positive, got {}", def.draw_size),
        });
    }

    errors
}

/// Validate all screen types and all show cross-references.
/// Returns a list of validation errors, empty if everything is valid.
pub fn validate_content(screens: &ScreenDefRegistry, shows: &[ShowDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for id in &screens.ids() {
        if let Some(def) = screens.get(id) {
            errors.extend(validate_screen_def(def));
        }
    }

    for show in shows {
        for tv in &show.television_defs {
            if screens.get(tv).is_none() {
                errors.push(ValidationError {
                    source_type: "Show",
                    source_id: show.id.clone(),
                    field: "television_defs",
                    message: format!("references missing Screen '{}'", tv),
                });
            }
        }

        if show.frames.is_empty() {
            errors.push(ValidationError {
                source_type: "Show",
                source_id: show.id.clone(),
                field: "frames",
                message: "has no frames".to_string(),
            });
        }

        if show.seconds_between_frames <= 0.0 {
            errors.push(ValidationError {
                source_type: "Show",
                source_id: show.id.clone(),
                field: "seconds_between_frames",
                message: "must be positive".to_string(),
            });
        }
    }

    errors
}

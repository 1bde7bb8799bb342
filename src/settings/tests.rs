//! Settings domain: tests for defaults, clamping, geometry overrides, and
//! the settings file.

use bevy::prelude::*;
use std::fs;

use super::*;
use crate::content::ScreenDef;
use crate::geometry::{Facing, FitPolicy, GeometryPair, RotationGeometry};

fn tube_def() -> ScreenDef {
    ScreenDef {
        id: "tube_tv".to_string(),
        label: "Tube television".to_string(),
        draw_size: Vec2::new(2.0, 1.0),
        power_consumption: 200.0,
        default_geometry: RotationGeometry::default().with(
            Facing::South,
            GeometryPair::new(Vec2::new(0.6, 0.5), Vec2::new(0.0, 0.1)),
        ),
    }
}

#[test]
fn test_defaults() {
    let settings = ScreenSettings::default();
    assert!(settings.play_always);
    assert_eq!(settings.power_draw_on, 100.0);
    assert_eq!(settings.power_draw_off, 100.0);
    assert_eq!(settings.seconds_between_shows, 60.0);
    assert_eq!(settings.fit_policy(), FitPolicy::Stretch);
    assert!(settings.user_shows.is_empty());
}

#[test]
fn test_sanitize_clamps_ranges() {
    let mut settings = ScreenSettings::default();
    settings.seconds_between_shows = 0.2;
    settings.power_draw_on = 20_000.0;
    settings.power_draw_off = -5.0;
    settings.sanitize();

    assert_eq!(settings.seconds_between_shows, MIN_SECONDS_BETWEEN_SHOWS);
    assert_eq!(settings.power_draw_on, MAX_POWER_PERCENT);
    assert_eq!(settings.power_draw_off, 0.0);

    settings.seconds_between_shows = 50_000.0;
    settings.sanitize();
    assert_eq!(settings.seconds_between_shows, MAX_SECONDS_BETWEEN_SHOWS);
}

#[test]
fn test_power_output_is_negative_percentage() {
    let mut settings = ScreenSettings::default();
    settings.power_draw_on = 150.0;
    settings.power_draw_off = 10.0;

    assert_eq!(settings.power_output(200.0, true), -300.0);
    assert_eq!(settings.power_output(200.0, false), -20.0);
    assert_eq!(settings.power_output(0.0, true), 0.0);
}

#[test]
fn test_fit_policy_change_bumps_geometry_clock() {
    let mut settings = ScreenSettings::default();
    let start = settings.geometry_clock().current();

    settings.set_fit_policy(FitPolicy::Stretch);
    assert_eq!(settings.geometry_clock().current(), start);

    settings.set_fit_policy(FitPolicy::Fill);
    assert_eq!(settings.fit_policy(), FitPolicy::Fill);
    assert!(settings.geometry_clock().current() > start);
}

#[test]
fn test_geometry_for_materializes_defaults() {
    let mut settings = ScreenSettings::default();
    let def = tube_def();
    assert!(settings.geometry("tube_tv").is_none());

    let geometry = settings.geometry_for(&def).clone();
    assert_eq!(geometry, def.default_geometry);
    assert!(settings.geometry("tube_tv").is_some());
}

#[test]
fn test_geometry_follows_changed_defaults() {
    let mut settings = ScreenSettings::default();
    let def = tube_def();
    assert!(!settings.geometry_for(&def).is_supported(Facing::North));
    let before = settings.geometry_clock().current();

    let mut updated = tube_def();
    updated.default_geometry = updated.default_geometry.with(
        Facing::North,
        GeometryPair::new(Vec2::new(0.6, 0.5), Vec2::new(0.0, -0.1)),
    );

    assert!(settings.geometry_for(&updated).is_supported(Facing::North));
    assert!(settings.geometry_clock().current() > before);
}

#[test]
fn test_geometry_edits_survive_unchanged_defaults() {
    let mut settings = ScreenSettings::default();
    let def = tube_def();
    let pair = GeometryPair::new(Vec2::new(0.3, 0.3), Vec2::new(0.1, 0.1));
    settings.set_geometry(&def, Facing::East, Some(pair));
    let before = settings.geometry_clock().current();

    assert_eq!(settings.geometry_for(&def).pair_for(Facing::East), Some(pair));
    assert_eq!(settings.geometry_clock().current(), before);
}

#[test]
fn test_set_and_reset_geometry() {
    let mut settings = ScreenSettings::default();
    let def = tube_def();
    let start = settings.geometry_clock().current();

    let pair = GeometryPair::new(Vec2::new(0.4, 0.4), Vec2::new(0.2, 0.0));
    settings.set_geometry(&def, Facing::East, Some(pair));
    settings.set_geometry(&def, Facing::South, None);

    let geometry = settings.geometry("tube_tv").unwrap();
    assert_eq!(geometry.pair_for(Facing::East), Some(pair));
    assert!(!geometry.is_supported(Facing::South));
    assert!(settings.geometry_clock().current() > start);

    let before_reset = settings.geometry_clock().current();
    settings.reset_geometry(&def);
    assert_eq!(settings.geometry("tube_tv"), Some(&def.default_geometry));
    assert!(settings.geometry_clock().current() > before_reset);
}

#[test]
fn test_replace_with_keeps_clock_moving() {
    let mut settings = ScreenSettings::default();
    settings.set_fit_policy(FitPolicy::Fit);
    let before = settings.geometry_clock().current();

    let mut loaded = ScreenSettings::default();
    loaded.play_always = false;
    settings.replace_with(loaded);

    assert!(!settings.play_always);
    assert_eq!(settings.fit_policy(), FitPolicy::Stretch);
    assert!(settings.geometry_clock().current() > before);
}

// -----------------------------------------------------------------------------
// Settings file
// -----------------------------------------------------------------------------

#[test]
fn test_parse_partial_file_uses_defaults() {
    let settings = parse_settings("test.ron", "(play_always: false, fit_policy: Fill)").unwrap();
    assert!(!settings.play_always);
    assert_eq!(settings.fit_policy(), FitPolicy::Fill);
    assert_eq!(settings.seconds_between_shows, 60.0);
}

#[test]
fn test_parse_clamps_out_of_range_values() {
    let settings = parse_settings(
        "test.ron",
        "(seconds_between_shows: 0.5, power_draw_on: 99999.0)",
    )
    .unwrap();
    assert_eq!(settings.seconds_between_shows, 1.0);
    assert_eq!(settings.power_draw_on, 10_000.0);
}

#[test]
fn test_parse_reads_geometry_and_status() {
    let text = r#"(
        show_status: {
            "news": { "tube_tv": true, "flatscreen_tv": false },
        },
        geometry: {
            "tube_tv": (
                north: (scale: (0.5, 0.5), offset: (0.0, -0.1)),
            ),
        },
    )"#;
    let settings = parse_settings("test.ron", text).unwrap();

    assert_eq!(settings.show_status.get("news", "tube_tv"), Some(true));
    assert_eq!(settings.show_status.get("news", "flatscreen_tv"), Some(false));
    let geometry = settings.geometry("tube_tv").unwrap();
    assert!(geometry.is_supported(Facing::North));
    assert!(!geometry.is_supported(Facing::South));
    assert_eq!(geometry.offset_for(Facing::North), Some(Vec2::new(0.0, -0.1)));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_settings("broken.ron", "(play_always: maybe)").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let path = std::env::temp_dir().join("screen_shows_no_such_settings_file.ron");
    let _ = fs::remove_file(&path);
    let settings = load_settings(&path).unwrap();
    assert!(settings.play_always);
}

#[test]
fn test_saved_file_loads_back() {
    let dir = std::env::temp_dir().join(format!("screen_shows_settings_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("screen_shows.ron");

    let mut settings = ScreenSettings::default();
    settings.play_always = false;
    settings.set_fit_policy(FitPolicy::Fit);
    settings.show_status.set("news", "tube_tv", false);
    let pair = GeometryPair::new(Vec2::new(0.25, 0.5), Vec2::new(0.1, 0.0));
    settings.set_geometry(&tube_def(), Facing::West, Some(pair));

    save_settings(&path, &settings).unwrap();
    let loaded = load_settings(&path).unwrap();

    assert!(!loaded.play_always);
    assert_eq!(loaded.fit_policy(), FitPolicy::Fit);
    assert_eq!(loaded.show_status, settings.show_status);
    assert_eq!(loaded.geometry("tube_tv"), settings.geometry("tube_tv"));

    let mut loaded = loaded;
    assert_eq!(loaded.geometry_for(&tube_def()).pair_for(Facing::West), Some(pair));

    let _ = fs::remove_dir_all(&dir);
}

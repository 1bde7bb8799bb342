//! Geometry domain: tests for facings, rotation geometry, and fit policy.

use bevy::math::{Vec2, Vec3};

use super::{FitPolicy, Facing, GeometryPair, RotationGeometry, SCREEN_ALTITUDE, resolve_size};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-4
}

fn south_only() -> RotationGeometry {
    RotationGeometry::default().with(
        Facing::South,
        GeometryPair::new(Vec2::new(0.8, 0.5), Vec2::new(0.0, 0.1)),
    )
}

// -----------------------------------------------------------------------------
// RotationGeometry tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_geometry_supports_nothing() {
    let geometry = RotationGeometry::default();
    for facing in Facing::ALL {
        assert!(!geometry.is_supported(facing));
        assert!(geometry.scale_for(facing).is_none());
        assert!(geometry.offset_for(facing).is_none());
    }
    assert!(!geometry.supports_any());
}

#[test]
fn test_supported_iff_pair_present() {
    let geometry = south_only();
    assert!(geometry.is_supported(Facing::South));
    assert!(!geometry.is_supported(Facing::North));
    assert!(!geometry.is_supported(Facing::East));
    assert!(!geometry.is_supported(Facing::West));
    assert_eq!(geometry.scale_for(Facing::South), Some(Vec2::new(0.8, 0.5)));
    assert_eq!(geometry.offset_for(Facing::South), Some(Vec2::new(0.0, 0.1)));
}

#[test]
fn test_clearing_a_facing_removes_support() {
    let mut geometry = south_only();
    geometry.set(Facing::South, None);
    assert!(!geometry.is_supported(Facing::South));
}

#[test]
fn test_reset_to_defaults_overwrites_all_facings() {
    let defaults = south_only();
    let mut edited = RotationGeometry::default().with(
        Facing::East,
        GeometryPair::new(Vec2::ONE, Vec2::ZERO),
    );

    edited.reset_to_defaults(&defaults);

    assert_eq!(edited, defaults);
    assert!(!edited.is_supported(Facing::East));
}

#[test]
fn test_world_offset_negates_depth() {
    let geometry = south_only();
    let offset = geometry.world_offset(Facing::South).unwrap();
    assert_eq!(offset, Vec3::new(0.0, SCREEN_ALTITUDE, -0.1));
    assert!(geometry.world_offset(Facing::West).is_none());
}

#[test]
fn test_facing_rotation_cycles() {
    let mut facing = Facing::North;
    for _ in 0..4 {
        facing = facing.rotated_clockwise();
    }
    assert_eq!(facing, Facing::North);
    assert_eq!(Facing::North.rotated_clockwise(), Facing::East);
}

// -----------------------------------------------------------------------------
// FitPolicy tests
// -----------------------------------------------------------------------------

#[test]
fn test_stretch_returns_container() {
    let cases = [
        (Vec2::new(100.0, 50.0), Vec2::new(200.0, 50.0)),
        (Vec2::new(1.0, 3.0), Vec2::new(640.0, 480.0)),
        (Vec2::new(2.5, 2.5), Vec2::new(16.0, 9.0)),
    ];
    for (container, source) in cases {
        assert_eq!(resolve_size(container, source, FitPolicy::Stretch), container);
    }
}

#[test]
fn test_fit_and_fill_on_wide_source() {
    let container = Vec2::new(100.0, 50.0);
    let source = Vec2::new(200.0, 50.0);

    assert!(approx(
        resolve_size(container, source, FitPolicy::Fit),
        Vec2::new(100.0, 25.0)
    ));
    assert!(approx(
        resolve_size(container, source, FitPolicy::Fill),
        Vec2::new(200.0, 50.0)
    ));
}

#[test]
fn test_fit_and_fill_on_tall_source() {
    let container = Vec2::new(100.0, 50.0);
    let source = Vec2::new(50.0, 100.0);

    // Not wide: Fit matches height, Fill matches width.
    assert!(approx(
        resolve_size(container, source, FitPolicy::Fit),
        Vec2::new(25.0, 50.0)
    ));
    assert!(approx(
        resolve_size(container, source, FitPolicy::Fill),
        Vec2::new(100.0, 200.0)
    ));
}

#[test]
fn test_fit_preserves_aspect_and_stays_inside() {
    let containers = [Vec2::new(1.6, 0.9), Vec2::new(3.0, 1.0), Vec2::new(0.5, 2.0)];
    let sources = [
        Vec2::new(640.0, 480.0),
        Vec2::new(1920.0, 1080.0),
        Vec2::new(300.0, 900.0),
    ];

    for container in containers {
        for source in sources {
            let size = resolve_size(container, source, FitPolicy::Fit);
            let expected_aspect = source.x / source.y;
            assert!((size.x / size.y - expected_aspect).abs() < 1e-3);
            assert!(size.x <= container.x + 1e-4);
            assert!(size.y <= container.y + 1e-4);
        }
    }
}

#[test]
fn test_fill_covers_container() {
    let container = Vec2::new(1.6, 0.9);
    let size = resolve_size(container, Vec2::new(640.0, 480.0), FitPolicy::Fill);
    assert!(size.x >= container.x - 1e-4);
    assert!(size.y >= container.y - 1e-4);
}

#[test]
fn test_from_index_falls_back_to_stretch() {
    assert_eq!(FitPolicy::from_index(0), FitPolicy::Stretch);
    assert_eq!(FitPolicy::from_index(1), FitPolicy::Fit);
    assert_eq!(FitPolicy::from_index(2), FitPolicy::Fill);
    assert_eq!(FitPolicy::from_index(7), FitPolicy::Stretch);
    assert_eq!(FitPolicy::from_index(-1), FitPolicy::Stretch);
}

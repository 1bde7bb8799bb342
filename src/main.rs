use bevy::prelude::*;
use screen_shows::content::ScreenDefRegistry;
use screen_shows::prelude::*;
use screen_shows::screen::PIXELS_PER_UNIT;

/// Gap between demo televisions, in map units.
const TV_SPACING: f32 = 1.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Screen shows".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(ScreenShowsPlugin::default())
    .add_systems(Startup, spawn_camera)
    .add_systems(PostStartup, spawn_televisions);

    #[cfg(feature = "dev-tools")]
    app.add_systems(Update, (watch_while_held, handle_screen_hotkeys));

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// One television per screen type, side by side.
fn spawn_televisions(mut commands: Commands, defs: Res<ScreenDefRegistry>) {
    let ids = defs.ids();
    let total_width: f32 = ids
        .iter()
        .filter_map(|id| defs.get(id))
        .map(|def| def.draw_size.x + TV_SPACING)
        .sum();

    let mut x = -total_width / 2.0;
    for id in &ids {
        let Some(def) = defs.get(id) else {
            continue;
        };
        x += def.draw_size.x / 2.0;
        commands.spawn((
            Television::new(def.id.clone()),
            Facing::South,
            PowerTrader::new(def.power_consumption),
            Sprite::from_color(Color::srgb(0.15, 0.15, 0.18), def.draw_size * PIXELS_PER_UNIT),
            Transform::from_xyz(x * PIXELS_PER_UNIT, 0.0, 0.0),
        ));
        x += def.draw_size.x / 2.0 + TV_SPACING;
    }
    info!("Spawned {} demo televisions", ids.len());
}

/// Space held: every television counts as watched.
#[cfg(feature = "dev-tools")]
fn watch_while_held(
    keyboard: Res<ButtonInput<KeyCode>>,
    screens: Query<Entity, With<Screen>>,
    mut watched: MessageWriter<ScreenWatched>,
) {
    if !keyboard.pressed(KeyCode::Space) {
        return;
    }
    for screen in &screens {
        watched.write(ScreenWatched { screen });
    }
}

/// N next show, 1-3 pick a show, A auto-advance, R rotate, H power,
/// F fit policy, P pause, S save settings.
#[cfg(feature = "dev-tools")]
#[allow(clippy::too_many_arguments)]
fn handle_screen_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut time: ResMut<Time<Virtual>>,
    mut settings: ResMut<ScreenSettings>,
    mut screens: Query<(Entity, &mut Facing, &mut PowerTrader), With<Screen>>,
    mut next: MessageWriter<NextShow>,
    mut select: MessageWriter<SelectShow>,
    mut toggle: MessageWriter<ToggleAutoAdvance>,
    mut save: MessageWriter<SaveScreenSettings>,
) {
    let picked = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3]
        .iter()
        .position(|key| keyboard.just_pressed(*key));

    for (screen, mut facing, mut power) in &mut screens {
        if keyboard.just_pressed(KeyCode::KeyN) {
            next.write(NextShow { screen });
        }
        if let Some(index) = picked {
            select.write(SelectShow { screen, index });
        }
        if keyboard.just_pressed(KeyCode::KeyA) {
            toggle.write(ToggleAutoAdvance { screen });
        }
        if keyboard.just_pressed(KeyCode::KeyR) {
            *facing = facing.rotated_clockwise();
        }
        if keyboard.just_pressed(KeyCode::KeyH) {
            power.power_on = !power.power_on;
        }
    }

    if keyboard.just_pressed(KeyCode::KeyF) {
        let next_policy = FitPolicy::from_index(settings.fit_policy() as i64 + 1);
        settings.set_fit_policy(next_policy);
        info!("Fit policy: {:?}", next_policy);
    }

    if keyboard.just_pressed(KeyCode::KeyP) {
        if time.is_paused() {
            time.unpause();
        } else {
            time.pause();
        }
    }

    if keyboard.just_pressed(KeyCode::KeyS) {
        save.write(SaveScreenSettings);
    }
}

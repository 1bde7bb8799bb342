//! Screen domain: systems binding screen playback to the host world.

use bevy::prelude::*;

use crate::content::ScreenDefRegistry;
use crate::geometry::Facing;
use crate::settings::ScreenSettings;
use crate::shows::ShowRegistry;

use super::components::{PowerTrader, SavedScreen, ScreenFrame, ScreenFrameLink, Television};
use super::events::{NextShow, ScreenWatched, SelectShow, SelectShowById, ToggleAutoAdvance};
use super::playback::{Screen, ScreenContext};

/// Pixels per map unit when placing frame sprites.
pub const PIXELS_PER_UNIT: f32 = 64.0;

/// Map-space frame offset (x, altitude, depth) to a 2D local translation.
/// Altitude becomes z so the frame layers just above its object.
pub fn frame_translation(offset: Vec3) -> Vec3 {
    Vec3::new(
        offset.x * PIXELS_PER_UNIT,
        -offset.z * PIXELS_PER_UNIT,
        offset.y,
    )
}

/// Attach playback state and a frame sprite to newly spawned televisions.
pub(crate) fn setup_new_screens(
    mut commands: Commands,
    defs: Res<ScreenDefRegistry>,
    mut settings: ResMut<ScreenSettings>,
    new_screens: Query<(Entity, &Television, Option<&SavedScreen>), Added<Television>>,
) {
    for (entity, tv, saved) in &new_screens {
        let Some(def) = defs.get(&tv.def_id) else {
            warn!("Television {:?} has unknown screen type '{}'", entity, tv.def_id);
            continue;
        };
        settings.geometry_for(def);

        let screen = saved
            .map(|saved| Screen::from_record(&saved.0))
            .unwrap_or_default();

        let frame = commands
            .spawn((
                ScreenFrame,
                Sprite::default(),
                Transform::default(),
                Visibility::Hidden,
                ChildOf(entity),
            ))
            .id();

        commands
            .entity(entity)
            .insert((screen, ScreenFrameLink(frame)))
            .remove::<SavedScreen>();
    }
}

/// Apply watch signals and user commands before the tick runs.
pub(crate) fn apply_screen_requests(
    shows: Res<ShowRegistry>,
    mut watched: MessageReader<ScreenWatched>,
    mut select: MessageReader<SelectShow>,
    mut select_by_id: MessageReader<SelectShowById>,
    mut next: MessageReader<NextShow>,
    mut toggle: MessageReader<ToggleAutoAdvance>,
    mut screens: Query<(&Television, &mut Screen)>,
) {
    for msg in watched.read() {
        if let Ok((_, mut screen)) = screens.get_mut(msg.screen) {
            screen.notify_watched();
        }
    }

    for msg in select.read() {
        if let Ok((tv, mut screen)) = screens.get_mut(msg.screen) {
            screen.change_show(&shows, &tv.def_id, msg.index);
        }
    }

    for msg in select_by_id.read() {
        if let Ok((tv, mut screen)) = screens.get_mut(msg.screen) {
            screen.change_show_to(&shows, &tv.def_id, &msg.show_id);
        }
    }

    for msg in next.read() {
        if let Ok((tv, mut screen)) = screens.get_mut(msg.screen) {
            screen.next_show(&shows, &tv.def_id);
        }
    }

    for msg in toggle.read() {
        if let Ok((_, mut screen)) = screens.get_mut(msg.screen) {
            screen.toggle_auto_advance();
        }
    }
}

/// Fixed-rate tick: advance playback and update power draw.
pub(crate) fn tick_screens(
    defs: Res<ScreenDefRegistry>,
    shows: Res<ShowRegistry>,
    settings: Res<ScreenSettings>,
    mut screens: Query<(
        &Television,
        &mut Screen,
        Option<&Facing>,
        Option<&mut PowerTrader>,
    )>,
) {
    for (tv, mut screen, facing, mut power) in &mut screens {
        let (Some(def), Some(geometry)) = (defs.get(&tv.def_id), settings.geometry(&tv.def_id))
        else {
            continue;
        };

        let ctx = ScreenContext {
            shows: &shows,
            settings: &settings,
            geometry,
            type_id: &tv.def_id,
            facing: facing.copied().unwrap_or_default(),
            draw_size: def.draw_size,
        };
        screen.tick(&ctx, power.as_deref_mut());
    }
}

/// Per-frame draw: push the resolved frame into each screen's sprite.
pub(crate) fn draw_screens(
    time: Res<Time<Virtual>>,
    images: Res<Assets<Image>>,
    defs: Res<ScreenDefRegistry>,
    shows: Res<ShowRegistry>,
    settings: Res<ScreenSettings>,
    mut screens: Query<(
        &Television,
        &mut Screen,
        &ScreenFrameLink,
        Option<&Facing>,
        Option<&PowerTrader>,
    )>,
    mut frames: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<ScreenFrame>>,
) {
    let paused = time.is_paused();

    for (tv, mut screen, link, facing, power) in &mut screens {
        let (Some(def), Some(geometry)) = (defs.get(&tv.def_id), settings.geometry(&tv.def_id))
        else {
            continue;
        };
        let Ok((mut sprite, mut transform, mut visibility)) = frames.get_mut(link.0) else {
            continue;
        };

        let ctx = ScreenContext {
            shows: &shows,
            settings: &settings,
            geometry,
            type_id: &tv.def_id,
            facing: facing.copied().unwrap_or_default(),
            draw_size: def.draw_size,
        };

        let resolved = screen.draw(&ctx, power, paused, |handle| {
            images.get(handle).map(|image| image.size_f32())
        });

        match resolved {
            Some(frame) => {
                if sprite.image != frame.image {
                    sprite.image = frame.image;
                }
                sprite.custom_size = Some(frame.size * PIXELS_PER_UNIT);
                transform.translation = frame_translation(frame.offset);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

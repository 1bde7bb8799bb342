//! Screen playback: which show and frame a screen is on, when it advances,
//! and where its current frame is drawn.

use bevy::prelude::*;

use crate::core::{Versioned, seconds_to_ticks};
use crate::geometry::{Facing, RotationGeometry, resolve_size};
use crate::settings::ScreenSettings;
use crate::shows::{Show, ShowCatalog, ShowRegistry};

use super::components::PowerTrader;
use super::record::ScreenRecord;

/// Ticks a screen keeps counting as watched after the last watch signal.
pub const WATCH_TICKS: u32 = 10;

/// Everything a screen reads from the world for one tick or draw.
pub struct ScreenContext<'a> {
    pub shows: &'a ShowRegistry,
    pub settings: &'a ScreenSettings,
    /// Geometry of this screen's type, from the settings.
    pub geometry: &'a RotationGeometry,
    pub type_id: &'a str,
    pub facing: Facing,
    /// Size the screen object is drawn at, in map units.
    pub draw_size: Vec2,
}

/// The frame to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrame {
    pub image: Handle<Image>,
    /// Offset from the object's draw position: (x, altitude, depth).
    pub offset: Vec3,
    /// Rendered size in map units.
    pub size: Vec2,
    pub facing: Facing,
}

/// Placement for the facing the screen was last seen in.
#[derive(Debug, Clone, Copy, Default)]
struct Placement {
    facing: Option<Facing>,
    supported: bool,
    offset: Vec3,
}

impl Placement {
    fn resolve(geometry: &RotationGeometry, facing: Facing) -> Self {
        let supported = geometry.is_supported(facing);
        let offset = if supported {
            geometry.world_offset(facing).unwrap_or_default()
        } else {
            Vec3::ZERO
        };
        Self {
            facing: Some(facing),
            supported,
            offset,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Screen {
    catalog: ShowCatalog,
    placement: Versioned<Placement>,
    /// Id of the show last shown; survives catalog refreshes and saves.
    show_id: Option<String>,
    /// Position in `catalog`, only meaningful for the current snapshot.
    show_index: usize,
    frame_index: usize,
    show_ticks: u32,
    frame_ticks: u32,
    frame_dirty: bool,
    frame_image: Option<Handle<Image>>,
    size: Option<Vec2>,
    watch_timer: u32,
    auto_advance: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            catalog: ShowCatalog::default(),
            placement: Versioned::default(),
            show_id: None,
            show_index: 0,
            frame_index: 0,
            show_ticks: 0,
            frame_ticks: 0,
            frame_dirty: true,
            frame_image: None,
            size: None,
            watch_timer: 0,
            auto_advance: true,
        }
    }
}

impl Screen {
    pub fn from_record(record: &ScreenRecord) -> Self {
        Self {
            show_id: record.show_id.clone(),
            frame_index: record.frame_index,
            show_ticks: record.show_ticks,
            frame_ticks: record.frame_ticks,
            auto_advance: record.auto_advance,
            ..default()
        }
    }

    pub fn record(&self) -> ScreenRecord {
        ScreenRecord {
            show_id: self.show_id.clone(),
            frame_index: self.frame_index,
            show_ticks: self.show_ticks,
            frame_ticks: self.frame_ticks,
            auto_advance: self.auto_advance,
        }
    }

    pub fn show_id(&self) -> Option<&str> {
        self.show_id.as_deref()
    }

    pub fn show_index(&self) -> usize {
        self.show_index
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn show_ticks(&self) -> u32 {
        self.show_ticks
    }

    pub fn frame_ticks(&self) -> u32 {
        self.frame_ticks
    }

    pub fn watch_timer(&self) -> u32 {
        self.watch_timer
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// A watcher looked at the screen this tick.
    pub fn notify_watched(&mut self) {
        self.watch_timer = WATCH_TICKS;
    }

    pub fn toggle_auto_advance(&mut self) {
        self.auto_advance = !self.auto_advance;
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    fn refresh_catalog(&mut self, shows: &ShowRegistry, type_id: &str) {
        if self.catalog.refresh(shows, type_id) {
            self.frame_dirty = true;
            self.resolve_show_id(shows);
        }
    }

    /// Point `show_index` back at the saved show after the catalog changed.
    /// If the show is gone the index is left alone.
    fn resolve_show_id(&mut self, shows: &ShowRegistry) {
        let Some(id) = self.show_id.as_deref() else {
            return;
        };
        if let Some(position) = self.catalog.position_of(shows, id) {
            self.show_index = position;
        }
    }

    /// Shows this screen can play, in catalog order.
    pub fn available_shows<'r>(&mut self, shows: &'r ShowRegistry, type_id: &str) -> Vec<&'r Show> {
        self.refresh_catalog(shows, type_id);
        self.catalog.shows(shows)
    }

    /// The show currently selected, if the catalog has any.
    pub fn current_show<'r>(&mut self, shows: &'r ShowRegistry, type_id: &str) -> Option<&'r Show> {
        self.refresh_catalog(shows, type_id);
        if self.catalog.is_empty() {
            return None;
        }

        let show = self
            .catalog
            .show(shows, self.show_index % self.catalog.len())?;
        if self.show_id.as_deref() != Some(show.id.as_str()) {
            self.show_id = Some(show.id.clone());
        }
        Some(show)
    }

    fn reset_playback(&mut self) {
        self.frame_index = 0;
        self.show_ticks = 0;
        self.frame_ticks = 0;
        self.frame_dirty = true;
    }

    /// Switch to the show at `index` in this screen's catalog.
    /// Out-of-range indices are ignored; returns whether the switch happened.
    pub fn change_show(&mut self, shows: &ShowRegistry, type_id: &str, index: usize) -> bool {
        self.refresh_catalog(shows, type_id);
        let Some(show) = self.catalog.show(shows, index) else {
            return false;
        };

        self.show_id = Some(show.id.clone());
        self.show_index = index;
        self.reset_playback();
        debug!("Screen switched to show '{}'", show.id);
        true
    }

    /// Switch to the show with `show_id`, if this screen's catalog lists it.
    pub fn change_show_to(&mut self, shows: &ShowRegistry, type_id: &str, show_id: &str) -> bool {
        self.refresh_catalog(shows, type_id);
        match self.catalog.position_of(shows, show_id) {
            Some(index) => self.change_show(shows, type_id, index),
            None => false,
        }
    }

    /// Switch to the show after the current one, wrapping around.
    pub fn next_show(&mut self, shows: &ShowRegistry, type_id: &str) -> bool {
        self.refresh_catalog(shows, type_id);
        let count = self.catalog.len();
        if count == 0 {
            return false;
        }
        self.change_show(shows, type_id, (self.show_index % count + 1) % count)
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Re-resolve placement when the facing changed or the geometry clock
    /// moved since the last look.
    fn sync_geometry(&mut self, ctx: &ScreenContext) {
        if self.placement.get().facing != Some(ctx.facing) {
            self.placement.invalidate();
        }

        let clock = ctx.settings.geometry_clock();
        if self
            .placement
            .refresh(clock, || Placement::resolve(ctx.geometry, ctx.facing))
        {
            self.size = None;
            self.frame_dirty = true;
        }
    }

    /// Rendered size for a frame image of `source` pixels.
    fn screen_size(&self, ctx: &ScreenContext, source: Vec2) -> Vec2 {
        let scale = ctx.geometry.scale_for(ctx.facing).unwrap_or(Vec2::ONE);
        resolve_size(scale * ctx.draw_size, source, ctx.settings.fit_policy())
    }

    // -------------------------------------------------------------------------
    // Playback
    // -------------------------------------------------------------------------

    /// Whether the screen shows a picture right now.
    pub fn is_playing(&mut self, ctx: &ScreenContext, power: Option<&PowerTrader>) -> bool {
        if !self.placement.get().supported {
            return false;
        }

        if self.watch_timer == 0 && !ctx.settings.play_always {
            return false;
        }

        if power.is_some_and(|p| !p.power_on) {
            return false;
        }

        self.current_show(ctx.shows, ctx.type_id)
            .is_some_and(|show| !show.frames.is_empty())
    }

    /// One simulation tick. Advances playback while playing and reports the
    /// resulting power draw. Returns whether the screen is playing.
    pub fn tick(&mut self, ctx: &ScreenContext, power: Option<&mut PowerTrader>) -> bool {
        self.sync_geometry(ctx);

        let playing = self.is_playing(ctx, power.as_deref());
        if playing {
            self.advance(ctx);
        }

        if let Some(power) = power {
            power.power_output = ctx.settings.power_output(power.base_consumption, playing);
        }
        playing
    }

    /// Count one tick toward the next show (when watched) or else toward the
    /// next frame. At most one of the two advances per tick.
    fn advance(&mut self, ctx: &ScreenContext) {
        let count = self.catalog.len();
        if count == 0 {
            return;
        }

        let watched = self.watch_timer > 0 && self.auto_advance;
        if watched {
            self.show_ticks = self.show_ticks.saturating_add(1);
        }

        if watched && self.show_ticks > seconds_to_ticks(ctx.settings.seconds_between_shows) {
            self.show_index = (self.show_index + 1) % count;
            self.reset_playback();
            if let Some(show) = self.catalog.show(ctx.shows, self.show_index) {
                debug!("Watcher moved screen to show '{}'", show.id);
                self.show_id = Some(show.id.clone());
            }
            return;
        }

        let Some(show) = self.catalog.show(ctx.shows, self.show_index % count) else {
            return;
        };
        let frames = show.frames.len();
        if frames == 0 {
            return;
        }

        self.frame_ticks = self.frame_ticks.saturating_add(1);
        if self.frame_ticks > seconds_to_ticks(show.seconds_between_frames) {
            self.frame_index = (self.frame_index + 1) % frames;
            self.frame_ticks = 0;
            self.frame_dirty = true;
        }
    }

    /// One draw call. Returns the frame to render while playing, then lets
    /// the watch timer decay unless the host clock is paused.
    ///
    /// `image_size` reports an image's pixel size, or `None` while it is
    /// still loading.
    pub fn draw(
        &mut self,
        ctx: &ScreenContext,
        power: Option<&PowerTrader>,
        paused: bool,
        image_size: impl Fn(&Handle<Image>) -> Option<Vec2>,
    ) -> Option<ResolvedFrame> {
        self.sync_geometry(ctx);

        let frame = if self.is_playing(ctx, power) {
            self.resolve_frame(ctx, image_size)
        } else {
            None
        };

        if !paused {
            self.watch_timer = self.watch_timer.saturating_sub(1);
        }
        frame
    }

    fn resolve_frame(
        &mut self,
        ctx: &ScreenContext,
        image_size: impl Fn(&Handle<Image>) -> Option<Vec2>,
    ) -> Option<ResolvedFrame> {
        let show = self.current_show(ctx.shows, ctx.type_id)?;
        if show.frames.is_empty() {
            return None;
        }

        if self.frame_dirty || self.frame_image.is_none() || self.size.is_none() {
            let frame = &show.frames[self.frame_index % show.frames.len()];
            if self.size.is_none() {
                let source = image_size(&frame.image)?;
                self.size = Some(self.screen_size(ctx, source));
            }
            self.frame_image = Some(frame.image.clone());
            self.frame_dirty = false;
        }

        Some(ResolvedFrame {
            image: self.frame_image.clone()?,
            offset: self.placement.get().offset,
            size: self.size?,
            facing: ctx.facing,
        })
    }
}

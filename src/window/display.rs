use std::time::{Duration, Instant};

use egui::{Color32, ViewportCommand, WindowLevel};

use crate::audio::Beeper;
use crate::config::{Rgb, Tone};
use crate::display::{Display, Position, TickId};
use crate::error::Result;
use crate::scheduler::Scheduler;

pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// What gets painted on every frame
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub time_text: String,
    pub time_color: Rgb,
    pub progress: f64,
    pub helper_visible: bool,
    pub background: Rgb,
}

/// [`Display`] backed by an egui viewport.
///
/// Text and colors are kept in a [`Surface`] and drawn on the next frame;
/// window state changes go out as viewport commands right away.
pub struct WindowDisplay {
    ctx: egui::Context,
    surface: Surface,
    position: Position,
    scheduler: Scheduler,
    beeper: Beeper,
}

impl WindowDisplay {
    pub fn new(ctx: egui::Context, beeper: Beeper) -> Self {
        Self {
            ctx,
            surface: Surface::default(),
            position: Position::default(),
            scheduler: Scheduler::new(),
            beeper,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Record where the window manager says the window is
    pub fn sync_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn take_due(&mut self, now: Instant) -> Vec<TickId> {
        self.scheduler.take_due(now)
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }
}

impl Display for WindowDisplay {
    fn set_time_text(&mut self, text: &str) {
        self.surface.time_text = text.to_string();
    }

    fn set_time_color(&mut self, color: Rgb) {
        self.surface.time_color = color;
    }

    fn set_progress(&mut self, fraction: f64) {
        self.surface.progress = fraction;
    }

    fn set_helper_text_visible(&mut self, visible: bool) {
        self.surface.helper_visible = visible;
    }

    fn set_background(&mut self, color: Rgb) {
        self.surface.background = color;
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.ctx
            .send_viewport_cmd(ViewportCommand::Fullscreen(fullscreen));
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        let level = if on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        self.ctx.send_viewport_cmd(ViewportCommand::WindowLevel(level));
        if on_top {
            self.ctx.send_viewport_cmd(ViewportCommand::Focus);
        }
    }

    fn window_position(&self) -> Position {
        self.position
    }

    // `position` is left alone until the next `sync_position`; events in
    // this frame are still relative to where the window was
    fn set_window_position(&mut self, position: Position) {
        self.ctx.send_viewport_cmd(ViewportCommand::OuterPosition(
            egui::pos2(position.x, position.y),
        ));
    }

    fn schedule_after(&mut self, delay: Duration, tick: TickId) {
        self.scheduler.schedule(Instant::now(), delay, tick);
        self.ctx.request_repaint_after(delay);
    }

    fn play_completion_sound(&mut self, tone: Tone) -> Result<()> {
        self.beeper.play(tone)
    }
}

use std::time::{Duration, Instant};

use chrono::Local;

use crate::audio::Beeper;
use crate::config::{Rgb, Tone};
use crate::display::{Display, Position, TickId};
use crate::error::Result;
use crate::notification;
use crate::scheduler::Scheduler;

/// Everything the terminal draws
#[derive(Debug, Clone, Default)]
pub struct View {
    pub time_text: String,
    pub time_color: Rgb,
    pub progress: f64,
    pub show_help: bool,
    pub background: Rgb,
    pub zen: bool,
}

/// Terminal side of the timer: holds what to draw and the pending ticks
pub struct App {
    pub view: View,
    scheduler: Scheduler,
    beeper: Beeper,
}

impl App {
    pub fn new(beeper: Beeper) -> Self {
        Self {
            view: View::default(),
            scheduler: Scheduler::new(),
            beeper,
        }
    }

    pub fn take_due(&mut self, now: Instant) -> Vec<TickId> {
        self.scheduler.take_due(now)
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }
}

impl Display for App {
    fn set_time_text(&mut self, text: &str) {
        self.view.time_text = text.to_string();
    }

    fn set_time_color(&mut self, color: Rgb) {
        self.view.time_color = color;
    }

    fn set_progress(&mut self, fraction: f64) {
        self.view.progress = fraction;
    }

    fn set_helper_text_visible(&mut self, visible: bool) {
        self.view.show_help = visible;
    }

    fn set_background(&mut self, color: Rgb) {
        self.view.background = color;
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.view.zen = fullscreen;
    }

    // A terminal cannot be raised, so completion is announced on the desktop
    fn set_always_on_top(&mut self, on_top: bool) {
        if on_top {
            notification::notify_session_complete(Local::now());
        }
    }

    fn window_position(&self) -> Position {
        Position::default()
    }

    fn set_window_position(&mut self, _position: Position) {}

    fn schedule_after(&mut self, delay: Duration, tick: TickId) {
        self.scheduler.schedule(Instant::now(), delay, tick);
    }

    fn play_completion_sound(&mut self, tone: Tone) -> Result<()> {
        self.beeper.play(tone)
    }
}

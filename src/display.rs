//! The surface the timer controller drives.
//!
//! A frontend (desktop window, terminal) implements [`Display`] and hands it
//! to the controller. The controller only ever pushes state into it; the
//! one thing it reads back is the window position while dragging.

use std::ops::{Add, Sub};
use std::time::Duration;

use crate::config::{Rgb, Tone};
use crate::error::Result;

/// Identifies one armed tick so late arrivals can be told apart from the
/// tick the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickId(pub u64);

/// Screen coordinates in logical points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

pub trait Display {
    fn set_time_text(&mut self, text: &str);
    fn set_time_color(&mut self, color: Rgb);

    /// Fraction of the session still remaining, in `[0.0, 1.0]`
    fn set_progress(&mut self, fraction: f64);

    fn set_helper_text_visible(&mut self, visible: bool);
    fn set_background(&mut self, color: Rgb);
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn set_always_on_top(&mut self, on_top: bool);

    /// Where the window manager last reported the window. Moves requested
    /// through [`Display::set_window_position`] show up here only once the
    /// window has actually moved, so pointer positions (which are relative
    /// to the window) and this position always describe the same moment.
    fn window_position(&self) -> Position;
    fn set_window_position(&mut self, position: Position);

    /// Deliver `Input::Tick(tick)` back to the controller once `delay` has
    /// passed, on the same thread that handles input.
    fn schedule_after(&mut self, delay: Duration, tick: TickId);

    fn play_completion_sound(&mut self, tone: Tone) -> Result<()>;
}

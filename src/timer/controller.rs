use tracing::{debug, info};

use crate::config::Config;
use crate::display::{Display, Position, TickId};
use crate::error::Result;

use super::state::{Phase, TimerState};

/// Everything that can happen to the timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Toggle,
    Reset,
    ToggleFullscreen,
    Quit,
    Tick(TickId),
    DragStart(Position),
    DragMove(Position),
    DragEnd,
}

/// Window and pointer, both in screen coordinates, when a drag began
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    window: Position,
    pointer: Position,
}

/// What the frontend should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Controller<D> {
    config: Config,
    state: TimerState,
    display: D,
    // The one tick we are waiting for; anything else that arrives is stale.
    armed: Option<TickId>,
    next_tick: u64,
    drag: Option<Drag>,
    quitting: bool,
}

impl<D: Display> Controller<D> {
    /// Create the controller and paint the initial screen
    pub fn new(config: Config, display: D) -> Self {
        let mut controller = Self {
            state: TimerState::new(config.total_seconds),
            config,
            display,
            armed: None,
            next_tick: 0,
            drag: None,
            quitting: false,
        };
        controller.render_clock();
        controller.render_mode();
        controller
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Core update function
    pub fn handle(&mut self, input: Input) -> Result<Flow> {
        if self.quitting {
            debug!(?input, "ignoring input after quit");
            return Ok(Flow::Quit);
        }

        match input {
            Input::Toggle => self.toggle(),
            Input::Reset => self.reset(),
            Input::ToggleFullscreen => self.toggle_fullscreen(),
            Input::Quit => {
                info!("quit requested");
                self.quitting = true;
                self.state.set_running(false);
                self.armed = None;
                return Ok(Flow::Quit);
            }
            Input::Tick(tick) => self.tick(tick)?,
            Input::DragStart(at) => {
                if !self.state.is_fullscreen() {
                    let window = self.display.window_position();
                    self.drag = Some(Drag {
                        window,
                        pointer: window + at,
                    });
                }
            }
            Input::DragMove(to) => {
                if let Some(drag) = self.drag {
                    // Pointer positions are window-relative; go through
                    // screen space so several moves in one frame agree
                    let pointer = self.display.window_position() + to;
                    self.display
                        .set_window_position(drag.window + (pointer - drag.pointer));
                }
            }
            Input::DragEnd => self.drag = None,
        }

        Ok(Flow::Continue)
    }

    /// Handle one event-loop pass: everything queued since the last pass
    /// first, then the ticks that came due, stopping at the first quit.
    pub fn handle_frame(
        &mut self,
        queued: impl IntoIterator<Item = Input>,
        due: impl IntoIterator<Item = TickId>,
    ) -> Result<Flow> {
        let inputs = queued.into_iter().chain(due.into_iter().map(Input::Tick));
        for input in inputs {
            if self.handle(input)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn toggle(&mut self) {
        match self.state.phase() {
            Phase::Idle => {
                info!(remaining = self.state.remaining_seconds(), "timer started");
                self.state.set_running(true);
                self.arm();
            }
            Phase::Running => {
                info!(remaining = self.state.remaining_seconds(), "timer paused");
                self.state.set_running(false);
                self.armed = None;
            }
            Phase::Expired => debug!("toggle ignored, session already complete"),
        }
    }

    fn tick(&mut self, tick: TickId) -> Result<()> {
        if self.armed != Some(tick) {
            debug!(?tick, "stale tick ignored");
            return Ok(());
        }
        self.armed = None;

        if !self.state.is_running() {
            return Ok(());
        }

        match self.state.decrement() {
            Some(remaining) => {
                debug!(remaining, "tick");
                self.render_clock();
                if remaining > 0 {
                    self.arm();
                    Ok(())
                } else {
                    self.expire()
                }
            }
            None => self.expire(),
        }
    }

    fn expire(&mut self) -> Result<()> {
        info!("focus session complete");
        self.state.set_running(false);
        self.armed = None;
        self.display.set_time_text(self.config.complete_label);
        self.display
            .set_time_color(self.config.palette.complete_text);
        self.display
            .play_completion_sound(self.config.completion_tone)?;
        self.display.set_always_on_top(true);
        Ok(())
    }

    fn reset(&mut self) {
        info!("timer reset");
        self.state.reset();
        self.armed = None;
        self.render_clock();
    }

    fn toggle_fullscreen(&mut self) {
        let fullscreen = self.state.toggle_fullscreen();
        info!(fullscreen, "display mode changed");
        if fullscreen {
            self.drag = None;
        }
        self.display.set_fullscreen(fullscreen);
        self.render_mode();
    }

    fn arm(&mut self) {
        let tick = TickId(self.next_tick);
        self.next_tick += 1;
        self.armed = Some(tick);
        self.display.schedule_after(self.config.tick_interval, tick);
    }

    fn render_clock(&mut self) {
        self.display.set_time_text(&self.state.clock());
        self.display.set_time_color(self.config.palette.time_text);
        self.display.set_progress(self.state.fraction_remaining());
    }

    fn render_mode(&mut self) {
        let fullscreen = self.state.is_fullscreen();
        let palette = &self.config.palette;
        let background = if fullscreen {
            palette.zen_background
        } else {
            palette.window_background
        };
        self.display.set_helper_text_visible(!fullscreen);
        self.display.set_background(background);
    }
}

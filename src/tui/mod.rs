pub mod app;
pub mod event;
pub mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{Event, poll, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::audio::Beeper;
use crate::config::Config;
use crate::error::Result;
use crate::timer::{Controller, Flow};
use app::App;

// Upper bound on how long the loop sleeps when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main entry point for TUI mode
pub fn run_tui(config: Config) -> Result<()> {
    let beeper = Beeper::open()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut controller = Controller::new(config.clone(), App::new(beeper));
    info!(total_seconds = config.total_seconds.get(), "terminal session started");

    let result = run_app(&mut terminal, &mut controller, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `restore` if `result` failed, then hand the result back
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller<App>,
    config: &Config,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &controller.display().view, config))?;

        // Sleep until the next tick is due, or a key arrives
        let timeout = controller
            .display()
            .time_until_next_tick(Instant::now())
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        let mut queued = Vec::new();
        if poll(timeout)? {
            if let Event::Key(key) = read()? {
                queued.extend(event::handle_key(key));
            }
        }
        let due = controller.display_mut().take_due(Instant::now());

        if controller.handle_frame(queued, due)? == Flow::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    mod restore_on_err {
        use super::*;

        #[test]
        fn should_restore_when_setup_fails() {
            let restored = Cell::new(false);

            let result: io::Result<()> =
                restore_on_err(Err(io::Error::other("no tty")), || restored.set(true));

            assert!(result.is_err());
            assert!(restored.get());
        }

        #[test]
        fn should_leave_terminal_alone_on_success() {
            let restored = Cell::new(false);

            let result = restore_on_err(Ok(7), || restored.set(true));

            assert_eq!(result.unwrap(), 7);
            assert!(!restored.get());
        }
    }
}

pub mod controller;
pub mod state;

pub use controller::{Controller, Flow, Input};
pub use state::{Phase, TimerState, format_clock};

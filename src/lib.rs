//! ZenFocus - a minimalist keyboard-driven focus timer
//!
//! The countdown lives in [`timer::Controller`], which drives any
//! [`display::Display`]. Two frontends ship with the crate: a borderless
//! desktop window and a terminal rendition.

pub mod audio;
pub mod config;
pub mod display;
pub mod error;
pub mod notification;
pub mod scheduler;
pub mod timer;
pub mod tui;
pub mod window;

pub use config::Config;
pub use error::{Error, Result};
pub use timer::{Controller, Flow, Input};

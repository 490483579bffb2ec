//! Compile-time configuration for the focus timer

use std::num::NonZeroU32;
use std::time::Duration;

/// Length of one focus session in minutes
pub const WORK_MINUTES: u32 = 25;

const WORK_SECONDS: NonZeroU32 = match NonZeroU32::new(WORK_MINUTES * 60) {
    Some(secs) => secs,
    None => panic!("WORK_MINUTES must be positive"),
};

/// An sRGB color, independent of any rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// A single audible signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub window_background: Rgb,
    pub zen_background: Rgb,
    pub time_text: Rgb,
    pub complete_text: Rgb,
    pub progress: Rgb,
    pub helper_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            window_background: Rgb::from_hex(0x1a1a1a),
            zen_background: Rgb::from_hex(0x000000),
            time_text: Rgb::from_hex(0xffffff),
            complete_text: Rgb::from_hex(0x2ecc71),
            progress: Rgb::from_hex(0x3498db),
            helper_text: Rgb::from_hex(0x555555),
        }
    }
}

/// Window geometry and typography
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    pub timer_font_size: f32,
    pub helper_font_size: f32,
    pub progress_width: f32,
    pub progress_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ZenFocus",
            width: 400.0,
            height: 300.0,
            timer_font_size: 90.0,
            helper_font_size: 12.0,
            progress_width: 300.0,
            progress_height: 4.0,
        }
    }
}

/// Everything the controller and the frontends need to know up front.
///
/// Built once at start-up and handed to the controller by value; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub total_seconds: NonZeroU32,
    pub tick_interval: Duration,
    pub completion_tone: Tone,
    pub complete_label: &'static str,
    pub helper_text: &'static str,
    pub palette: Palette,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_seconds: WORK_SECONDS,
            tick_interval: Duration::from_millis(1000),
            completion_tone: Tone {
                frequency_hz: 1000,
                duration: Duration::from_millis(500),
            },
            complete_label: "ZEN",
            helper_text: "[SPACE] Start   [R] Reset   [F] Fullscreen   [ESC] Quit",
            palette: Palette::default(),
            window: WindowConfig::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    mod rgb {
        use super::*;

        #[test]
        fn should_split_hex_literal_into_channels() {
            assert_eq!(Rgb::from_hex(0x2ecc71), Rgb(0x2e, 0xcc, 0x71));
            assert_eq!(Rgb::from_hex(0x000000), Rgb(0, 0, 0));
        }
    }

    mod default {
        use super::*;

        #[test]
        fn should_run_a_twenty_five_minute_session() {
            let config = Config::default();

            assert_eq!(config.total_seconds.get(), 1500);
            assert_eq!(config.tick_interval, Duration::from_secs(1));
        }

        #[test]
        fn should_beep_at_one_kilohertz_for_half_a_second() {
            let tone = Config::default().completion_tone;

            assert_eq!(tone.frequency_hz, 1000);
            assert_eq!(tone.duration, Duration::from_millis(500));
        }
    }
}

use egui::{Event, Key, PointerButton, Pos2};

use crate::display::Position;
use crate::timer::Input;

/// Map a key to the timer input it triggers
pub fn input_for_key(key: Key) -> Option<Input> {
    match key {
        Key::Space => Some(Input::Toggle),
        Key::R => Some(Input::Reset),
        Key::F => Some(Input::ToggleFullscreen),
        Key::Escape => Some(Input::Quit),
        _ => None,
    }
}

fn position(pos: Pos2) -> Position {
    Position::new(pos.x, pos.y)
}

pub fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers,
            ..
        } if modifiers.is_none() => input_for_key(*key),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            ..
        } => Some(if *pressed {
            Input::DragStart(position(*pos))
        } else {
            Input::DragEnd
        }),
        Event::PointerMoved(pos) => Some(Input::DragMove(position(*pos))),
        _ => None,
    }
}

/// Drain this frame's events into timer inputs, in arrival order
pub fn collect(ctx: &egui::Context) -> Vec<Input> {
    ctx.input(|i| i.events.iter().filter_map(translate).collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use egui::{Modifiers, pos2};

    mod input_for_key {
        use super::*;

        #[test]
        fn should_bind_the_four_control_keys() {
            assert_eq!(input_for_key(Key::Space), Some(Input::Toggle));
            assert_eq!(input_for_key(Key::R), Some(Input::Reset));
            assert_eq!(input_for_key(Key::F), Some(Input::ToggleFullscreen));
            assert_eq!(input_for_key(Key::Escape), Some(Input::Quit));
        }

        #[test]
        fn should_ignore_other_keys() {
            assert_eq!(input_for_key(Key::Q), None);
            assert_eq!(input_for_key(Key::Enter), None);
        }
    }

    mod translate {
        use super::*;

        fn key_press(key: Key, modifiers: Modifiers) -> Event {
            Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }
        }

        #[test]
        fn should_accept_plain_key_presses() {
            assert_eq!(
                translate(&key_press(Key::R, Modifiers::NONE)),
                Some(Input::Reset)
            );
        }

        #[test]
        fn should_ignore_keys_with_modifiers() {
            assert_eq!(translate(&key_press(Key::R, Modifiers::CTRL)), None);
            assert_eq!(translate(&key_press(Key::F, Modifiers::SHIFT)), None);
        }

        #[test]
        fn should_turn_primary_button_into_drag() {
            let press = Event::PointerButton {
                pos: pos2(4.0, 8.0),
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::NONE,
            };
            let release = Event::PointerButton {
                pos: pos2(4.0, 8.0),
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            };

            assert_eq!(
                translate(&press),
                Some(Input::DragStart(Position::new(4.0, 8.0)))
            );
            assert_eq!(translate(&release), Some(Input::DragEnd));
        }

        #[test]
        fn should_ignore_secondary_button() {
            let press = Event::PointerButton {
                pos: pos2(4.0, 8.0),
                button: PointerButton::Secondary,
                pressed: true,
                modifiers: Modifiers::NONE,
            };

            assert_eq!(translate(&press), None);
        }

        #[test]
        fn should_report_pointer_moves() {
            let moved = Event::PointerMoved(pos2(12.0, 3.0));

            assert_eq!(
                translate(&moved),
                Some(Input::DragMove(Position::new(12.0, 3.0)))
            );
        }
    }
}

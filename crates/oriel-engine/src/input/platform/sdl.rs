use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton as SdlMouseButton;

use crate::input::{InputEvent, Key, MouseButton};

/// Translates an SDL event into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem
/// (window events, text input, controller events, ...). Key events with no
/// keycode attached are dropped as well.
pub(crate) fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),

        Event::KeyDown { keycode, repeat, .. } => keycode.map(|kc| InputEvent::KeyDown {
            key: map_keycode(kc),
            repeat: *repeat,
        }),

        Event::KeyUp { keycode, .. } => keycode.map(|kc| InputEvent::KeyUp {
            key: map_keycode(kc),
        }),

        Event::MouseButtonDown { x, y, mouse_btn, clicks, .. } => Some(InputEvent::MouseDown {
            x: *x,
            y: *y,
            button: map_mouse_button(*mouse_btn),
            clicks: *clicks,
        }),

        Event::MouseButtonUp { mouse_btn, .. } => Some(InputEvent::MouseUp {
            button: map_mouse_button(*mouse_btn),
        }),

        Event::MouseMotion { x, y, xrel, yrel, .. } => Some(InputEvent::MouseMotion {
            x: *x,
            y: *y,
            dx: *xrel,
            dy: *yrel,
        }),

        _ => None,
    }
}

fn map_mouse_button(b: SdlMouseButton) -> MouseButton {
    match b {
        SdlMouseButton::Left => MouseButton::Left,
        SdlMouseButton::Right => MouseButton::Right,
        SdlMouseButton::Middle => MouseButton::Middle,
        SdlMouseButton::X1 => MouseButton::Back,
        SdlMouseButton::X2 => MouseButton::Forward,
        SdlMouseButton::Unknown => MouseButton::Other(0),
    }
}

fn map_keycode(kc: Keycode) -> Key {
    match kc {
        Keycode::Escape => Key::Escape,
        Keycode::Return => Key::Enter,
        Keycode::Tab => Key::Tab,
        Keycode::Backspace => Key::Backspace,
        Keycode::Space => Key::Space,

        Keycode::Insert => Key::Insert,
        Keycode::Delete => Key::Delete,
        Keycode::Home => Key::Home,
        Keycode::End => Key::End,
        Keycode::PageUp => Key::PageUp,
        Keycode::PageDown => Key::PageDown,

        Keycode::Up => Key::ArrowUp,
        Keycode::Down => Key::ArrowDown,
        Keycode::Left => Key::ArrowLeft,
        Keycode::Right => Key::ArrowRight,

        Keycode::LShift | Keycode::RShift => Key::Shift,
        Keycode::LCtrl | Keycode::RCtrl => Key::Control,
        Keycode::LAlt | Keycode::RAlt => Key::Alt,
        Keycode::LGui | Keycode::RGui => Key::Meta,

        Keycode::A => Key::A,
        Keycode::B => Key::B,
        Keycode::C => Key::C,
        Keycode::D => Key::D,
        Keycode::E => Key::E,
        Keycode::F => Key::F,
        Keycode::G => Key::G,
        Keycode::H => Key::H,
        Keycode::I => Key::I,
        Keycode::J => Key::J,
        Keycode::K => Key::K,
        Keycode::L => Key::L,
        Keycode::M => Key::M,
        Keycode::N => Key::N,
        Keycode::O => Key::O,
        Keycode::P => Key::P,
        Keycode::Q => Key::Q,
        Keycode::R => Key::R,
        Keycode::S => Key::S,
        Keycode::T => Key::T,
        Keycode::U => Key::U,
        Keycode::V => Key::V,
        Keycode::W => Key::W,
        Keycode::X => Key::X,
        Keycode::Y => Key::Y,
        Keycode::Z => Key::Z,

        Keycode::Num0 => Key::Digit0,
        Keycode::Num1 => Key::Digit1,
        Keycode::Num2 => Key::Digit2,
        Keycode::Num3 => Key::Digit3,
        Keycode::Num4 => Key::Digit4,
        Keycode::Num5 => Key::Digit5,
        Keycode::Num6 => Key::Digit6,
        Keycode::Num7 => Key::Digit7,
        Keycode::Num8 => Key::Digit8,
        Keycode::Num9 => Key::Digit9,

        Keycode::F1 => Key::F1,
        Keycode::F2 => Key::F2,
        Keycode::F3 => Key::F3,
        Keycode::F4 => Key::F4,
        Keycode::F5 => Key::F5,
        Keycode::F6 => Key::F6,
        Keycode::F7 => Key::F7,
        Keycode::F8 => Key::F8,
        Keycode::F9 => Key::F9,
        Keycode::F10 => Key::F10,
        Keycode::F11 => Key::F11,
        Keycode::F12 => Key::F12,

        other => Key::Unknown(other as i32),
    }
}

#[cfg(test)]
mod tests {
    use sdl2::keyboard::Mod;
    use sdl2::mouse::MouseState;

    use super::*;

    fn keydown(keycode: Option<Keycode>, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    // ── categorization ────────────────────────────────────────────────────

    #[test]
    fn quit_translates_to_quit() {
        let ev = Event::Quit { timestamp: 0 };
        assert_eq!(translate_event(&ev), Some(InputEvent::Quit));
    }

    #[test]
    fn keydown_carries_key_and_repeat_flag() {
        let ev = keydown(Some(Keycode::W), true);
        assert_eq!(
            translate_event(&ev),
            Some(InputEvent::KeyDown { key: Key::W, repeat: true })
        );
    }

    #[test]
    fn keydown_without_keycode_is_dropped() {
        assert_eq!(translate_event(&keydown(None, false)), None);
    }

    #[test]
    fn mouse_button_down_carries_position_and_clicks() {
        let ev = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: SdlMouseButton::Left,
            clicks: 2,
            x: 12,
            y: 34,
        };
        assert_eq!(
            translate_event(&ev),
            Some(InputEvent::MouseDown { x: 12, y: 34, button: MouseButton::Left, clicks: 2 })
        );
    }

    #[test]
    fn mouse_motion_carries_relative_deltas() {
        let ev = Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x: 5,
            y: 6,
            xrel: -1,
            yrel: 2,
        };
        assert_eq!(
            translate_event(&ev),
            Some(InputEvent::MouseMotion { x: 5, y: 6, dx: -1, dy: 2 })
        );
    }

    #[test]
    fn uncategorized_events_map_to_none() {
        let ev = Event::AppTerminating { timestamp: 0 };
        assert_eq!(translate_event(&ev), None);
    }

    // ── key mapping ───────────────────────────────────────────────────────

    #[test]
    fn keycode_map_spot_checks() {
        assert_eq!(map_keycode(Keycode::Return), Key::Enter);
        assert_eq!(map_keycode(Keycode::Num0), Key::Digit0);
        assert_eq!(map_keycode(Keycode::LShift), Key::Shift);
        assert_eq!(map_keycode(Keycode::RShift), Key::Shift);
        assert_eq!(map_keycode(Keycode::F12), Key::F12);
    }

    #[test]
    fn unmapped_keycode_preserves_raw_code() {
        assert_eq!(
            map_keycode(Keycode::CapsLock),
            Key::Unknown(Keycode::CapsLock as i32)
        );
    }
}

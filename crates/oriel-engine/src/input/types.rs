/// Keyboard key identifier.
///
/// The platform layer maps SDL keycodes into these variants where possible.
/// Keys without a variant are reported as `Key::Unknown` with the raw
/// platform keycode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys (useful for hold-to-act bindings)
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform key not yet represented here; carries the raw keycode.
    Unknown(i32),
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u8),
}

/// Platform-agnostic input events produced by the event pump.
///
/// Coordinates are window-relative pixels; `dx`/`dy` are the relative motion
/// reported by the platform for the same event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Quit,

    KeyDown {
        key: Key,
        /// True when the event is a key-repeat. Repeats are tagged but still
        /// delivered.
        repeat: bool,
    },
    KeyUp {
        key: Key,
    },

    MouseDown {
        x: i32,
        y: i32,
        button: MouseButton,
        clicks: u8,
    },
    MouseUp {
        button: MouseButton,
    },
    MouseMotion {
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
    },
}

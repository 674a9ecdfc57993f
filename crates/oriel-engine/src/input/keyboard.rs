use std::collections::HashSet;

use super::types::Key;

/// Current keyboard state for a single window.
///
/// Mutated only by the event pump; queried by the application.
#[derive(Debug, Default)]
pub struct Keyboard {
    keys_down: HashSet<Key>,
}

impl Keyboard {
    /// Records a key press. Repeat events are tagged but not suppressed.
    pub(crate) fn keydown(&mut self, key: Key, is_repeat: bool) {
        log::trace!("keydown: {key:?} (repeat: {is_repeat})");
        self.keys_down.insert(key);
    }

    pub(crate) fn keyup(&mut self, key: Key) {
        log::trace!("keyup: {key:?}");
        self.keys_down.remove(&key);
    }

    /// Whether `key` is currently held.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keydown_sets_pressed() {
        let mut kb = Keyboard::default();
        kb.keydown(Key::W, false);
        assert!(kb.is_pressed(Key::W));
        assert!(!kb.is_pressed(Key::S));
    }

    #[test]
    fn keydown_then_keyup_clears_pressed() {
        let mut kb = Keyboard::default();
        kb.keydown(Key::Space, false);
        kb.keyup(Key::Space);
        assert!(!kb.is_pressed(Key::Space));
    }

    #[test]
    fn repeat_keydown_keeps_key_held() {
        let mut kb = Keyboard::default();
        kb.keydown(Key::A, false);
        kb.keydown(Key::A, true);
        assert!(kb.is_pressed(Key::A));
    }

    #[test]
    fn keyup_without_keydown_is_a_no_op() {
        let mut kb = Keyboard::default();
        kb.keyup(Key::Escape);
        assert!(!kb.is_pressed(Key::Escape));
    }
}

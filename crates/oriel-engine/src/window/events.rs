use crate::input::InputEvent;

/// Categorized event kind reported by the event pump.
///
/// `None` means no categorized event was observed in the poll cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FrameEvent {
    None,
    Quit,
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    MouseMotion,
}

impl FrameEvent {
    /// The kind of a translated input event.
    pub fn of(ev: &InputEvent) -> FrameEvent {
        match ev {
            InputEvent::Quit => FrameEvent::Quit,
            InputEvent::KeyDown { .. } => FrameEvent::KeyDown,
            InputEvent::KeyUp { .. } => FrameEvent::KeyUp,
            InputEvent::MouseDown { .. } => FrameEvent::MouseDown,
            InputEvent::MouseUp { .. } => FrameEvent::MouseUp,
            InputEvent::MouseMotion { .. } => FrameEvent::MouseMotion,
        }
    }

    fn index(self) -> Option<usize> {
        match self {
            FrameEvent::None => None,
            FrameEvent::Quit => Some(0),
            FrameEvent::KeyDown => Some(1),
            FrameEvent::KeyUp => Some(2),
            FrameEvent::MouseDown => Some(3),
            FrameEvent::MouseUp => Some(4),
            FrameEvent::MouseMotion => Some(5),
        }
    }
}

/// The per-frame event log: which kinds occurred since the last buffer swap.
///
/// One flag per kind. The log only answers "did this kind occur", so the
/// bound is the number of kinds, independent of how many events arrived.
#[derive(Debug, Default)]
pub(crate) struct FrameEvents {
    seen: [bool; 6],
}

impl FrameEvents {
    pub(crate) fn record(&mut self, kind: FrameEvent) {
        if let Some(i) = kind.index() {
            self.seen[i] = true;
        }
    }

    pub(crate) fn triggered(&self, kind: FrameEvent) -> bool {
        kind.index().is_some_and(|i| self.seen[i])
    }

    pub(crate) fn clear(&mut self) {
        self.seen = [false; 6];
    }
}

#[cfg(test)]
mod tests {
    use crate::input::{InputEvent, Key, MouseButton};

    use super::*;

    const ALL_KINDS: [FrameEvent; 6] = [
        FrameEvent::Quit,
        FrameEvent::KeyDown,
        FrameEvent::KeyUp,
        FrameEvent::MouseDown,
        FrameEvent::MouseUp,
        FrameEvent::MouseMotion,
    ];

    #[test]
    fn record_sets_only_the_recorded_kind() {
        let mut log = FrameEvents::default();
        log.record(FrameEvent::KeyDown);
        assert!(log.triggered(FrameEvent::KeyDown));
        for kind in ALL_KINDS.iter().filter(|&&k| k != FrameEvent::KeyDown) {
            assert!(!log.triggered(*kind));
        }
    }

    #[test]
    fn clear_resets_every_kind() {
        let mut log = FrameEvents::default();
        for kind in ALL_KINDS {
            log.record(kind);
        }
        log.clear();
        for kind in ALL_KINDS {
            assert!(!log.triggered(kind));
        }
    }

    #[test]
    fn none_is_never_recorded_nor_triggered() {
        let mut log = FrameEvents::default();
        log.record(FrameEvent::None);
        assert!(!log.triggered(FrameEvent::None));
    }

    #[test]
    fn kind_of_input_events() {
        assert_eq!(FrameEvent::of(&InputEvent::Quit), FrameEvent::Quit);
        assert_eq!(
            FrameEvent::of(&InputEvent::KeyDown { key: Key::A, repeat: false }),
            FrameEvent::KeyDown
        );
        assert_eq!(
            FrameEvent::of(&InputEvent::KeyUp { key: Key::A }),
            FrameEvent::KeyUp
        );
        assert_eq!(
            FrameEvent::of(&InputEvent::MouseDown { x: 0, y: 0, button: MouseButton::Left, clicks: 1 }),
            FrameEvent::MouseDown
        );
        assert_eq!(
            FrameEvent::of(&InputEvent::MouseUp { button: MouseButton::Left }),
            FrameEvent::MouseUp
        );
        assert_eq!(
            FrameEvent::of(&InputEvent::MouseMotion { x: 0, y: 0, dx: 0, dy: 0 }),
            FrameEvent::MouseMotion
        );
    }
}

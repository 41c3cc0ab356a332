use super::debounce::{check_key, DebounceLatch};
use super::events::KeyboardSnapshot;
use jukebox_schema::{ActionKind, Key, KeyBinding};
use log::debug;

struct Entry {
    binding: KeyBinding,
    latch: DebounceLatch,
}

/// Checks every binding once per frame, in bind order, each against its
/// own latch.
pub struct Dispatcher {
    entries: Vec<Entry>,
}

impl Dispatcher {
    pub fn new(bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        Self {
            entries: bindings
                .into_iter()
                .map(|binding| Entry {
                    binding,
                    latch: DebounceLatch::Idle,
                })
                .collect(),
        }
    }

    /// Latch of the first binding for `key`.
    pub fn latch(&self, key: Key) -> Option<DebounceLatch> {
        self.entries
            .iter()
            .find(|e| e.binding.key == key)
            .map(|e| e.latch)
    }

    /// Calls `handler(action, param)` for each binding whose key went down
    /// this frame. The handler finishes before the next binding is checked.
    ///
    /// Returns the number of actions fired.
    pub fn dispatch<F>(&mut self, snapshot: &KeyboardSnapshot, mut handler: F) -> usize
    where
        F: FnMut(ActionKind, i8),
    {
        let mut fired = 0;
        for entry in &mut self.entries {
            let KeyBinding { key, action, param } = entry.binding;
            let pressed = snapshot.is_pressed(key);
            if check_key(&mut entry.latch, pressed, |p| handler(action, p), param) {
                debug!("{key} pressed -> {action:?}({param})");
                fired += 1;
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(keys: &[Key]) -> KeyboardSnapshot {
        keys.iter().copied().collect()
    }

    #[test]
    fn fires_in_bind_order() {
        let mut dispatcher = Dispatcher::new([
            KeyBinding::new(Key::N, ActionKind::NextTrack, 0),
            KeyBinding::new(Key::P, ActionKind::TogglePause, 0),
            KeyBinding::new(Key::Num1, ActionKind::PlaySfx, 1),
        ]);

        let mut fired = Vec::new();
        let n = dispatcher.dispatch(&snapshot(&[Key::Num1, Key::P, Key::N]), |a, p| {
            fired.push((a, p))
        });

        assert_eq!(n, 3);
        assert_eq!(
            fired,
            vec![
                (ActionKind::NextTrack, 0),
                (ActionKind::TogglePause, 0),
                (ActionKind::PlaySfx, 1),
            ]
        );
    }

    #[test]
    fn latches_are_independent() {
        let mut dispatcher = Dispatcher::new([
            KeyBinding::new(Key::Num1, ActionKind::PlaySfx, 1),
            KeyBinding::new(Key::Num2, ActionKind::PlaySfx, 2),
        ]);
        let mut fired = Vec::new();

        // 1 held, then 2 pressed while 1 is still down.
        dispatcher.dispatch(&snapshot(&[Key::Num1]), |_, p| fired.push(p));
        dispatcher.dispatch(&snapshot(&[Key::Num1, Key::Num2]), |_, p| fired.push(p));
        dispatcher.dispatch(&snapshot(&[Key::Num1, Key::Num2]), |_, p| fired.push(p));

        assert_eq!(fired, vec![1, 2]);
        assert_eq!(dispatcher.latch(Key::Num1), Some(DebounceLatch::Held));
        assert_eq!(dispatcher.latch(Key::Num2), Some(DebounceLatch::Held));

        dispatcher.dispatch(&snapshot(&[Key::Num2]), |_, p| fired.push(p));
        assert_eq!(dispatcher.latch(Key::Num1), Some(DebounceLatch::Idle));
        assert_eq!(dispatcher.latch(Key::Num3), None);
    }
}

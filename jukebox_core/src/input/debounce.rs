//! Level-to-edge conversion for polled keys.
//!
//! The keyboard is sampled once per frame, so a held key reads as pressed
//! on every frame. Each bound key owns a [`DebounceLatch`] that lets its
//! action fire once per physical press:
//!
//! | latch | key down | next  | fires |
//! |-------|----------|-------|-------|
//! | Idle  | no       | Idle  | no    |
//! | Idle  | yes      | Held  | yes   |
//! | Held  | yes      | Held  | no    |
//! | Held  | no       | Idle  | no    |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceLatch {
    #[default]
    Idle,
    Held,
}

impl DebounceLatch {
    pub fn is_held(self) -> bool {
        self == DebounceLatch::Held
    }

    /// Feeds one frame's sample. Returns true on the press edge only.
    pub fn update(&mut self, key_down: bool) -> bool {
        match (*self, key_down) {
            (_, false) => {
                *self = DebounceLatch::Idle;
                false
            }
            (DebounceLatch::Held, true) => false,
            (DebounceLatch::Idle, true) => {
                *self = DebounceLatch::Held;
                true
            }
        }
    }
}

/// Runs `action(param)` if `key_down` is a new press for `latch`.
///
/// Returns whether the action ran.
pub fn check_key<F>(latch: &mut DebounceLatch, key_down: bool, action: F, param: i8) -> bool
where
    F: FnOnce(i8),
{
    let fired = latch.update(key_down);
    if fired {
        action(param);
    }
    fired
}

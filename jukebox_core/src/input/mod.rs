pub mod debounce;
pub mod dispatch;
pub mod events;
pub mod keyboard;

use self::events::KeyEvent;
use crossbeam_channel::{unbounded, Receiver, Sender};

pub use self::debounce::{check_key, DebounceLatch};
pub use self::dispatch::Dispatcher;
pub use self::events::KeyboardSnapshot;
pub use self::keyboard::{KeyboardSource, QueuedKeyboard, ScriptedKeyboard};

pub struct InputQueue {
    sender: Sender<KeyEvent>,
    receiver: Receiver<KeyEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Queues an event from the thread owning the queue. Other threads feed
    /// it through [`sender`](Self::sender).
    pub fn push(&self, event: KeyEvent) {
        let _ = self.sender.send(event);
    }

    /// Non-blocking. Returns None if the queue is empty.
    pub fn pop(&self) -> Option<KeyEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns a clone of the sender so a polling thread can feed the queue.
    pub fn sender(&self) -> Sender<KeyEvent> {
        self.sender.clone()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

use log::trace;

use super::JukeboxApp;
use crate::audio::TrackerPlayer;
use crate::input::KeyboardSource;
use crate::screen::Surface;
use crate::time::FrameSync;

/// One tick per display frame: scan the keyboard, fire pressed bindings,
/// wait for the frame, then advance playback unless paused.
pub struct FrameLoop<K, F, S, P> {
    app: JukeboxApp,
    keyboard: K,
    sync: F,
    surface: S,
    player: P,
    frames: u64,
}

impl<K, F, S, P> FrameLoop<K, F, S, P>
where
    K: KeyboardSource,
    F: FrameSync,
    S: Surface,
    P: TrackerPlayer,
{
    pub fn new(app: JukeboxApp, keyboard: K, sync: F, surface: S, player: P) -> Self {
        Self {
            app,
            keyboard,
            sync,
            surface,
            player,
            frames: 0,
        }
    }

    pub fn startup(&mut self) {
        self.app.startup(&mut self.surface, &mut self.player);
    }

    pub fn tick(&mut self) {
        let snapshot = self.keyboard.scan();
        let fired = self
            .app
            .handle_frame(&snapshot, &mut self.surface, &mut self.player);

        self.sync.wait_frame();
        if !self.app.state().paused {
            self.player.play_frame();
        }

        self.frames += 1;
        trace!("frame {} done, {} action(s) fired", self.frames, fired);
    }

    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.tick();
        }
    }

    /// Ticks until `done` holds after a frame, at most `max_frames` times.
    /// Returns whether `done` was reached.
    pub fn run_until(
        &mut self,
        max_frames: u64,
        mut done: impl FnMut(&JukeboxApp) -> bool,
    ) -> bool {
        for _ in 0..max_frames {
            self.tick();
            if done(&self.app) {
                return true;
            }
        }
        false
    }

    pub fn app(&self) -> &JukeboxApp {
        &self.app
    }

    pub fn sync(&self) -> &F {
        &self.sync
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

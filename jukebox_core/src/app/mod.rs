pub mod actions;
pub mod frame_loop;
pub mod state;

use jukebox_schema::{DemoConfig, Song};

use self::actions::ActionContext;
use self::state::AppState;
use crate::audio::TrackerPlayer;
use crate::config::validate;
use crate::error::ConfigError;
use crate::input::{Dispatcher, KeyboardSnapshot};
use crate::screen::{draw_volume, print_label, Surface, TextStyle};

pub use self::frame_loop::FrameLoop;

pub struct JukeboxApp {
    config: DemoConfig,
    state: AppState,
    dispatcher: Dispatcher,
}

impl JukeboxApp {
    pub fn new(config: DemoConfig) -> Result<Self, ConfigError> {
        validate(&config)?;
        let dispatcher = Dispatcher::new(config.bindings.iter().copied());
        Ok(Self {
            config,
            state: AppState::default(),
            dispatcher,
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_song(&self) -> &Song {
        &self.config.songs[self.state.current_song]
    }

    /// Draws the whole screen and starts the first song.
    pub fn startup<S, P>(&self, surface: &mut S, player: &mut P)
    where
        S: Surface + ?Sized,
        P: TrackerPlayer + ?Sized,
    {
        let labels = &self.config.labels;
        for label in [&labels.pause, &labels.next, &labels.toggle_channels]
            .into_iter()
            .chain(labels.channels.iter())
            .chain([&labels.sfx, &labels.volume, &labels.now_playing])
        {
            print_label(surface, label, TextStyle::Normal);
        }
        print_label(surface, &self.current_song().name, TextStyle::Normal);
        draw_volume(surface, self.config.volume_bar, self.state.volume);

        player.init(&self.current_song().track);
        player.init_sfx(&self.config.sfx_bank);
    }

    /// Runs the actions of every binding pressed down this frame.
    pub fn handle_frame<S, P>(
        &mut self,
        snapshot: &KeyboardSnapshot,
        surface: &mut S,
        player: &mut P,
    ) -> usize
    where
        S: Surface + ?Sized,
        P: TrackerPlayer + ?Sized,
    {
        let Self {
            config,
            state,
            dispatcher,
        } = self;
        let mut ctx = ActionContext {
            config,
            state,
            surface,
            player,
        };
        dispatcher.dispatch(snapshot, |action, param| ctx.apply(action, param))
    }
}

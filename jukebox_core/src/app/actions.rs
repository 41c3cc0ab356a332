use jukebox_schema::{ActionKind, DemoConfig};
use log::{info, warn};

use super::state::AppState;
use crate::audio::TrackerPlayer;
use crate::screen::{draw_volume, print_label, Surface, TextStyle};

/// What a fired key binding may touch.
pub struct ActionContext<'a, S: ?Sized, P: ?Sized> {
    pub config: &'a DemoConfig,
    pub state: &'a mut AppState,
    pub surface: &'a mut S,
    pub player: &'a mut P,
}

impl<S, P> ActionContext<'_, S, P>
where
    S: Surface + ?Sized,
    P: TrackerPlayer + ?Sized,
{
    pub fn apply(&mut self, action: ActionKind, param: i8) {
        match action {
            ActionKind::TogglePause => self.toggle_pause(),
            ActionKind::NextTrack => self.next_track(),
            ActionKind::PlaySfx => self.play_sfx(param),
            ActionKind::ToggleChannel => self.toggle_channel(param),
            ActionKind::AdjustVolume => self.adjust_volume(param),
        }
    }

    pub fn toggle_pause(&mut self) {
        let label = &self.config.labels.pause;
        if self.state.paused {
            print_label(self.surface, label, TextStyle::Normal);
            self.state.paused = false;
            info!("music resumed");
        } else {
            print_label(self.surface, label, TextStyle::Highlighted);
            self.player.stop();
            self.state.paused = true;
            info!("music paused");
        }
    }

    /// Advances to the next song, wrapping after the last one.
    pub fn next_track(&mut self) {
        let songs = &self.config.songs;
        if songs.is_empty() {
            return;
        }
        self.state.current_song = (self.state.current_song + 1) % songs.len();

        let song = &songs[self.state.current_song];
        print_label(self.surface, &song.name, TextStyle::Normal);
        self.player.init(&song.track);
        info!("now playing {} ({})", song.name.text.trim_end(), song.track);
    }

    /// Plays `sfx_id` on every enabled channel at the current volume.
    pub fn play_sfx(&mut self, sfx_id: i8) {
        let id = match u8::try_from(sfx_id) {
            Ok(id) if id >= 1 => id,
            _ => {
                warn!("ignoring sfx id {sfx_id}");
                return;
            }
        };
        let volume = self.state.volume;
        for channel in self.state.enabled_channels() {
            self.player.play_sfx(id, channel, volume);
        }
    }

    pub fn toggle_channel(&mut self, channel: i8) {
        let Some(index) = usize::try_from(channel)
            .ok()
            .filter(|&i| i < self.state.channels.len())
        else {
            warn!("ignoring toggle of channel {channel}");
            return;
        };

        let enabled = !self.state.channels[index];
        self.state.channels[index] = enabled;
        let style = if enabled {
            TextStyle::Highlighted
        } else {
            TextStyle::Normal
        };
        print_label(self.surface, &self.config.labels.channels[index], style);
    }

    /// `delta` is in attenuation steps: positive is quieter.
    pub fn adjust_volume(&mut self, delta: i8) {
        self.state.volume = self.state.volume.adjusted(delta);
        draw_volume(self.surface, self.config.volume_bar, self.state.volume);
    }
}

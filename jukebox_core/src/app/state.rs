use crate::audio::Volume;
use jukebox_schema::CHANNEL_COUNT;

/// Everything the key actions read and write. Owned by the frame loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Index into the configured song list.
    pub current_song: usize,
    pub paused: bool,
    /// Channels on which sound effects are played.
    pub channels: [bool; CHANNEL_COUNT],
    pub volume: Volume,
}

impl AppState {
    pub fn enabled_channels(&self) -> impl Iterator<Item = u8> + '_ {
        self.channels
            .iter()
            .enumerate()
            .filter(|(_, &enabled)| enabled)
            .map(|(ch, _)| ch as u8)
    }
}

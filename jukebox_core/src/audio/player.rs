use crate::audio::volume::Volume;
use parking_lot::Mutex;
use std::{fmt, sync::Arc};

/// Sink for tracker playback commands.
///
/// The frame loop only ever issues commands; it never reads playback state
/// back from the player.
pub trait TrackerPlayer {
    /// Selects a song and rewinds it to the start.
    fn init(&mut self, track: &str);
    fn stop(&mut self);
    /// Advances playback by one frame.
    fn play_frame(&mut self);
    fn init_sfx(&mut self, bank: &str);
    /// `sfx_id` starts at 1. `channel` is 0..3.
    fn play_sfx(&mut self, sfx_id: u8, channel: u8, volume: Volume);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Init(String),
    Stop,
    /// Consecutive `play_frame` calls, folded together.
    PlayFrames(u32),
    InitSfx(String),
    PlaySfx {
        sfx_id: u8,
        channel: u8,
        volume: Volume,
    },
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCommand::Init(track) => write!(f, "init {track}"),
            PlayerCommand::Stop => f.write_str("stop"),
            PlayerCommand::PlayFrames(n) => write!(f, "play_frames {n}"),
            PlayerCommand::InitSfx(bank) => write!(f, "init_sfx {bank}"),
            PlayerCommand::PlaySfx {
                sfx_id,
                channel,
                volume,
            } => write!(f, "play_sfx id={sfx_id} ch={channel} vol={volume}"),
        }
    }
}

/// Shared view of everything a [`RecordingPlayer`] has been asked to do.
#[derive(Debug, Clone, Default)]
pub struct PlayerLog {
    commands: Arc<Mutex<Vec<PlayerCommand>>>,
}

impl PlayerLog {
    fn push(&self, command: PlayerCommand) {
        let mut commands = self.commands.lock();
        if let (PlayerCommand::PlayFrames(n), Some(PlayerCommand::PlayFrames(last))) =
            (&command, commands.last_mut())
        {
            *last += *n;
            return;
        }
        commands.push(command);
    }

    pub fn snapshot(&self) -> Vec<PlayerCommand> {
        self.commands.lock().clone()
    }

    /// Returns the recorded commands and clears the log.
    pub fn take(&self) -> Vec<PlayerCommand> {
        std::mem::take(&mut *self.commands.lock())
    }

    pub fn frames_played(&self) -> u64 {
        self.commands
            .lock()
            .iter()
            .map(|c| match c {
                PlayerCommand::PlayFrames(n) => u64::from(*n),
                _ => 0,
            })
            .sum()
    }

    /// Commands other than frame advances, in order.
    pub fn events(&self) -> Vec<PlayerCommand> {
        self.commands
            .lock()
            .iter()
            .filter(|c| !matches!(c, PlayerCommand::PlayFrames(_)))
            .cloned()
            .collect()
    }
}

pub struct RecordingPlayer {
    log: PlayerLog,
}

impl RecordingPlayer {
    pub fn new() -> (Self, PlayerLog) {
        let log = PlayerLog::default();
        (Self { log: log.clone() }, log)
    }
}

impl TrackerPlayer for RecordingPlayer {
    fn init(&mut self, track: &str) {
        self.log.push(PlayerCommand::Init(track.to_string()));
    }

    fn stop(&mut self) {
        self.log.push(PlayerCommand::Stop);
    }

    fn play_frame(&mut self) {
        self.log.push(PlayerCommand::PlayFrames(1));
    }

    fn init_sfx(&mut self, bank: &str) {
        self.log.push(PlayerCommand::InitSfx(bank.to_string()));
    }

    fn play_sfx(&mut self, sfx_id: u8, channel: u8, volume: Volume) {
        self.log.push(PlayerCommand::PlaySfx {
            sfx_id,
            channel,
            volume,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_frames_are_folded() {
        let (mut player, log) = RecordingPlayer::new();
        player.init("a");
        player.play_frame();
        player.play_frame();
        player.stop();
        player.play_frame();

        assert_eq!(
            log.snapshot(),
            vec![
                PlayerCommand::Init("a".into()),
                PlayerCommand::PlayFrames(2),
                PlayerCommand::Stop,
                PlayerCommand::PlayFrames(1),
            ]
        );
        assert_eq!(log.frames_played(), 3);
        assert_eq!(
            log.events(),
            vec![PlayerCommand::Init("a".into()), PlayerCommand::Stop]
        );
    }

    #[test]
    fn take_clears_the_log() {
        let (mut player, log) = RecordingPlayer::new();
        player.play_sfx(2, 1, Volume::new(3));

        let taken = log.take();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].to_string(), "play_sfx id=2 ch=1 vol=3");
        assert!(log.snapshot().is_empty());
    }
}

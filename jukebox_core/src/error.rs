use jukebox_schema::{Key, CHANNEL_COUNT};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("song list is empty")]
    NoSongs,

    #[error(
        "binding {index} ({key}): channel {channel} is out of range (0..{max})",
        max = CHANNEL_COUNT
    )]
    ChannelOutOfRange { index: usize, key: Key, channel: i8 },

    #[error("binding {index} ({key}): sfx id {id} is invalid (ids start at 1)")]
    InvalidSfxId { index: usize, key: Key, id: i8 },

    #[error("key {key} is bound twice (bindings {first} and {second})")]
    DuplicateKey {
        key: Key,
        first: usize,
        second: usize,
    },

    #[error("`{text}` at ({x}, {y}) does not fit on screen")]
    LabelOffScreen { text: String, x: u8, y: u8 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (line {line})")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl ScriptError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

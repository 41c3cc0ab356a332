use super::events::{KeyEvent, KeyboardSnapshot};
use super::InputQueue;
use crate::error::ScriptError;
use crossbeam_channel::Sender;
use jukebox_schema::Key;
use std::collections::VecDeque;

/// Keyboard scanned once per frame.
pub trait KeyboardSource {
    fn scan(&mut self) -> KeyboardSnapshot;
}

/// Replays prepared per-frame snapshots. Reports nothing held once the
/// script is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeyboard {
    frames: VecDeque<KeyboardSnapshot>,
}

impl ScriptedKeyboard {
    pub fn new(frames: impl IntoIterator<Item = KeyboardSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn from_script(script: &str) -> Result<Self, ScriptError> {
        parse_script(script).map(Self::new)
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl KeyboardSource for ScriptedKeyboard {
    fn scan(&mut self) -> KeyboardSnapshot {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Folds key events sent from other threads into the held set, on the
/// thread that scans it.
///
/// A key pressed since the previous scan reads as down for one scan even if
/// its release arrived in the same frame, so short taps still fire.
#[derive(Default)]
pub struct QueuedKeyboard {
    queue: InputQueue,
    held: KeyboardSnapshot,
}

impl QueuedKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> Sender<KeyEvent> {
        self.queue.sender()
    }
}

impl KeyboardSource for QueuedKeyboard {
    fn scan(&mut self) -> KeyboardSnapshot {
        let mut tapped = Vec::new();
        while let Some(event) = self.queue.pop() {
            if event.pressed {
                tapped.push(event.key);
            }
            self.held.apply(event);
        }
        self.held.keys().chain(tapped).collect()
    }
}

/// Parses a key script: one frame per line, key names separated by
/// whitespace or commas, `-` or a blank line for an empty frame, `#` for
/// comments and a trailing `*N` to repeat the frame.
pub fn parse_script(script: &str) -> Result<Vec<KeyboardSnapshot>, ScriptError> {
    let mut frames = Vec::new();
    for (index, raw) in script.lines().enumerate() {
        let line = index + 1;
        let (body, comment) = match raw.split_once('#') {
            Some((body, _)) => (body, true),
            None => (raw, false),
        };
        if comment && body.trim().is_empty() {
            continue;
        }
        parse_frame(body, line, &mut frames)?;
    }
    Ok(frames)
}

/// Same as [`parse_script`] with `;` separating frames, for command lines.
pub fn parse_inline(keys: &str) -> Result<Vec<KeyboardSnapshot>, ScriptError> {
    let mut frames = Vec::new();
    for (index, segment) in keys.split(';').enumerate() {
        parse_frame(segment, index + 1, &mut frames)?;
    }
    Ok(frames)
}

fn parse_frame(
    text: &str,
    line: usize,
    frames: &mut Vec<KeyboardSnapshot>,
) -> Result<(), ScriptError> {
    let (keys, repeat) = match text.rsplit_once('*') {
        Some((keys, count)) => {
            let count = count.trim();
            let repeat: usize = count
                .parse()
                .map_err(|_| ScriptError::new(line, format!("invalid repeat count `{count}`")))?;
            if repeat == 0 {
                return Err(ScriptError::new(line, "repeat count must be at least 1"));
            }
            (keys, repeat)
        }
        None => (text, 1),
    };

    let snapshot = keys
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty() && *token != "-")
        .map(|token| {
            token
                .parse::<Key>()
                .map_err(|e| ScriptError::new(line, e.to_string()))
        })
        .collect::<Result<KeyboardSnapshot, _>>()?;

    frames.extend(std::iter::repeat(snapshot).take(repeat));
    Ok(())
}

use std::{fs, path::PathBuf};

use anyhow::Context;
use jukebox_core::app::{FrameLoop, JukeboxApp};
use jukebox_core::audio::{PlayerCommand, RecordingPlayer};
use jukebox_core::input::keyboard::{parse_inline, parse_script};
use jukebox_core::input::{KeyboardSnapshot, ScriptedKeyboard};
use jukebox_core::screen::ScreenBuffer;
use jukebox_core::time::{FrameSync, PacedSync, Unpaced};
use jukebox_schema::DemoConfig;
use log::info;

pub enum KeySource {
    None,
    File(PathBuf),
    Inline(String),
}

pub struct SessionOptions {
    pub frames: Option<u64>,
    /// Frame rate to pace at, or `None` to run unpaced.
    pub pace_hz: Option<u32>,
}

pub struct SessionReport {
    pub commands: Vec<PlayerCommand>,
    pub screen: String,
}

fn load_frames(source: &KeySource) -> anyhow::Result<Vec<KeyboardSnapshot>> {
    match source {
        KeySource::None => Ok(Vec::new()),
        KeySource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read script: {}", path.display()))?;
            parse_script(&text)
                .with_context(|| format!("invalid key script: {}", path.display()))
        }
        KeySource::Inline(keys) => parse_inline(keys).context("invalid key script"),
    }
}

pub fn run_session(
    config: DemoConfig,
    source: &KeySource,
    options: &SessionOptions,
) -> anyhow::Result<SessionReport> {
    let app = JukeboxApp::new(config).context("invalid config")?;
    let frames = load_frames(source)?;
    let frame_count = options.frames.unwrap_or(frames.len() as u64);
    let keyboard = ScriptedKeyboard::new(frames);

    info!("running {frame_count} frame(s)");
    let report = match options.pace_hz {
        Some(hz) => drive(app, keyboard, PacedSync::new(hz), frame_count),
        None => drive(app, keyboard, Unpaced::default(), frame_count),
    };
    Ok(report)
}

fn drive<F: FrameSync>(
    app: JukeboxApp,
    keyboard: ScriptedKeyboard,
    sync: F,
    frames: u64,
) -> SessionReport {
    let (player, log) = RecordingPlayer::new();
    let mut frame_loop = FrameLoop::new(app, keyboard, sync, ScreenBuffer::new(), player);

    frame_loop.startup();
    frame_loop.run(frames);

    SessionReport {
        commands: log.take(),
        screen: frame_loop.surface().render_string(),
    }
}

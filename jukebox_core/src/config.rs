use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use jukebox_schema::{ActionKind, DemoConfig, Label, CHANNEL_COUNT};

use crate::error::ConfigError;
use crate::screen::{GLYPH_HEIGHT_LINES, GLYPH_WIDTH_BYTES, SCREEN_HEIGHT_LINES, SCREEN_WIDTH_BYTES};

/// Bytes covered by the volume bar.
const VOLUME_BAR_WIDTH: usize = 32;

pub fn validate(config: &DemoConfig) -> Result<(), ConfigError> {
    if config.songs.is_empty() {
        return Err(ConfigError::NoSongs);
    }

    let mut seen = HashMap::new();
    for (index, binding) in config.bindings.iter().enumerate() {
        if let Some(&first) = seen.get(&binding.key) {
            return Err(ConfigError::DuplicateKey {
                key: binding.key,
                first,
                second: index,
            });
        }
        seen.insert(binding.key, index);

        match binding.action {
            ActionKind::ToggleChannel
                if binding.param < 0 || binding.param as usize >= CHANNEL_COUNT =>
            {
                return Err(ConfigError::ChannelOutOfRange {
                    index,
                    key: binding.key,
                    channel: binding.param,
                });
            }
            ActionKind::PlaySfx if binding.param < 1 => {
                return Err(ConfigError::InvalidSfxId {
                    index,
                    key: binding.key,
                    id: binding.param,
                });
            }
            _ => {}
        }
    }

    let labels = &config.labels;
    let fixed = [
        &labels.now_playing,
        &labels.next,
        &labels.pause,
        &labels.toggle_channels,
        &labels.sfx,
        &labels.volume,
    ];
    for label in fixed
        .into_iter()
        .chain(labels.channels.iter())
        .chain(config.songs.iter().map(|s| &s.name))
    {
        check_label(label)?;
    }

    let bar = config.volume_bar;
    if !fits(bar.x, bar.y, VOLUME_BAR_WIDTH) {
        return Err(ConfigError::LabelOffScreen {
            text: "<volume bar>".to_string(),
            x: bar.x,
            y: bar.y,
        });
    }

    Ok(())
}

fn check_label(label: &Label) -> Result<(), ConfigError> {
    let width = label
        .text
        .chars()
        .count()
        .saturating_mul(usize::from(GLYPH_WIDTH_BYTES));
    if fits(label.x, label.y, width) {
        Ok(())
    } else {
        Err(ConfigError::LabelOffScreen {
            text: label.text.clone(),
            x: label.x,
            y: label.y,
        })
    }
}

fn fits(x: u8, y: u8, width_bytes: usize) -> bool {
    usize::from(x).saturating_add(width_bytes) <= usize::from(SCREEN_WIDTH_BYTES)
        && u16::from(y) + GLYPH_HEIGHT_LINES <= SCREEN_HEIGHT_LINES
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> anyhow::Result<DemoConfig> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: DemoConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse config json: {}", path.display()))?;
    validate(&config).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(config)
}

pub fn load_config_from_str(json: &str) -> anyhow::Result<DemoConfig> {
    let config: DemoConfig = serde_json::from_str(json).context("failed to parse config json")?;
    validate(&config).context("invalid config")?;
    Ok(config)
}

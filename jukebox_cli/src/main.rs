mod session;

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use jukebox_core::time::PacedSync;
use jukebox_schema::DemoConfig;

use crate::session::{KeySource, SessionOptions};

#[derive(Debug, Parser)]
#[command(name = "jukebox")]
#[command(about = "Keyboard-driven music and SFX player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs a session and prints the player commands it produced.
    Run {
        /// Configuration JSON; the built-in layout when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Key script, one frame per line.
        #[arg(short, long, conflicts_with = "keys")]
        script: Option<PathBuf>,
        /// Inline key script, frames separated by `;`.
        #[arg(short, long)]
        keys: Option<String>,
        /// Frames to run; defaults to the script length.
        #[arg(short, long)]
        frames: Option<u64>,
        /// Pace frames at `--hz` instead of running flat out.
        #[arg(long)]
        realtime: bool,
        #[arg(long, default_value_t = PacedSync::DEFAULT_HZ)]
        hz: u32,
        /// Print the final screen after the commands.
        #[arg(long)]
        screen: bool,
    },
    /// Writes the built-in configuration as JSON.
    DumpConfig {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validates a configuration file.
    Check { config: PathBuf },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            config,
            script,
            keys,
            frames,
            realtime,
            hz,
            screen,
        } => {
            let config = match config {
                Some(path) => jukebox_core::config::load_config_from_path(path)?,
                None => DemoConfig::default(),
            };
            let source = match (script, keys) {
                (Some(path), _) => KeySource::File(path),
                (None, Some(keys)) => KeySource::Inline(keys),
                (None, None) => KeySource::None,
            };
            let options = SessionOptions {
                frames,
                pace_hz: realtime.then_some(hz),
            };

            let report = session::run_session(config, &source, &options)?;
            for command in &report.commands {
                println!("{command}");
            }
            if screen {
                println!("---");
                println!("{}", report.screen);
            }
        }
        Command::DumpConfig { output } => {
            let json = serde_json::to_string_pretty(&DemoConfig::default())
                .context("failed to serialize config")?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("failed to write: {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Command::Check { config } => {
            let loaded = jukebox_core::config::load_config_from_path(&config)?;
            println!(
                "ok: {} song(s), {} binding(s)",
                loaded.songs.len(),
                loaded.bindings.len()
            );
        }
    }

    Ok(())
}

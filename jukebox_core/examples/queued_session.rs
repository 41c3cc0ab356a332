use jukebox_core::app::{FrameLoop, JukeboxApp};
use jukebox_core::audio::RecordingPlayer;
use jukebox_core::input::events::KeyEvent;
use jukebox_core::input::QueuedKeyboard;
use jukebox_core::screen::ScreenBuffer;
use jukebox_core::time::PacedSync;
use jukebox_schema::{DemoConfig, Key};
use std::thread;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = JukeboxApp::new(DemoConfig::default())?;
    let keyboard = QueuedKeyboard::new();
    let sender = keyboard.sender();
    let (player, log) = RecordingPlayer::new();

    let mut frame_loop = FrameLoop::new(
        app,
        keyboard,
        PacedSync::default(),
        ScreenBuffer::new(),
        player,
    );
    frame_loop.startup();

    // Simulated typist: each key is held for a few frames.
    let typist = thread::spawn(move || {
        for key in [Key::Q, Key::E, Key::Num1, Key::O, Key::N, Key::P, Key::P] {
            thread::sleep(Duration::from_millis(150));
            let _ = sender.send(KeyEvent::press(key));
            thread::sleep(Duration::from_millis(100));
            let _ = sender.send(KeyEvent::release(key));
        }
    });

    // About two seconds at 50Hz.
    frame_loop.run(100);
    typist
        .join()
        .map_err(|_| anyhow::anyhow!("typist thread panicked"))?;

    for command in log.snapshot() {
        println!("{command}");
    }
    println!("{}", frame_loop.surface().render_string());
    Ok(())
}

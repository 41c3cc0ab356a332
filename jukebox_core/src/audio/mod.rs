pub mod player;
pub mod volume;

pub use player::{PlayerCommand, PlayerLog, RecordingPlayer, TrackerPlayer};
pub use volume::Volume;

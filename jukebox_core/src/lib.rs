pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod screen;
pub mod time;

pub use jukebox_schema as schema;

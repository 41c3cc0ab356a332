pub mod frame;

pub use frame::{FrameSync, PacedSync, Unpaced};

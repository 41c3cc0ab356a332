use std::thread;
use std::time::{Duration, Instant};

/// Waits for the next display frame. The frame loop's only blocking point.
pub trait FrameSync {
    fn wait_frame(&mut self);
}

/// Never waits. Used to run a session as fast as possible.
#[derive(Debug, Default)]
pub struct Unpaced {
    frames: u64,
}

impl Unpaced {
    pub fn frames_elapsed(&self) -> u64 {
        self.frames
    }
}

impl FrameSync for Unpaced {
    fn wait_frame(&mut self) {
        self.frames += 1;
    }
}

/// Sleeps until the next frame deadline at a fixed rate.
#[derive(Debug)]
pub struct PacedSync {
    period: Duration,
    next_deadline: Option<Instant>,
    frames: u64,
}

impl PacedSync {
    /// PAL display refresh.
    pub const DEFAULT_HZ: u32 = 50;

    pub fn new(hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            next_deadline: None,
            frames: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn frames_elapsed(&self) -> u64 {
        self.frames
    }
}

impl Default for PacedSync {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HZ)
    }
}

impl FrameSync for PacedSync {
    fn wait_frame(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.period);

        if deadline > now {
            thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.period);
        } else {
            // Fell behind: resync instead of bursting through missed frames.
            self.next_deadline = Some(now + self.period);
        }
        self.frames += 1;
    }
}

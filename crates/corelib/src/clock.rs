use std::time::{Duration, Instant};

/// Per-frame time bookkeeping. Call [`FrameClock::tick`] once per frame,
/// before anything that animates.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    elapsed: f32,
    delta: f32,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last: start,
            elapsed: 0.0,
            delta: 0.0,
            frames: 0,
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances to `now`. Timestamps earlier than the previous tick count
    /// as zero delta and do not move the clock backwards.
    pub fn tick_at(&mut self, now: Instant) {
        let now = now.max(self.last);
        self.delta = now.duration_since(self.last).as_secs_f32();
        self.elapsed = now.duration_since(self.start).as_secs_f32();
        self.last = now;
        self.frames += 1;
    }

    /// Seconds since the clock started, as of the last tick.
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }

    /// Seconds between the last two ticks.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[inline]
    pub fn since_start(&self) -> Duration {
        self.last.duration_since(self.start)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

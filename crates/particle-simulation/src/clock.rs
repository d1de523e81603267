//! Fixed-cadence frame driver
//!
//! Scenes advance in whole frames. The host measures wall-clock time
//! between redraws and asks the clock how many frames to run.

use std::time::Duration;

/// Default frames per second
pub const DEFAULT_TICK_RATE: f32 = 60.0;

/// Frames run at most per `advance`, backlog beyond that is dropped
pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

#[derive(Clone, Debug)]
pub struct FrameClock {
    tick: Duration,
    accumulator: Duration,
    max_catch_up: u32,
    total_ticks: u64,
    paused: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

impl FrameClock {
    /// Clock ticking `rate` times per second (at least once per second)
    pub fn new(rate: f32) -> Self {
        let rate = if rate.is_finite() { rate.max(1.0) } else { DEFAULT_TICK_RATE };
        Self {
            tick: Duration::from_secs_f32(1.0 / rate),
            accumulator: Duration::ZERO,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            total_ticks: 0,
            paused: false,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Add `elapsed` wall time and return how many frames are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.tick && ticks < self.max_catch_up {
            self.accumulator -= self.tick;
            ticks += 1;
        }

        if self.accumulator >= self.tick {
            log::debug!(
                "Frame clock dropped {:.1} ms of backlog",
                self.accumulator.as_secs_f32() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }

        self.total_ticks += u64::from(ticks);
        ticks
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pausing also forgets any partial frame
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.accumulator = Duration::ZERO;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }
}

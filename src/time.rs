//! Wall-clock time sources and the per-entity stopwatches that read them.
//!
//! Entities never store a clock themselves. Each one owns a [`Stopwatch`] holding the moment it
//! was last restarted, and samples the shared [`TimeSource`] whenever a timer needs checking.
//! Timers are therefore polled, and their granularity is whatever the frame rate allows.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bevy_ecs::resource::Resource;
use parking_lot::Mutex;

/// A monotonic source of "now", measured from an arbitrary epoch.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Real time, measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a handle can be kept after the clock has been
/// handed to a [`GameClock`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    pub fn set(&self, now: Duration) {
        *self.now.lock() = now;
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

/// The time source shared by every system in the world.
#[derive(Resource)]
pub struct GameClock(Box<dyn TimeSource + Send + Sync>);

impl GameClock {
    pub fn new(source: impl TimeSource + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

impl TimeSource for GameClock {
    fn now(&self) -> Duration {
        self.0.now()
    }
}

/// Remembers when it was last (re)started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Duration,
}

impl Stopwatch {
    pub fn start(clock: &dyn TimeSource) -> Self {
        Self {
            started_at: clock.now(),
        }
    }

    pub fn restart(&mut self, clock: &dyn TimeSource) {
        self.started_at = clock.now();
    }

    /// Time since the last restart. Saturates at zero if the clock reads earlier than the start.
    pub fn elapsed(&self, clock: &dyn TimeSource) -> Duration {
        clock.now().saturating_sub(self.started_at)
    }
}

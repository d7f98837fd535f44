//! Periodic tick sources.
//!
//! A [`Clock`] owns at most one running schedule. Every schedule gets a fresh
//! [`ScheduleHandle`] generation and every [`Tick`] carries the handle it was
//! produced for, so a consumer can drop ticks from a superseded schedule even
//! when the host loop delivers them late.

mod frame;
mod mock;

pub use frame::FrameClock;
pub use mock::ManualClock;

/// Nominal animation frame interval (~60 Hz).
pub const FRAME_INTERVAL_MS: u16 = 16;

/// Identifies one schedule started on a [`Clock`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScheduleHandle(u32);

impl ScheduleHandle {
    pub const fn from_generation(generation: u32) -> Self {
        Self(generation)
    }

    pub const fn generation(self) -> u32 {
        self.0
    }
}

/// One periodic invocation of a schedule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tick {
    pub handle: ScheduleHandle,
    pub delta_ms: u32,
}

impl Tick {
    pub fn delta_secs(self) -> f32 {
        self.delta_ms as f32 / 1_000.0
    }
}

/// Cancellable periodic schedule source.
pub trait Clock {
    /// Start a periodic schedule firing every `interval_ms`, replacing any
    /// schedule that is still running.
    fn start(&mut self, interval_ms: u16, now_ms: u64) -> ScheduleHandle;

    /// Stop `handle`. No tick for it is produced afterwards. Cancelling a
    /// handle that is no longer active is a no-op.
    fn cancel(&mut self, handle: ScheduleHandle);

    /// Next due tick at `now_ms`, if any.
    fn poll_tick(&mut self, now_ms: u64) -> Option<Tick>;
}

fn next_generation(generation: &mut u32) -> ScheduleHandle {
    *generation = generation.wrapping_add(1);
    ScheduleHandle(*generation)
}

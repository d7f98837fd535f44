use log::debug;

use super::{Clock, ScheduleHandle, Tick, next_generation};

#[derive(Clone, Copy, Debug)]
struct Schedule {
    handle: ScheduleHandle,
    interval_ms: u16,
    last_ms: u64,
    next_ms: u64,
}

/// Clock driven by a monotonic millisecond counter polled from the host loop.
///
/// Frames missed by a slow host are coalesced: the next tick reports the full
/// elapsed time instead of replaying every skipped interval.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    generation: u32,
    active: Option<Schedule>,
}

impl FrameClock {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            active: None,
        }
    }

    pub fn active(&self) -> Option<ScheduleHandle> {
        self.active.map(|schedule| schedule.handle)
    }
}

impl Clock for FrameClock {
    fn start(&mut self, interval_ms: u16, now_ms: u64) -> ScheduleHandle {
        let handle = next_generation(&mut self.generation);
        let interval_ms = interval_ms.max(1);
        if let Some(previous) = self.active {
            debug!(
                "clock: schedule {} replaced by {}",
                previous.handle.generation(),
                handle.generation()
            );
        }

        self.active = Some(Schedule {
            handle,
            interval_ms,
            last_ms: now_ms,
            next_ms: now_ms + interval_ms as u64,
        });
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        if self.active.is_some_and(|schedule| schedule.handle == handle) {
            self.active = None;
        }
    }

    fn poll_tick(&mut self, now_ms: u64) -> Option<Tick> {
        let schedule = self.active.as_mut()?;
        if now_ms < schedule.next_ms {
            return None;
        }

        let delta_ms = now_ms.saturating_sub(schedule.last_ms);
        schedule.last_ms = now_ms;
        schedule.next_ms += schedule.interval_ms as u64;
        if schedule.next_ms <= now_ms {
            schedule.next_ms = now_ms + schedule.interval_ms as u64;
        }

        Some(Tick {
            handle: schedule.handle,
            delta_ms: delta_ms.min(u32::MAX as u64) as u32,
        })
    }
}

use heapless::Deque;

use super::{Clock, ScheduleHandle, Tick, next_generation};

const QUEUE_CAPACITY: usize = 8;

/// Hand-driven clock for tests and bring-up.
///
/// Ticks are queued explicitly and delivered as-is, including ticks queued for
/// a schedule that was cancelled afterwards. This models a host loop whose
/// callbacks were already in flight; consumers must drop them by handle.
#[derive(Debug, Default)]
pub struct ManualClock {
    generation: u32,
    active: Option<ScheduleHandle>,
    pending: Deque<Tick, QUEUE_CAPACITY>,
    starts: u32,
    cancels: u32,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            active: None,
            pending: Deque::new(),
            starts: 0,
            cancels: 0,
        }
    }

    /// Queue a tick for the active schedule. Returns `false` when nothing runs
    /// or the queue is full.
    pub fn push_tick(&mut self, delta_ms: u32) -> bool {
        match self.active {
            Some(handle) => self.push_tick_for(handle, delta_ms),
            None => false,
        }
    }

    /// Queue a tick for an arbitrary, possibly stale, handle.
    pub fn push_tick_for(&mut self, handle: ScheduleHandle, delta_ms: u32) -> bool {
        self.pending.push_back(Tick { handle, delta_ms }).is_ok()
    }

    pub fn active(&self) -> Option<ScheduleHandle> {
        self.active
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn cancels(&self) -> u32 {
        self.cancels
    }
}

impl Clock for ManualClock {
    fn start(&mut self, _interval_ms: u16, _now_ms: u64) -> ScheduleHandle {
        let handle = next_generation(&mut self.generation);
        self.active = Some(handle);
        self.starts = self.starts.saturating_add(1);
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        if self.active == Some(handle) {
            self.active = None;
            self.cancels = self.cancels.saturating_add(1);
        }
    }

    fn poll_tick(&mut self, _now_ms: u64) -> Option<Tick> {
        self.pending.pop_front()
    }
}

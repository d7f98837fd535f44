use heapless::Deque;

use super::{InputEvent, InputProvider};

const QUEUE_CAPACITY: usize = 8;

/// Gesture queue filled by the host or a test. Empty means playback runs
/// unattended.
#[derive(Debug, Default)]
pub struct QueuedInput {
    pending: Deque<InputEvent, QUEUE_CAPACITY>,
}

impl QueuedInput {
    pub const fn new() -> Self {
        Self {
            pending: Deque::new(),
        }
    }

    /// Returns `false` when the queue is full and the gesture was dropped.
    pub fn push(&mut self, event: InputEvent) -> bool {
        self.pending.push_back(event).is_ok()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

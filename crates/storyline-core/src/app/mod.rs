//! Story player: drives the playback reducer from clock ticks and gestures.

use log::{debug, warn};

use crate::{
    clock::{Clock, FRAME_INTERVAL_MS, ScheduleHandle, Tick},
    content::StoryModel,
    input::{InputEvent, InputProvider},
    playback::{self, DismissReason, Effect, Event, Playback, PlaybackState, Step},
    progress::{self, Segments},
    render::Screen,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlayerConfig {
    pub tick_interval_ms: u16,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

/// Receives the one-shot signal that the story screen should close.
pub trait DismissHandler {
    fn dismiss(&mut self, reason: DismissReason);
}

impl<F> DismissHandler for F
where
    F: FnMut(DismissReason),
{
    fn dismiss(&mut self, reason: DismissReason) {
        (self)(reason)
    }
}

/// Owns the playback position and the single running clock schedule.
///
/// Dropping the player cancels its schedule without signalling dismissal.
pub struct StoryPlayer<'a, C, IN, D>
where
    C: Clock,
    IN: InputProvider,
    D: DismissHandler,
{
    model: StoryModel<'a>,
    clock: C,
    input: IN,
    on_dismiss: D,
    config: PlayerConfig,
    playback: Playback,
    schedule: Option<ScheduleHandle>,
    dismissed_with: Option<DismissReason>,
    pending_redraw: bool,
    last_now_ms: u64,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

impl<C, IN, D> Drop for StoryPlayer<'_, C, IN, D>
where
    C: Clock,
    IN: InputProvider,
    D: DismissHandler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

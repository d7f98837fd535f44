//! Navigation input abstraction.

pub mod mock;

/// Gestures consumed by the story player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Left tap region.
    TapBack,
    /// Right tap region.
    TapForward,
    /// Close affordance.
    Close,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

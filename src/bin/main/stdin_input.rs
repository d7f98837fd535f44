use std::{
    io::BufRead,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use log::info;
use storyline_core::input::{InputEvent, InputProvider};

/// Line-oriented gestures read from stdin on a helper thread.
///
/// `b` taps back, `f` or an empty line taps forward, `q` closes.
pub(super) struct StdinInput {
    events: Receiver<InputEvent>,
    disconnected_logged: bool,
}

impl StdinInput {
    pub(super) fn spawn() -> Self {
        let (sender, events) = mpsc::channel();

        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let Some(event) = parse_gesture(&line) else {
                    continue;
                };
                if sender.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            events,
            disconnected_logged: false,
        }
    }
}

impl InputProvider for StdinInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                if !self.disconnected_logged {
                    info!("input: stdin closed, playback continues unattended");
                    self.disconnected_logged = true;
                }
                Ok(None)
            }
        }
    }
}

fn parse_gesture(line: &str) -> Option<InputEvent> {
    match line.trim() {
        "" | "f" => Some(InputEvent::TapForward),
        "b" => Some(InputEvent::TapBack),
        "q" => Some(InputEvent::Close),
        _ => None,
    }
}

//! Timed story playback engine.
//!
//! Hardware- and toolkit-agnostic core: static story content, a cancellable
//! frame clock, the playback reducer and the controller that drives it.
//!
//! [`reveal`] is a separate profile-header component (typewriter name
//! reveal) sharing the same [`clock::Clock`]; the story player does not use it.

#![no_std]

pub mod app;
pub mod clock;
pub mod content;
pub mod input;
pub mod playback;
pub mod progress;
pub mod render;
pub mod reveal;

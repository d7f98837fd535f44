//! Typewriter reveal for the profile name header.
//!
//! Expanding keeps whatever prefix the current text already shares with the
//! full name and types the rest one character per tick. Collapsing snaps back
//! to the short name. Every toggle replaces the running schedule.

use heapless::String;
use log::debug;

use crate::{
    app::TickResult,
    clock::{Clock, ScheduleHandle},
};

/// Delay between two typed characters.
pub const REVEAL_INTERVAL_MS: u16 = 50;
pub const REVEAL_TEXT_BYTES: usize = 64;

pub struct NameReveal<'a, C>
where
    C: Clock,
{
    short_name: &'a str,
    full_name: &'a str,
    clock: C,
    expanded: bool,
    displayed: String<REVEAL_TEXT_BYTES>,
    revealed_chars: usize,
    schedule: Option<ScheduleHandle>,
    pending_redraw: bool,
}

impl<'a, C> NameReveal<'a, C>
where
    C: Clock,
{
    pub fn new(short_name: &'a str, full_name: &'a str, clock: C) -> Self {
        let mut reveal = Self {
            short_name,
            full_name,
            clock,
            expanded: false,
            displayed: String::new(),
            revealed_chars: 0,
            schedule: None,
            pending_redraw: true,
        };
        reveal.show_short_name();
        reveal
    }

    pub fn displayed(&self) -> &str {
        self.displayed.as_str()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_revealing(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn toggle(&mut self, now_ms: u64) {
        self.cancel_schedule();
        self.expanded = !self.expanded;
        self.pending_redraw = true;

        if !self.expanded {
            self.show_short_name();
            return;
        }

        let shared = self
            .full_name
            .chars()
            .zip(self.displayed.chars())
            .take_while(|(full, shown)| full == shown)
            .count();
        let keep_bytes = self
            .full_name
            .char_indices()
            .nth(shared)
            .map_or(self.full_name.len(), |(offset, _)| offset);

        self.displayed.truncate(keep_bytes);
        self.revealed_chars = shared;

        if self.next_char().is_some() {
            let handle = self.clock.start(REVEAL_INTERVAL_MS, now_ms);
            debug!(
                "reveal: typing from char {} schedule={}",
                shared,
                handle.generation()
            );
            self.schedule = Some(handle);
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if let Some(tick) = self.clock.poll_tick(now_ms)
            && self.schedule == Some(tick.handle)
        {
            self.type_next_char();
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn type_next_char(&mut self) {
        let typed = match self.next_char() {
            Some(ch) => self.displayed.push(ch).is_ok(),
            None => false,
        };

        if typed {
            self.revealed_chars += 1;
            self.pending_redraw = true;
        }

        if !typed || self.next_char().is_none() {
            self.cancel_schedule();
        }
    }

    fn next_char(&self) -> Option<char> {
        self.full_name.chars().nth(self.revealed_chars)
    }

    fn show_short_name(&mut self) {
        self.displayed.clear();
        for ch in self.short_name.chars() {
            if self.displayed.push(ch).is_err() {
                break;
            }
        }
        self.revealed_chars = 0;
    }

    fn cancel_schedule(&mut self) {
        if let Some(handle) = self.schedule.take() {
            self.clock.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameClock;

    const SHORT: &str = "Willas Daniel";
    const FULL: &str = "Willas Daniel Rorrong";

    fn run_until_idle(reveal: &mut NameReveal<'_, FrameClock>, mut now_ms: u64) -> (u64, u32) {
        let mut ticks = 0;
        while reveal.is_revealing() && ticks < 1_000 {
            now_ms += REVEAL_INTERVAL_MS as u64;
            ticks += 1;
            let _ = reveal.tick(now_ms);
        }
        (now_ms, ticks)
    }

    #[test]
    fn expand_types_remaining_chars_one_per_tick() {
        let mut reveal = NameReveal::new(SHORT, FULL, FrameClock::new());
        assert_eq!(reveal.displayed(), SHORT);

        reveal.toggle(0);
        assert!(reveal.is_expanded());
        assert_eq!(reveal.displayed(), SHORT);

        let _ = reveal.tick(REVEAL_INTERVAL_MS as u64);
        assert_eq!(reveal.displayed(), "Willas Daniel ");

        let (_, ticks) = run_until_idle(&mut reveal, REVEAL_INTERVAL_MS as u64);
        assert_eq!(reveal.displayed(), FULL);
        assert_eq!(ticks as usize, FULL.len() - SHORT.len() - 1);
        assert_eq!(reveal.clock().active(), None);
    }

    #[test]
    fn collapse_mid_reveal_snaps_to_short_name_and_stops_typing() {
        let mut reveal = NameReveal::new(SHORT, FULL, FrameClock::new());
        reveal.toggle(0);
        let _ = reveal.tick(50);
        let _ = reveal.tick(100);

        reveal.toggle(110);
        assert!(!reveal.is_expanded());
        assert!(!reveal.is_revealing());
        assert_eq!(reveal.displayed(), SHORT);

        let _ = reveal.tick(1_000);
        assert_eq!(reveal.displayed(), SHORT);
    }

    #[test]
    fn re_expand_keeps_shared_prefix() {
        let mut reveal = NameReveal::new("Ann", "Anna Maria", FrameClock::new());
        reveal.toggle(0);
        let (now_ms, _) = run_until_idle(&mut reveal, 0);
        assert_eq!(reveal.displayed(), "Anna Maria");

        reveal.toggle(now_ms);
        reveal.toggle(now_ms);
        assert_eq!(reveal.displayed(), "Ann");
        let (_, ticks) = run_until_idle(&mut reveal, now_ms);
        assert_eq!(ticks, 7);
        assert_eq!(reveal.displayed(), "Anna Maria");
    }

    #[test]
    fn nothing_to_type_when_names_match() {
        let mut reveal = NameReveal::new(SHORT, SHORT, FrameClock::new());
        reveal.toggle(0);
        assert!(!reveal.is_revealing());
        assert_eq!(reveal.displayed(), SHORT);
    }
}

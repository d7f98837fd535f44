//! Pure playback reducer.
//!
//! `reduce()` maps the current [`Playback`] and one [`Event`] to the next
//! [`Step`]: the replacement playback value plus the side-effect the
//! controller must carry out. Nothing here touches a clock or a callback.

use crate::content::StoryModel;

/// Position inside the story set while playing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    pub story_index: u16,
    pub line_index: u16,
    /// Fraction of the current line already shown, `0.0..=1.0`.
    pub line_progress: f32,
}

impl PlaybackState {
    pub const fn at(story_index: u16, line_index: u16) -> Self {
        Self {
            story_index,
            line_index,
            line_progress: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    Playing(PlaybackState),
    /// Terminal. Every further event is ignored.
    Dismissed,
}

impl Playback {
    pub const fn initial() -> Self {
        Self::Playing(PlaybackState::at(0, 0))
    }

    pub fn state(self) -> Option<PlaybackState> {
        match self {
            Self::Playing(state) => Some(state),
            Self::Dismissed => None,
        }
    }

    pub fn is_dismissed(self) -> bool {
        matches!(self, Self::Dismissed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Tick { delta_secs: f32 },
    TapBack,
    TapForward,
    Close,
}

/// Why playback ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DismissReason {
    /// The last line of the last story finished, or forward navigation ran
    /// past the last story.
    Completed,
    /// Explicit close.
    Closed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    None,
    /// A new line became current; replace the running schedule.
    Restart,
    Dismiss(DismissReason),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub playback: Playback,
    pub effect: Effect,
}

impl Step {
    const fn unchanged(playback: Playback) -> Self {
        Self {
            playback,
            effect: Effect::None,
        }
    }
}

/// Resolve `(story_index, line_index)` to the first playable line at or after
/// it. Stories without lines count as already completed, so they are skipped;
/// running past the last story dismisses.
pub fn enter(model: &StoryModel<'_>, story_index: u16, line_index: u16) -> Step {
    let story_count = model.story_count() as u32;
    let mut story_index = story_index as u32;
    let mut line_index = line_index;

    while story_index < story_count {
        let Some(story) = model.story(story_index as u16) else {
            break;
        };
        if line_index < story.line_count() {
            return Step {
                playback: Playback::Playing(PlaybackState::at(story_index as u16, line_index)),
                effect: Effect::Restart,
            };
        }

        story_index += 1;
        line_index = 0;
    }

    Step {
        playback: Playback::Dismissed,
        effect: Effect::Dismiss(DismissReason::Completed),
    }
}

pub fn reduce(model: &StoryModel<'_>, playback: Playback, event: Event) -> Step {
    let Playback::Playing(state) = playback else {
        return Step::unchanged(playback);
    };

    match event {
        Event::Tick { delta_secs } => tick(model, state, delta_secs),
        Event::TapBack => go_to_previous_story(model, state),
        Event::TapForward => advance_story(model, state),
        Event::Close => Step {
            playback: Playback::Dismissed,
            effect: Effect::Dismiss(DismissReason::Closed),
        },
    }
}

fn tick(model: &StoryModel<'_>, state: PlaybackState, delta_secs: f32) -> Step {
    let Some(line) = model.line(state.story_index, state.line_index) else {
        return advance_story(model, state);
    };

    let Some(duration) = line.playable_duration() else {
        return advance_line(model, state);
    };

    if delta_secs.is_nan() || delta_secs <= 0.0 {
        return Step::unchanged(Playback::Playing(state));
    }

    let progress = state.line_progress + delta_secs / duration;
    if progress < 1.0 {
        return Step {
            playback: Playback::Playing(PlaybackState {
                line_progress: progress,
                ..state
            }),
            effect: Effect::None,
        };
    }

    advance_line(model, state)
}

fn advance_line(model: &StoryModel<'_>, state: PlaybackState) -> Step {
    match state.line_index.checked_add(1) {
        Some(next_line) => enter(model, state.story_index, next_line),
        None => advance_story(model, state),
    }
}

fn advance_story(model: &StoryModel<'_>, state: PlaybackState) -> Step {
    match state.story_index.checked_add(1) {
        Some(next_story) => enter(model, next_story, 0),
        None => enter(model, u16::MAX, u16::MAX),
    }
}

fn go_to_previous_story(model: &StoryModel<'_>, state: PlaybackState) -> Step {
    if state.story_index == 0 {
        return Step::unchanged(Playback::Playing(state));
    }

    enter(model, state.story_index - 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Line, Story};

    const TWO_LINES: [Line<'static>; 2] = [Line::new("a", 2.0), Line::new("b", 2.0)];
    const ZERO_LINE: [Line<'static>; 1] = [Line::new("instant", 0.0)];

    fn playing(story_index: u16, line_index: u16, line_progress: f32) -> Playback {
        Playback::Playing(PlaybackState {
            story_index,
            line_index,
            line_progress,
        })
    }

    #[test]
    fn tick_accumulates_progress_within_line() {
        let stories = [Story::new("s", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 0, 0.0), Event::Tick { delta_secs: 0.5 });
        assert_eq!(step.playback, playing(0, 0, 0.25));
        assert_eq!(step.effect, Effect::None);
    }

    #[test]
    fn completed_line_moves_to_next_line_with_restart() {
        let stories = [Story::new("s", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 0, 0.9), Event::Tick { delta_secs: 0.5 });
        assert_eq!(step.playback, playing(0, 1, 0.0));
        assert_eq!(step.effect, Effect::Restart);
    }

    #[test]
    fn last_line_of_last_story_dismisses() {
        let stories = [Story::new("s", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 1, 0.99), Event::Tick { delta_secs: 1.0 });
        assert_eq!(step.playback, Playback::Dismissed);
        assert_eq!(step.effect, Effect::Dismiss(DismissReason::Completed));
    }

    #[test]
    fn zero_duration_line_completes_on_first_tick() {
        let stories = [Story::new("z", &ZERO_LINE), Story::new("s", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 0, 0.0), Event::Tick { delta_secs: 0.016 });
        assert_eq!(step.playback, playing(1, 0, 0.0));

        let step = reduce(&model, playing(0, 0, 0.0), Event::Tick { delta_secs: 0.0 });
        assert_eq!(step.playback, playing(1, 0, 0.0));
    }

    #[test]
    fn infinite_duration_line_completes_on_first_tick() {
        let lines = [Line::new("a", 1.0), Line::new("forever", f32::INFINITY)];
        let stories = [Story::new("s", &lines), Story::new("next", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 1, 0.0), Event::Tick { delta_secs: 0.016 });
        assert_eq!(step.playback, playing(1, 0, 0.0));
        assert_eq!(step.effect, Effect::Restart);
    }

    #[test]
    fn non_finite_or_negative_delta_is_ignored() {
        let stories = [Story::new("s", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        for delta_secs in [f32::NAN, -1.0, 0.0] {
            let step = reduce(&model, playing(0, 0, 0.3), Event::Tick { delta_secs });
            assert_eq!(step.playback, playing(0, 0, 0.3));
            assert_eq!(step.effect, Effect::None);
        }
    }

    #[test]
    fn forward_skips_remaining_lines_of_story() {
        let stories = [Story::new("a", &TWO_LINES), Story::new("b", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 0, 0.4), Event::TapForward);
        assert_eq!(step.playback, playing(1, 0, 0.0));
        assert_eq!(step.effect, Effect::Restart);

        let step = reduce(&model, playing(1, 0, 0.4), Event::TapForward);
        assert_eq!(step.effect, Effect::Dismiss(DismissReason::Completed));
    }

    #[test]
    fn back_returns_to_first_line_of_previous_story() {
        let stories = [Story::new("a", &TWO_LINES), Story::new("b", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(1, 1, 0.3), Event::TapBack);
        assert_eq!(step.playback, playing(0, 0, 0.0));
        assert_eq!(step.effect, Effect::Restart);
    }

    #[test]
    fn back_from_first_story_is_a_no_op() {
        let stories = [Story::new("a", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 1, 0.3), Event::TapBack);
        assert_eq!(step.playback, playing(0, 1, 0.3));
        assert_eq!(step.effect, Effect::None);
    }

    #[test]
    fn empty_stories_are_skipped() {
        let stories = [
            Story::new("empty", &[]),
            Story::new("a", &TWO_LINES),
            Story::new("empty", &[]),
        ];
        let model = StoryModel::new(&stories);

        assert_eq!(enter(&model, 0, 0).playback, playing(1, 0, 0.0));

        let step = reduce(&model, playing(1, 1, 0.9), Event::Tick { delta_secs: 1.0 });
        assert_eq!(step.effect, Effect::Dismiss(DismissReason::Completed));
    }

    #[test]
    fn empty_model_dismisses_on_entry() {
        let model = StoryModel::new(&[]);
        let step = enter(&model, 0, 0);
        assert_eq!(step.playback, Playback::Dismissed);
        assert_eq!(step.effect, Effect::Dismiss(DismissReason::Completed));
    }

    #[test]
    fn dismissed_ignores_every_event() {
        let stories = [Story::new("a", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        for event in [
            Event::Tick { delta_secs: 1.0 },
            Event::TapBack,
            Event::TapForward,
            Event::Close,
        ] {
            let step = reduce(&model, Playback::Dismissed, event);
            assert_eq!(step.playback, Playback::Dismissed);
            assert_eq!(step.effect, Effect::None);
        }
    }

    #[test]
    fn close_dismisses_with_closed_reason() {
        let stories = [Story::new("a", &TWO_LINES)];
        let model = StoryModel::new(&stories);

        let step = reduce(&model, playing(0, 1, 0.5), Event::Close);
        assert_eq!(step.playback, Playback::Dismissed);
        assert_eq!(step.effect, Effect::Dismiss(DismissReason::Closed));
    }
}

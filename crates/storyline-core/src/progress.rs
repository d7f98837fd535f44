//! Per-story completion for the segmented progress bar.

use heapless::Vec;

use crate::{
    content::{Story, StoryModel},
    playback::{Playback, PlaybackState},
};

/// Segments rendered by the progress bar; stories past this are not drawn.
/// Playback itself still visits every story.
pub const MAX_STORIES: usize = 16;

/// Largest value a story can report before its last line has finished.
const BELOW_COMPLETE: f32 = 1.0 - f32::EPSILON;

pub type Segments = Vec<f32, MAX_STORIES>;

/// Completion of story `index` in `0.0..=1.0`.
///
/// Stories before the current one are full, stories after it are empty. The
/// current story is weighted by line duration; when every line has a
/// degenerate duration the line count is used instead.
pub fn story_progress(model: &StoryModel<'_>, playback: Playback, index: u16) -> f32 {
    if index >= model.story_count() {
        return 0.0;
    }

    let state = match playback {
        Playback::Dismissed => return 1.0,
        Playback::Playing(state) => state,
    };

    if index < state.story_index {
        1.0
    } else if index > state.story_index {
        0.0
    } else {
        model
            .story(index)
            .map_or(0.0, |story| current_story_progress(story, state))
    }
}

/// Progress for every story, in order.
pub fn segments(model: &StoryModel<'_>, playback: Playback) -> Segments {
    let mut out = Segments::new();
    let visible = model.story_count().min(MAX_STORIES as u16);
    for index in 0..visible {
        if out.push(story_progress(model, playback, index)).is_err() {
            break;
        }
    }
    out
}

fn current_story_progress(story: &Story<'_>, state: PlaybackState) -> f32 {
    let line_count = story.line_count();
    if line_count == 0 {
        return 0.0;
    }

    let line_index = state.line_index.min(line_count - 1);
    let line_progress = if state.line_progress.is_nan() {
        0.0
    } else {
        state.line_progress.clamp(0.0, 1.0)
    };

    if line_index + 1 == line_count && line_progress >= 1.0 {
        return 1.0;
    }

    let total = story.total_weight();
    let raw = if total > 0.0 && total.is_finite() {
        let current = story.line(line_index).map_or(0.0, |line| line.weight());
        (story.weight_before(line_index) + line_progress * current) / total
    } else {
        (line_index as f32 + line_progress) / line_count as f32
    };

    raw.clamp(0.0, BELOW_COMPLETE)
}

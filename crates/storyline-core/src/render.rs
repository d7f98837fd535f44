//! View model consumed by the presentation layer.

/// Snapshot of the story screen for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Story {
        title: &'a str,
        line: &'a str,
        story_index: u16,
        story_count: u16,
        line_index: u16,
        line_count: u16,
        line_progress: f32,
        /// Per-story completion, one entry per progress bar segment. Holds at
        /// most `progress::MAX_STORIES` entries, so it can be shorter than
        /// `story_count`.
        segments: &'a [f32],
    },
    /// The screen should close.
    Dismissed,
}

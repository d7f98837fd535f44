//! Immutable story content.

pub mod static_source;

/// One timed text segment inside a [`Story`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub duration_secs: f32,
}

impl<'a> Line<'a> {
    pub const fn new(text: &'a str, duration_secs: f32) -> Self {
        Self {
            text,
            duration_secs,
        }
    }

    /// Tick denominator for this line, `None` when the duration is zero,
    /// negative, infinite or NaN.
    pub fn playable_duration(&self) -> Option<f32> {
        if self.duration_secs > 0.0 && self.duration_secs.is_finite() {
            Some(self.duration_secs)
        } else {
            None
        }
    }

    /// Share of this line in its story's progress bar segment.
    pub fn weight(&self) -> f32 {
        self.playable_duration().unwrap_or(0.0)
    }
}

/// Ordered sequence of lines shown under one progress segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Story<'a> {
    pub title: &'a str,
    pub lines: &'a [Line<'a>],
}

impl<'a> Story<'a> {
    pub const fn new(title: &'a str, lines: &'a [Line<'a>]) -> Self {
        Self { title, lines }
    }

    pub fn line(&self, index: u16) -> Option<&'a Line<'a>> {
        self.lines.get(index as usize)
    }

    pub fn line_count(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line weights before `line_index`.
    pub fn weight_before(&self, line_index: u16) -> f32 {
        self.lines
            .iter()
            .take(line_index as usize)
            .map(Line::weight)
            .sum()
    }

    pub fn total_weight(&self) -> f32 {
        self.lines.iter().map(Line::weight).sum()
    }
}

/// Story set for one screen instance. Never mutated after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryModel<'a> {
    stories: &'a [Story<'a>],
}

impl<'a> StoryModel<'a> {
    pub const fn new(stories: &'a [Story<'a>]) -> Self {
        Self { stories }
    }

    pub fn story(&self, index: u16) -> Option<&'a Story<'a>> {
        self.stories.get(index as usize)
    }

    pub fn line(&self, story_index: u16, line_index: u16) -> Option<&'a Line<'a>> {
        self.story(story_index)?.line(line_index)
    }

    pub fn story_count(&self) -> u16 {
        self.stories.len().min(u16::MAX as usize) as u16
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn stories(&self) -> &'a [Story<'a>] {
        self.stories
    }
}

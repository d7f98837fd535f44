use super::{Line, Story, StoryModel};

/// Seconds each default segment stays on screen.
pub const DEFAULT_LINE_SECS: f32 = 3.0;

const FIRST_STORY_LINES: [Line<'static>; 2] = [
    Line::new("Hi! I'm Willas.", DEFAULT_LINE_SECS),
    Line::new("Machine learning enthusiast from Palu, Indonesia.", DEFAULT_LINE_SECS),
];

const SECOND_STORY_LINES: [Line<'static>; 3] = [
    Line::new("I love building things that make life easier.", DEFAULT_LINE_SECS),
    Line::new("Swift, Python, iOS and a lot of curiosity.", DEFAULT_LINE_SECS),
    Line::new("Stay curious, keep learning.", DEFAULT_LINE_SECS),
];

const THIRD_STORY_LINES: [Line<'static>; 2] = [
    Line::new("Off the keyboard: chess and photography.", DEFAULT_LINE_SECS),
    Line::new("Thanks for stopping by!", DEFAULT_LINE_SECS),
];

/// Portfolio stories shown when the avatar is tapped.
pub const PORTFOLIO_STORIES: [Story<'static>; 3] = [
    Story::new("First Story", &FIRST_STORY_LINES),
    Story::new("Second Story", &SECOND_STORY_LINES),
    Story::new("Third Story", &THIRD_STORY_LINES),
];

pub fn default_portfolio_model() -> StoryModel<'static> {
    StoryModel::new(&PORTFOLIO_STORIES)
}

impl<'a, C, IN, D> StoryPlayer<'a, C, IN, D>
where
    C: Clock,
    IN: InputProvider,
    D: DismissHandler,
{
    /// Build a player positioned at the first line. Nothing is scheduled until
    /// [`StoryPlayer::start`] is called.
    pub fn new(
        model: StoryModel<'a>,
        clock: C,
        input: IN,
        on_dismiss: D,
        mut config: PlayerConfig,
    ) -> Self {
        config.tick_interval_ms = config.tick_interval_ms.max(1);
        if model.story_count() as usize > progress::MAX_STORIES {
            warn!(
                "player: {} stories, progress bar shows the first {}",
                model.story_count(),
                progress::MAX_STORIES
            );
        }

        Self {
            model,
            clock,
            input,
            on_dismiss,
            config,
            playback: Playback::initial(),
            schedule: None,
            dismissed_with: None,
            pending_redraw: true,
            last_now_ms: 0,
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let Some(state) = self.playback.state() else {
            f(Screen::Dismissed);
            return;
        };
        let Some(story) = self.model.story(state.story_index) else {
            f(Screen::Dismissed);
            return;
        };

        let segments = self.segments();
        let line = story
            .line(state.line_index)
            .map_or("", |line| line.text);

        f(Screen::Story {
            title: story.title,
            line,
            story_index: state.story_index,
            story_count: self.model.story_count(),
            line_index: state.line_index,
            line_count: story.line_count(),
            line_progress: state.line_progress,
            segments: &segments,
        });
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Current `(story, line, progress)` while playing.
    pub fn position(&self) -> Option<PlaybackState> {
        self.playback.state()
    }

    pub fn story_progress(&self, index: u16) -> f32 {
        progress::story_progress(&self.model, self.playback, index)
    }

    pub fn segments(&self) -> Segments {
        progress::segments(&self.model, self.playback)
    }

    pub fn is_dismissed(&self) -> bool {
        self.playback.is_dismissed()
    }

    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        self.dismissed_with
    }

    /// Handle of the running schedule, if any.
    pub fn active_schedule(&self) -> Option<ScheduleHandle> {
        self.schedule
    }

    pub fn model(&self) -> StoryModel<'a> {
        self.model
    }

    pub fn config(&self) -> PlayerConfig {
        self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}

impl<C, IN, D> StoryPlayer<'_, C, IN, D>
where
    C: Clock,
    IN: InputProvider,
    D: DismissHandler,
{
    /// Show `line_index` of `story_index` from the beginning and replace the
    /// running schedule. Ignored once dismissed.
    pub fn start(&mut self, story_index: u16, line_index: u16, now_ms: u64) {
        self.last_now_ms = now_ms;
        if self.is_dismissed() {
            return;
        }

        let step = playback::enter(&self.model, story_index, line_index);
        self.apply(step, now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.last_now_ms = now_ms;
        self.process_inputs(now_ms);

        if let Some(tick) = self.clock.poll_tick(now_ms) {
            self.apply_tick(tick, now_ms);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Release the running schedule. Used on abrupt teardown; does not signal
    /// dismissal.
    pub fn teardown(&mut self) {
        self.cancel_schedule();
    }

    fn apply_tick(&mut self, tick: Tick, now_ms: u64) {
        if self.schedule != Some(tick.handle) {
            debug!(
                "player: dropped stale tick for schedule {}",
                tick.handle.generation()
            );
            return;
        }

        self.dispatch(
            Event::Tick {
                delta_secs: tick.delta_secs(),
            },
            now_ms,
        );
    }

    fn dispatch(&mut self, event: Event, now_ms: u64) {
        self.last_now_ms = now_ms;
        if self.is_dismissed() {
            return;
        }

        let step = playback::reduce(&self.model, self.playback, event);
        self.apply(step, now_ms);
    }

    fn apply(&mut self, step: Step, now_ms: u64) {
        if step.playback != self.playback {
            self.pending_redraw = true;
        }
        self.playback = step.playback;

        match step.effect {
            Effect::None => {}
            Effect::Restart => self.restart_schedule(now_ms),
            Effect::Dismiss(reason) => self.finish(reason),
        }
    }

    fn restart_schedule(&mut self, now_ms: u64) {
        self.cancel_schedule();
        let handle = self.clock.start(self.config.tick_interval_ms, now_ms);
        self.schedule = Some(handle);

        if let Some(state) = self.playback.state() {
            debug!(
                "player: story={} line={} schedule={}",
                state.story_index,
                state.line_index,
                handle.generation()
            );
        }
    }

    fn cancel_schedule(&mut self) {
        if let Some(handle) = self.schedule.take() {
            self.clock.cancel(handle);
        }
    }

    fn finish(&mut self, reason: DismissReason) {
        self.cancel_schedule();
        self.playback = Playback::Dismissed;
        self.pending_redraw = true;

        if self.dismissed_with.is_none() {
            self.dismissed_with = Some(reason);
            debug!("player: dismissed reason={:?}", reason);
            self.on_dismiss.dismiss(reason);
        }
    }
}

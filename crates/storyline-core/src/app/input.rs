impl<C, IN, D> StoryPlayer<'_, C, IN, D>
where
    C: Clock,
    IN: InputProvider,
    D: DismissHandler,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, dropping remaining gestures this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::TapBack => self.go_to_previous_story(now_ms),
            InputEvent::TapForward => self.go_to_next_story(now_ms),
            InputEvent::Close => self.close(),
        }
    }

    /// Back to the first line of the previous story. No-op on the first story.
    pub fn go_to_previous_story(&mut self, now_ms: u64) {
        self.dispatch(Event::TapBack, now_ms);
    }

    /// Skip the rest of the current story.
    pub fn go_to_next_story(&mut self, now_ms: u64) {
        self.dispatch(Event::TapForward, now_ms);
    }

    /// Dismiss immediately. Later calls are no-ops.
    pub fn close(&mut self) {
        self.dispatch(Event::Close, self.last_now_ms);
    }
}

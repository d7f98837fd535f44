use std::io::{self, Write};

use storyline_core::render::Screen;

const SEGMENT_CELLS: usize = 10;

/// Single-line terminal renderer, redrawn in place.
pub(super) struct TerminalRenderer<W: Write> {
    out: W,
    last_frame: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub(super) fn new(out: W) -> Self {
        Self {
            out,
            last_frame: String::new(),
        }
    }

    pub(super) fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let frame = compose(screen);
        if frame == self.last_frame {
            return Ok(());
        }

        write!(self.out, "\r\x1b[2K{frame}")?;
        if matches!(screen, Screen::Dismissed) {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        self.last_frame = frame;
        Ok(())
    }
}

fn compose(screen: Screen<'_>) -> String {
    match screen {
        Screen::Story {
            title,
            line,
            line_index,
            line_count,
            segments,
            ..
        } => {
            let mut frame = String::new();
            for progress in segments {
                frame.push('[');
                frame.push_str(&segment_bar(*progress));
                frame.push(']');
            }
            frame.push_str(&format!(
                " {title} ({}/{}) {line}",
                line_index + 1,
                line_count
            ));
            frame
        }
        Screen::Dismissed => String::from("story closed"),
    }
}

fn segment_bar(progress: f32) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * SEGMENT_CELLS as f32) as usize).min(SEGMENT_CELLS);
    let mut bar = "#".repeat(filled);
    bar.push_str(&"-".repeat(SEGMENT_CELLS - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_segments_title_and_line() {
        let segments = [1.0, 0.5, 0.0];
        let frame = compose(Screen::Story {
            title: "Second Story",
            line: "hello",
            story_index: 1,
            story_count: 3,
            line_index: 0,
            line_count: 2,
            line_progress: 0.5,
            segments: &segments,
        });

        assert_eq!(
            frame,
            "[##########][#####-----][----------] Second Story (1/2) hello"
        );
    }

    #[test]
    fn skips_identical_frames() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(Screen::Dismissed).unwrap();
        let written = renderer.out.len();
        renderer.render(Screen::Dismissed).unwrap();
        assert_eq!(renderer.out.len(), written);
    }
}

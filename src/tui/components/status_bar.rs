//! One-line status strip: current fragment on the left, key hints on the
//! right, and a spinner while any request is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Braille spinner, stepped at ~12 fps by the event loop's frame counter.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const HINTS: &str = "Ctrl+1..4 pages · Alt+←/→ history · q quit ";

pub struct StatusBar<'a> {
    /// Current fragment path, shown as `#/path`.
    pub path: &'a str,
    /// Mirrors the request gate; drives the spinner.
    pub loading: bool,
    pub spinner_frame: usize,
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" #{}", self.path),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if self.loading {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!("  {glyph} Loading…"),
                Style::default().fg(Color::Yellow),
            ));
        }

        let used: usize = spans.iter().map(|s| s.width()).sum();
        let hints_width = Span::raw(HINTS).width();
        let total = area.width as usize;
        if used + hints_width < total {
            spans.push(Span::raw(" ".repeat(total - used - hints_width)));
            spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(bar: &mut StatusBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| bar.render(frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_shows_fragment_path_and_hints() {
        let content = draw(&mut StatusBar {
            path: "/about",
            loading: false,
            spinner_frame: 0,
        });
        assert!(content.contains("#/about"));
        assert!(content.contains("q quit"));
        assert!(!content.contains("Loading"));
    }

    #[test]
    fn test_spinner_appears_only_while_loading() {
        let content = draw(&mut StatusBar {
            path: "/users",
            loading: true,
            spinner_frame: 12,
        });
        assert!(content.contains("Loading…"));
        // frame 12 wraps to the third glyph
        assert!(content.contains(SPINNER_FRAMES[2]));
    }

    #[test]
    fn test_hints_dropped_when_the_line_is_too_narrow() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|frame| {
                StatusBar {
                    path: "/contact",
                    loading: false,
                    spinner_frame: 0,
                }
                .render(frame, frame.area())
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("#/contact"));
        assert!(!content.contains("quit"));
    }
}

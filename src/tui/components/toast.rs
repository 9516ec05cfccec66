//! Transient notification overlay, pinned to the top-right corner of the
//! container and drawn last so it floats over page content.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{Notification, NoticeKind};
use crate::tui::component::Component;

fn badge(kind: NoticeKind) -> (&'static str, Color) {
    match kind {
        NoticeKind::Success => ("✓", Color::Green),
        NoticeKind::Error => ("✕", Color::Red),
        NoticeKind::Info => ("ℹ", Color::Cyan),
        NoticeKind::Warning => ("⚠", Color::Yellow),
    }
}

pub struct Toast<'a> {
    pub notification: &'a Notification,
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (symbol, color) = badge(self.notification.kind);
        let text = format!("{symbol} {}", self.notification.text);

        let width = (text.as_str().width() as u16 + 4).min(area.width);
        let rect = Rect {
            x: area.right().saturating_sub(width.saturating_add(1)).max(area.x),
            y: area.y + 1,
            width,
            height: 3,
        }
        .intersection(area);
        if rect.is_empty() {
            return;
        }

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(format!(" {text}"))
                .style(Style::default().fg(color))
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::NOTICE_TTL;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn notice(kind: NoticeKind, text: &str) -> Notification {
        Notification {
            kind,
            text: text.to_string(),
            deadline: Instant::now() + NOTICE_TTL,
        }
    }

    fn draw(notification: &Notification) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| {
                Toast { notification }.render(frame, frame.area());
            })
            .unwrap();
        terminal
    }

    fn content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_success_toast_shows_check_and_text() {
        let terminal = draw(&notice(NoticeKind::Success, "Message sent successfully!"));
        let text = content(&terminal);
        assert!(text.contains("✓ Message sent successfully!"));
    }

    #[test]
    fn test_error_toast_is_red() {
        let terminal = draw(&notice(NoticeKind::Error, "Failed to load users."));
        let text = content(&terminal);
        assert!(text.contains("✕ Failed to load users."));

        // the border row sits one line down, hugging the right edge
        let buffer = terminal.backend().buffer();
        let corner = buffer.cell((78, 1)).unwrap();
        assert_eq!(corner.fg, Color::Red);
    }

    #[test]
    fn test_toast_hugs_the_top_right() {
        let terminal = draw(&notice(NoticeKind::Info, "hi"));
        let buffer = terminal.backend().buffer();
        // nothing on the left half of the toast row
        for col in 0..40 {
            assert_eq!(buffer.cell((col, 1)).unwrap().symbol(), " ");
        }
    }

    #[test]
    fn test_oversized_toast_is_clipped_not_dropped() {
        let long = "x".repeat(200);
        let notification = notice(NoticeKind::Warning, &long);
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|frame| {
                Toast {
                    notification: &notification,
                }
                .render(frame, frame.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("⚠"));
    }
}

//! Users page content — one bordered card per fetched user, plus the
//! loading and failure states of the fetch lifecycle.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::api::User;
use crate::core::state::UsersPhase;

/// Builds the stacked content blocks for the current fetch phase.
///
/// Heights are measured at `width` so the scroll view can size its buffer
/// before anything is drawn.
pub fn content(phase: &UsersPhase, width: u16) -> Vec<(Paragraph<'_>, u16)> {
    match phase {
        UsersPhase::Loading => vec![measured(placeholder("Loading users…"), width)],
        UsersPhase::Failed(message) => vec![measured(failure(message), width)],
        UsersPhase::Loaded(users) => {
            if users.is_empty() {
                return vec![measured(placeholder("No users to show."), width)];
            }
            let mut blocks = Vec::with_capacity(users.len() + 1);
            blocks.push(measured(header(users.len()), width));
            blocks.extend(users.iter().map(|user| measured(card(user), width)));
            blocks
        }
    }
}

fn measured(paragraph: Paragraph<'_>, width: u16) -> (Paragraph<'_>, u16) {
    let height = paragraph.line_count(width) as u16;
    (paragraph, height)
}

fn placeholder(text: &str) -> Paragraph<'static> {
    Paragraph::new(format!("\n{text}\n"))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false })
}

fn header(count: usize) -> Paragraph<'static> {
    let noun = if count == 1 { "user" } else { "users" };
    Paragraph::new(Line::from(vec![
        Span::styled("Users", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {count} {noun} fetched"),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn card(user: &User) -> Paragraph<'_> {
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            format!("@{}", user.username),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(vec![
            Span::styled("email    ", label),
            Span::raw(user.email.as_str()),
        ]),
        Line::from(vec![
            Span::styled("phone    ", label),
            Span::raw(user.phone.as_str()),
        ]),
        Line::from(vec![
            Span::styled("website  ", label),
            Span::styled(
                user.website_url(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![
            Span::styled("company  ", label),
            Span::raw(user.company.name.as_str()),
        ]),
    ];
    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", user.name),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false })
}

fn failure(message: &str) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::raw(message)),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to retry, or r to refresh.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    " Couldn't load users ",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Company;

    fn sample_user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "1-770-736-8031".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
        }
    }

    #[test]
    fn test_loading_phase_yields_single_placeholder() {
        let phase = UsersPhase::Loading;
        let blocks = content(&phase, 80);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_loaded_phase_yields_header_plus_one_card_per_user() {
        let phase = UsersPhase::Loaded(vec![sample_user(1, "Leanne"), sample_user(2, "Ervin")]);
        let blocks = content(&phase, 80);
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_empty_result_yields_placeholder_not_bare_header() {
        let phase = UsersPhase::Loaded(Vec::new());
        let blocks = content(&phase, 80);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_card_height_covers_five_fields_plus_borders() {
        let phase = UsersPhase::Loaded(vec![sample_user(1, "Leanne")]);
        let blocks = content(&phase, 80);
        // 5 content lines + 2 border rows
        assert_eq!(blocks[1].1, 7);
    }

    #[test]
    fn test_failure_keeps_the_reported_message() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let phase = UsersPhase::Failed("HTTP error! status: 500".into());
        let blocks = content(&phase, 80);
        assert_eq!(blocks.len(), 1);

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| {
                let (paragraph, _) = &blocks[0];
                frame.render_widget(paragraph.clone(), frame.area());
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("status: 500"));
        assert!(content.contains("retry"));
    }
}

//! Top navigation bar: brand, one link per registered route, and a
//! "raised" treatment once the page below has been scrolled.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::route::Route;
use crate::tui::component::Component;

const BRAND: &str = " Placard ";

fn link_label(route: Route) -> String {
    format!("  {}  ", route.label())
}

pub struct NavBar {
    /// Which link gets the active treatment, if any.
    pub active: Option<Route>,
    /// Scrolled-content emphasis, the terminal cousin of a drop shadow.
    pub raised: bool,
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.raised {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![
            Span::styled(
                BRAND,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
        ];
        for route in Route::ALL {
            let style = if self.active == Some(route) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(link_label(route), style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            ),
            area,
        );
    }
}

/// Maps a click position back to the link under it. Recomputes the span
/// offsets the same way `render` lays them out, so the two can't drift.
pub fn link_at(column: u16, row: u16, area: Rect) -> Option<Route> {
    if area.height < 3 || row != area.y + 1 {
        return None;
    }
    if column < area.x + 1 || column > area.right().saturating_sub(2) {
        return None;
    }
    let mut x = area.x + 1 + BRAND.width() as u16 + 1;
    if column < x {
        return None;
    }
    for route in Route::ALL {
        let width = link_label(route).as_str().width() as u16;
        if column < x + width {
            return Some(route);
        }
        x += width;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(nav: &mut NavBar) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| nav.render(frame, frame.area()))
            .unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|col| buffer.cell((col, row)).unwrap().symbol())
            .collect()
    }

    #[test]
    fn test_renders_brand_and_all_links() {
        let terminal = draw(&mut NavBar {
            active: None,
            raised: false,
        });
        let row = row_text(&terminal, 1);
        assert!(row.contains("Placard"));
        for route in Route::ALL {
            assert!(row.contains(route.label()), "missing {}", route.label());
        }
    }

    #[test]
    fn test_active_link_is_underlined() {
        let terminal = draw(&mut NavBar {
            active: Some(Route::About),
            raised: false,
        });
        let row = row_text(&terminal, 1);
        // Byte offsets overshoot the column once the border glyphs appear;
        // count chars instead.
        let column = |label: &str| {
            let idx = row.find(label).unwrap();
            row[..idx].chars().count() as u16
        };

        let cell = terminal.backend().buffer().cell((column("About"), 1)).unwrap();
        assert!(cell.modifier.contains(Modifier::UNDERLINED));

        let home_cell = terminal.backend().buffer().cell((column("Home"), 1)).unwrap();
        assert!(!home_cell.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_raised_bar_brightens_the_border() {
        let raised = draw(&mut NavBar {
            active: None,
            raised: true,
        });
        let corner = raised.backend().buffer().cell((0, 0)).unwrap().clone();
        assert_eq!(corner.fg, Color::Cyan);

        let flat = draw(&mut NavBar {
            active: None,
            raised: false,
        });
        let corner = flat.backend().buffer().cell((0, 0)).unwrap().clone();
        assert_eq!(corner.fg, Color::DarkGray);
    }

    #[test]
    fn test_link_at_maps_clicks_to_routes() {
        let area = Rect::new(0, 0, 80, 3);
        // brand is " Placard " (9 cols) + a separator, links start at 11
        assert_eq!(link_at(11, 1, area), Some(Route::Home));
        assert_eq!(link_at(21, 1, area), Some(Route::About));
        assert_eq!(link_at(30, 1, area), Some(Route::Users));
        assert_eq!(link_at(40, 1, area), Some(Route::Contact));
    }

    #[test]
    fn test_link_at_ignores_brand_borders_and_dead_space() {
        let area = Rect::new(0, 0, 80, 3);
        assert_eq!(link_at(3, 1, area), None, "brand is not a link");
        assert_eq!(link_at(11, 0, area), None, "border row");
        assert_eq!(link_at(11, 2, area), None, "border row");
        assert_eq!(link_at(70, 1, area), None, "past the last link");
        assert_eq!(link_at(0, 1, area), None, "left border");
    }

    #[test]
    fn test_link_at_respects_area_offset() {
        let area = Rect::new(5, 10, 60, 3);
        assert_eq!(link_at(16, 11, area), Some(Route::Home));
        assert_eq!(link_at(16, 1, area), None);
    }
}

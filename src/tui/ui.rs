//! Frame composition.
//!
//! One function, [`draw_ui`], lays out the chrome (nav bar on top, status
//! strip at the bottom) and mounts whatever [`Page`] the reducer left in
//! state into the shared container between them. The toast overlay is
//! drawn last so it floats over page content.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::route::Route;
use crate::core::state::{App, Page};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, PageView, StatusBar, Toast, nav_bar, static_pages, users};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [nav_area, container_area, status_area] = layout(frame.area());

    // Container first: the nav bar needs to know whether it scrolled.
    match &app.page {
        Page::Home => mount_text(frame, container_area, tui, static_pages::home()),
        Page::About => mount_text(frame, container_area, tui, static_pages::about()),
        Page::NotFound { path } => {
            mount_text(frame, container_area, tui, static_pages::not_found(path));
        }
        Page::Users(phase) => {
            let width = container_area.width.saturating_sub(1).max(1);
            PageView {
                state: &mut tui.page_view,
                blocks: users::content(phase, width),
            }
            .render(frame, container_area);
        }
        Page::Contact(form) => tui.contact.render(frame, container_area, form),
    }

    NavBar {
        active: app.active,
        raised: !matches!(app.page, Page::Contact(_)) && tui.page_view.scrolled(),
    }
    .render(frame, nav_area);

    StatusBar {
        path: app.router.current_path(),
        loading: app.loading.is_loading(),
        spinner_frame,
    }
    .render(frame, status_area);

    if let Some(notification) = &app.notification {
        Toast { notification }.render(frame, container_area);
    }
}

fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Template-driven pages arrive as one block of styled text; measure it at
/// the container width and hand it to the scroll view.
fn mount_text(frame: &mut Frame, area: Rect, tui: &mut TuiState, text: Text<'static>) {
    let width = area.width.saturating_sub(1).max(1);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let height = paragraph.line_count(width) as u16;
    PageView {
        state: &mut tui.page_view,
        blocks: vec![(paragraph, height)],
    }
    .render(frame, area);
}

/// Resolves a mouse click against the nav bar, recomputing the same layout
/// `draw_ui` used so the hit-test can't drift from the drawing.
pub fn nav_hit_test(column: u16, row: u16, frame_area: Rect) -> Option<Route> {
    let [nav_area, _, _] = layout(frame_area);
    nav_bar::link_at(column, row, nav_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Company, User};
    use crate::core::action::{Action, update};
    use crate::core::state::NoticeKind;
    use crate::test_support::{test_app, test_app_at};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    fn render(app: &App, tui: &mut TuiState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw_ui(frame, app, tui, 0))
            .unwrap();
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|col| buffer.cell((col, row)).unwrap().symbol())
            .collect()
    }

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
        }
    }

    #[test]
    fn test_home_fills_the_container() {
        let mut app = test_app();
        update(&mut app, Action::Dispatch);

        let terminal = render(&app, &mut TuiState::new());
        let content = screen(&terminal);
        assert!(content.contains("Placard"));
        assert!(content.contains("Highlights"));
        assert!(content.contains("#/"));
    }

    #[test]
    fn test_about_marks_its_nav_link_active() {
        let mut app = test_app_at("/about");
        update(&mut app, Action::Dispatch);

        let terminal = render(&app, &mut TuiState::new());
        let nav_row = row_text(&terminal, 1);
        // The border glyphs are multi-byte; count chars, not bytes, to get
        // the screen column.
        let column = |label: &str| {
            let idx = nav_row.find(label).unwrap();
            nav_row[..idx].chars().count() as u16
        };

        let cell = terminal.backend().buffer().cell((column("About"), 1)).unwrap();
        assert!(cell.modifier.contains(Modifier::UNDERLINED));

        let home = terminal.backend().buffer().cell((column("Home"), 1)).unwrap();
        assert!(!home.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_users_page_shows_cards_after_load() {
        let mut app = test_app_at("/users");
        update(&mut app, Action::Dispatch);
        let generation = app.generation;
        update(
            &mut app,
            Action::UsersLoaded {
                generation,
                result: Ok(vec![sample_user()]),
            },
        );

        let terminal = render(&app, &mut TuiState::new());
        let content = screen(&terminal);
        assert!(content.contains("Leanne Graham"));
        assert!(content.contains("Sincere@april.biz"));
        assert!(content.contains("1 user fetched"));
    }

    #[test]
    fn test_not_found_shows_the_missed_path() {
        let mut app = test_app_at("/no-such-page");
        update(&mut app, Action::Dispatch);

        let terminal = render(&app, &mut TuiState::new());
        let content = screen(&terminal);
        assert!(content.contains("404"));
        assert!(content.contains("/no-such-page"));
    }

    #[test]
    fn test_loading_spinner_tracks_the_gate() {
        let mut app = test_app();
        update(&mut app, Action::Dispatch);

        let idle = screen(&render(&app, &mut TuiState::new()));
        assert!(!idle.contains("Loading…"));

        let guard = app.loading.hold();
        let busy = screen(&render(&app, &mut TuiState::new()));
        assert!(busy.contains("Loading…"));

        drop(guard);
        let after = screen(&render(&app, &mut TuiState::new()));
        assert!(!after.contains("Loading…"));
    }

    /// Drawing the same state twice produces byte-identical frames.
    #[test]
    fn test_redraw_is_idempotent() {
        let mut app = test_app_at("/about");
        update(&mut app, Action::Dispatch);
        let mut tui = TuiState::new();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw_ui(frame, &app, &mut tui, 0))
            .unwrap();
        let first = terminal.backend().buffer().clone();
        terminal
            .draw(|frame| draw_ui(frame, &app, &mut tui, 0))
            .unwrap();
        let second = terminal.backend().buffer().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_toast_floats_over_the_page() {
        let mut app = test_app();
        update(&mut app, Action::Dispatch);
        app.notify(NoticeKind::Error, "Failed to load users.");

        let content = screen(&render(&app, &mut TuiState::new()));
        assert!(content.contains("✕ Failed to load users."));
    }

    #[test]
    fn test_nav_hit_test_resolves_links() {
        let frame_area = Rect::new(0, 0, 80, 24);
        assert_eq!(nav_hit_test(12, 1, frame_area), Some(Route::Home));
        assert_eq!(nav_hit_test(21, 1, frame_area), Some(Route::About));
        assert_eq!(nav_hit_test(12, 5, frame_area), None, "click in container");
    }
}

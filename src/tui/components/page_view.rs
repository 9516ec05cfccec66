//! Scrollable container shared by every page except the contact form.
//!
//! Pages hand over a stack of pre-measured content blocks; this mounts
//! them into a [`ScrollView`] sized to the full content height so the
//! scrollbar and offset clamping work no matter how tall the page is.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent scroll state. Survives redraws, reset on navigation.
#[derive(Debug, Default)]
pub struct PageViewState {
    pub scroll_state: ScrollViewState,
    viewport_height: u16,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// True once the content has been scrolled off the top; the nav bar
    /// uses this for its raised treatment.
    pub fn scrolled(&self) -> bool {
        self.scroll_state.offset().y > 0
    }

    /// Content can shrink between frames (a refresh, a resize); pull the
    /// offset back inside the valid range before rendering.
    fn clamp_scroll(&mut self, content_height: u16) {
        let max = content_height.saturating_sub(self.viewport_height);
        let offset = self.scroll_state.offset();
        if offset.y > max {
            self.scroll_state.set_offset(Position::new(offset.x, max));
        }
    }
}

impl EventHandler for PageViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::CursorHome => self.scroll_state.scroll_to_top(),
            TuiEvent::CursorEnd => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        Some(())
    }
}

/// Transient per-frame wrapper: blocks are rebuilt from state every draw.
pub struct PageView<'a> {
    pub state: &'a mut PageViewState,
    /// (widget, measured height) pairs, top to bottom.
    pub blocks: Vec<(Paragraph<'a>, u16)>,
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve the right-hand column for the scrollbar.
        let content_width = area.width.saturating_sub(1).max(1);
        let total_height: u16 = self.blocks.iter().map(|(_, height)| *height).sum();

        self.state.viewport_height = area.height;
        self.state.clamp_scroll(total_height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0u16;
        for (paragraph, height) in std::mem::take(&mut self.blocks) {
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

//! Cursor and viewport bookkeeping for form fields.
//!
//! Field *values* live in the app state so that submission and validation
//! never have to reach into the widget tree; this module owns only the
//! presentation side: byte-offset cursors, horizontal/vertical scroll
//! windows, and the actual rendering of bordered inputs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Per-field editing state. The value itself is borrowed in for every
/// operation, so stale offsets are clamped rather than trusted.
#[derive(Debug, Default, Clone)]
pub struct TextFieldState {
    /// Byte offset into the field value.
    pub cursor: usize,
    col_scroll: u16,
    line_scroll: usize,
}

impl TextFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cursor back onto a char boundary inside the value. Called
    /// before every operation because the value can be reset externally
    /// (e.g. the form clearing after a successful submission).
    pub fn clamp(&mut self, value: &str) {
        if self.cursor > value.len() {
            self.cursor = value.len();
        }
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn insert(&mut self, value: &mut String, ch: char) {
        self.clamp(value);
        value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn paste(&mut self, value: &mut String, text: &str) {
        self.clamp(value);
        value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn backspace(&mut self, value: &mut String) -> bool {
        self.clamp(value);
        if self.cursor == 0 {
            return false;
        }
        let start = prev_char_boundary(value, self.cursor);
        value.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn delete(&mut self, value: &mut String) -> bool {
        self.clamp(value);
        if self.cursor >= value.len() {
            return false;
        }
        let end = next_char_boundary(value, self.cursor);
        value.replace_range(self.cursor..end, "");
        true
    }

    pub fn move_left(&mut self, value: &str) {
        self.clamp(value);
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(value, self.cursor);
        }
    }

    pub fn move_right(&mut self, value: &str) {
        self.clamp(value);
        if self.cursor < value.len() {
            self.cursor = next_char_boundary(value, self.cursor);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    /// One-line input with a sliding horizontal window that keeps the
    /// cursor visible.
    pub fn render_single(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        self.clamp(value);
        let inner_width = area.width.saturating_sub(2);
        let cursor_col = UnicodeWidthStr::width(&value[..self.cursor]) as u16;
        self.col_scroll = window_start(self.col_scroll, cursor_col, inner_width);
        let visible = visible_window(value, self.col_scroll, inner_width);
        frame.render_widget(
            Paragraph::new(visible).block(field_block(label, focused)),
            area,
        );
        if focused {
            frame.set_cursor_position((
                area.x + 1 + cursor_col.saturating_sub(self.col_scroll),
                area.y + 1,
            ));
        }
    }

    /// Multi-line input: explicit newlines start fresh lines, everything
    /// else wraps at the inner width, and the viewport scrolls vertically
    /// to follow the cursor.
    pub fn render_multi(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        self.clamp(value);
        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let visible_lines = area.height.saturating_sub(2).max(1) as usize;

        let lines = wrap_lines(value, inner_width);
        let (cursor_line, cursor_col) = cursor_position(value, self.cursor, inner_width);

        if cursor_line < self.line_scroll {
            self.line_scroll = cursor_line;
        } else if cursor_line >= self.line_scroll + visible_lines {
            self.line_scroll = cursor_line - visible_lines + 1;
        }

        let end = (self.line_scroll + visible_lines).min(lines.len());
        let shown = lines
            .get(self.line_scroll..end)
            .unwrap_or(&[])
            .join("\n");
        frame.render_widget(
            Paragraph::new(shown).block(field_block(label, focused)),
            area,
        );
        if focused {
            let col = cursor_col.min(inner_width.saturating_sub(1)) as u16;
            frame.set_cursor_position((
                area.x + 1 + col,
                area.y + 1 + (cursor_line - self.line_scroll) as u16,
            ));
        }
    }
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let (border, title) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {label} "), title))
}

/// Where the horizontal window has to start so the cursor column stays
/// inside a `width`-column viewport.
fn window_start(current: u16, cursor_col: u16, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    if cursor_col < current {
        cursor_col
    } else if cursor_col >= current + width {
        cursor_col - width + 1
    } else {
        current
    }
}

/// The slice of `value` that fits a window of `width` display columns
/// starting at column `start`.
fn visible_window(value: &str, start: u16, width: u16) -> String {
    let mut out = String::new();
    let mut col = 0u16;
    for ch in value.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if col + w > start + width {
            break;
        }
        if col >= start {
            out.push(ch);
        }
        col += w;
    }
    out
}

fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Splits on explicit newlines first, then wraps each logical line.
fn wrap_lines(value: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for logical in value.split('\n') {
        if logical.is_empty() {
            lines.push(String::new());
        } else {
            for piece in textwrap::wrap(logical, wrap_options(width)) {
                lines.push(piece.into_owned());
            }
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// (display line, display column) of the cursor after wrapping. Wrap points
/// trim trailing spaces, so the column can overshoot by the trimmed run;
/// callers clamp it to the viewport.
fn cursor_position(value: &str, cursor: usize, width: usize) -> (usize, usize) {
    let before = &value[..cursor];
    let mut line = 0usize;
    let mut col = 0usize;
    let logicals: Vec<&str> = before.split('\n').collect();
    for (i, logical) in logicals.iter().enumerate() {
        let last = i + 1 == logicals.len();
        if logical.is_empty() {
            if last {
                col = 0;
            } else {
                line += 1;
            }
            continue;
        }
        let wrapped = textwrap::wrap(logical, wrap_options(width));
        if last {
            line += wrapped.len().saturating_sub(1);
            let prior: usize = wrapped[..wrapped.len().saturating_sub(1)]
                .iter()
                .map(|piece| piece.chars().count())
                .sum();
            let tail: String = logical.chars().skip(prior).collect();
            col = UnicodeWidthStr::width(tail.as_str());
        } else {
            line += wrapped.len();
        }
    }
    (line, col)
}

pub fn prev_char_boundary(value: &str, index: usize) -> usize {
    let mut i = index.saturating_sub(1);
    while i > 0 && !value.is_char_boundary(i) {
        i -= 1;
    }
    i
}

pub fn next_char_boundary(value: &str, index: usize) -> usize {
    let mut i = (index + 1).min(value.len());
    while i < value.len() && !value.is_char_boundary(i) {
        i += 1;
    }
    i
}

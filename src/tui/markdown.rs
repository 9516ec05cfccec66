//! Markdown → ratatui `Text` renderer for the page templates.
//!
//! Thin wrapper around `pulldown_cmark` that converts markdown events into
//! styled `Line`/`Span` values: headings, bold, italic, inline code, fenced
//! code blocks (with syntect highlighting), lists, blockquotes, rules, and
//! links. Links whose destination is a fragment path (`#/users`) are page
//! links: instead of printing the URL they get the page's Ctrl+digit hint.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::route::Route;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Parse a markdown template into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut composer = Composer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        composer.handle(event);
    }
    composer.out
}

// ── Composer ────────────────────────────────────────────────────────────────

struct Composer {
    out: Text<'static>,
    base: Color,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    style_stack: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`, code block `│`).
    prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_stack: Vec<Option<u64>>,
    /// Active syntax highlighter for fenced code blocks.
    code_hl: Option<HighlightLines<'static>>,
    /// True inside a fenced block without a recognized language.
    plain_code: bool,
    /// Destination of the link currently being written.
    link: Option<String>,
    /// Whether the next block element should be preceded by a blank line.
    gap_pending: bool,
}

impl Composer {
    fn new(base: Color) -> Self {
        Self {
            out: Text::default(),
            base,
            style_stack: vec![],
            prefixes: vec![],
            list_stack: vec![],
            code_hl: None,
            plain_code: false,
            link: None,
            gap_pending: false,
        }
    }

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.style_stack
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base))
    }

    /// Push a style that composes with the current one (inherits parent modifiers).
    fn push_style(&mut self, overlay: Style) {
        self.style_stack.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.style_stack.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.out.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.out.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn gap_if_pending(&mut self) {
        if self.gap_pending {
            self.push_line(Line::default());
            self.gap_pending = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.write_text(t),
            Event::Code(c) => {
                let style = Style::default().fg(Color::White).bg(Color::DarkGray);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.gap_if_pending();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.gap_pending = true;
            }
            _ => {} // HTML, footnotes, math — skip
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.gap_if_pending();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.gap_if_pending();
                let hs = heading_style(self.base, level);
                let depth = level as usize; // HeadingLevel::H1 == 1
                self.push_line(Line::from(Span::styled(format!("{} ", "#".repeat(depth)), hs)));
                // Heading text inherits the heading style
                self.push_style(hs);
            }
            Tag::BlockQuote(_) => {
                self.gap_if_pending();
                self.prefixes
                    .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
                self.push_style(
                    Style::default()
                        .fg(self.base)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                );
            }
            Tag::CodeBlock(kind) => {
                if !self.out.lines.is_empty() {
                    self.push_line(Line::default());
                }
                let lang = match &kind {
                    CodeBlockKind::Fenced(l) => l.as_ref(),
                    CodeBlockKind::Indented => "",
                };

                let bs = Style::default().fg(Color::DarkGray);
                let top = if lang.is_empty() {
                    Line::from(Span::styled("╭──", bs))
                } else {
                    Line::from(vec![
                        Span::styled("╭── ", bs),
                        Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                        Span::styled(" ──", bs),
                    ])
                };
                self.push_line(top);
                self.prefixes.push(Span::styled("│ ", bs));

                if !lang.is_empty()
                    && let Some(syn) = SYNTAX_SET.find_syntax_by_token(lang)
                {
                    let theme = &THEME_SET.themes["base16-ocean.dark"];
                    self.code_hl = Some(HighlightLines::new(syn, theme));
                }
                if self.code_hl.is_none() {
                    self.plain_code = true;
                }
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.gap_if_pending();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let depth = self.list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                if let Some(idx) = self.list_stack.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}- "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
                }
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {} // Tables, images, definitions — skip
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.gap_pending = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.gap_pending = true;
            }
            TagEnd::BlockQuote(_) => {
                self.prefixes.pop();
                self.pop_style();
                self.gap_pending = true;
            }
            TagEnd::CodeBlock => {
                self.code_hl = None;
                self.plain_code = false;
                self.prefixes.pop(); // remove │ prefix before bottom border
                self.push_line(Line::from(Span::styled(
                    "╰──",
                    Style::default().fg(Color::DarkGray),
                )));
                self.gap_pending = true;
            }
            TagEnd::List(_) => {
                self.list_stack.pop();
                self.gap_pending = true;
            }
            TagEnd::Item => {}
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(dest) = self.link.take() {
                    self.close_link(&dest);
                }
            }
            _ => {}
        }
    }

    /// Suffix after the link text. Fragment destinations get the page's
    /// keyboard hint; everything else gets the plain URL.
    fn close_link(&mut self, dest: &str) {
        if let Some(path) = dest.strip_prefix('#') {
            if let Some(route) = Route::ALL.into_iter().find(|r| r.path() == path) {
                self.push_span(Span::styled(
                    format!(" [Ctrl+{}]", route.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            // Fragment links to unregistered paths print nothing extra
            return;
        }
        self.push_span(Span::raw(" ("));
        self.push_span(Span::styled(
            dest.to_owned(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ));
        self.push_span(Span::raw(")"));
    }

    fn write_text(&mut self, cow: CowStr<'_>) {
        // Expand tabs → 4 spaces (ratatui renders \t as zero-width)
        let raw = cow.to_string();
        let text = if raw.contains('\t') {
            raw.replace('\t', "    ")
        } else {
            raw
        };

        // Syntax-highlighted code block — take the highlighter out to avoid
        // a double mutable borrow (highlight_line borrows it, push_line self)
        if self.code_hl.is_some() {
            let mut hl = self.code_hl.take().unwrap();
            for line in LinesWithEndings::from(text.as_str()) {
                if let Ok(ranges) = hl.highlight_line(line, &SYNTAX_SET) {
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .filter_map(|(hl_style, frag)| {
                            let content = frag.trim_end_matches('\n').replace('\t', "    ");
                            if content.is_empty() {
                                return None;
                            }
                            let fg = Color::Rgb(
                                hl_style.foreground.r,
                                hl_style.foreground.g,
                                hl_style.foreground.b,
                            );
                            Some(Span::styled(content, Style::default().fg(fg)))
                        })
                        .collect();
                    if !spans.is_empty() {
                        self.push_line(Line::from(spans));
                    }
                }
            }
            self.code_hl = Some(hl);
            return;
        }

        if self.plain_code {
            let code_style = Style::default().fg(Color::White);
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

fn heading_style(base: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(base)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(base).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_heading_text_inherits_heading_style() {
        let text = render("## Hello", Color::Blue);
        let line = &text.lines[0];
        assert!(line.spans.len() >= 2, "expected >= 2 spans, got {line:?}");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[1].style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_page_link_gets_shortcut_hint_instead_of_url() {
        let text = render("Go to [Users](#/users) now", Color::Gray);
        let all: String = text.lines.iter().map(line_text).collect();
        assert!(all.contains("[Ctrl+3]"), "missing hint in {all:?}");
        assert!(!all.contains("#/users"), "raw fragment leaked into {all:?}");
    }

    #[test]
    fn test_unregistered_fragment_link_prints_no_suffix() {
        let text = render("[gone](#/no-such)", Color::Gray);
        let all: String = text.lines.iter().map(line_text).collect();
        assert_eq!(all.trim(), "gone");
    }

    #[test]
    fn test_external_link_keeps_url() {
        let text = render("[demo API](https://jsonplaceholder.typicode.com)", Color::Gray);
        let all: String = text.lines.iter().map(line_text).collect();
        assert!(all.contains("demo API"));
        assert!(all.contains("(https://jsonplaceholder.typicode.com)"));
    }

    #[test]
    fn test_bold_text_is_bold() {
        let text = render("Some **bold** text", Color::Blue);
        let line = &text.lines[0];
        let bold_span = line.spans.iter().find(|s| s.content == "bold").unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_inline_code_styled() {
        let text = render("Use `placard --route /users` here", Color::Blue);
        let line = &text.lines[0];
        let code = line
            .spans
            .iter()
            .find(|s| s.content.starts_with("placard"))
            .unwrap();
        assert_eq!(code.style.fg, Some(Color::White));
        assert_eq!(code.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn test_code_block_has_border_structure() {
        let text = render("```\nline1\nline2\n```", Color::Blue);
        let all: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(all[0].starts_with('╭'), "expected top border, got {:?}", all[0]);
        assert!(all[1].starts_with("│ "), "expected │ prefix, got {:?}", all[1]);
        assert!(all[1].contains("line1"));
        let last = all.last().unwrap();
        assert!(last.starts_with('╰'), "expected bottom border, got {last:?}");
    }

    #[test]
    fn test_list_markers() {
        let text = render("- first\n- second", Color::Gray);
        let all: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.contains("- first")));
        assert!(all.iter().any(|l| l.contains("- second")));
    }

    #[test]
    fn test_tabs_expanded_to_spaces() {
        let text = render("```\n\tindented\n```", Color::Blue);
        let has_tabs = text
            .lines
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content.contains('\t')));
        assert!(!has_tabs, "no raw tabs should remain");
    }
}

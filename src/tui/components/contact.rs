//! Contact page — four required fields, local validation before anything
//! is submitted, and a feedback line under the form.
//!
//! Field values live in [`ContactForm`] (core state); this panel owns only
//! focus and per-field cursors, so a navigation away and back rebuilds a
//! blank panel over whatever the reducer says the form contains.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{ContactField, ContactForm};
use crate::tui::components::text_field::TextFieldState;
use crate::tui::event::TuiEvent;

/// What the panel asks the event loop to do.
#[derive(Debug, PartialEq)]
pub enum ContactEvent {
    Submit,
}

pub struct ContactPanel {
    pub focus: ContactField,
    fields: [TextFieldState; 4],
}

fn slot(field: ContactField) -> usize {
    match field {
        ContactField::Name => 0,
        ContactField::Email => 1,
        ContactField::Subject => 2,
        ContactField::Message => 3,
    }
}

impl ContactPanel {
    pub fn new() -> Self {
        Self {
            focus: ContactField::Name,
            fields: Default::default(),
        }
    }

    /// Routes editing events to the focused field and focus moves across
    /// the form. `Enter` asks for a submit; the reducer decides whether the
    /// form is actually complete.
    pub fn handle_event(
        &mut self,
        form: &mut ContactForm,
        event: &TuiEvent,
    ) -> Option<ContactEvent> {
        let focus = self.focus;
        let state = &mut self.fields[slot(focus)];
        match event {
            TuiEvent::FocusNext | TuiEvent::ScrollDown => {
                self.focus = focus.next();
            }
            TuiEvent::FocusPrev | TuiEvent::ScrollUp => {
                self.focus = focus.prev();
            }
            TuiEvent::Submit => return Some(ContactEvent::Submit),
            TuiEvent::InputChar('\n') => {
                // Multi-line input is a message-field affordance only.
                if focus == ContactField::Message {
                    state.insert(form.value_mut(focus), '\n');
                }
            }
            TuiEvent::InputChar(ch) => state.insert(form.value_mut(focus), *ch),
            TuiEvent::Paste(text) => {
                if focus == ContactField::Message {
                    state.paste(form.value_mut(focus), text);
                } else {
                    let flat = text.replace('\n', " ");
                    state.paste(form.value_mut(focus), &flat);
                }
            }
            TuiEvent::Backspace => {
                state.backspace(form.value_mut(focus));
            }
            TuiEvent::Delete => {
                state.delete(form.value_mut(focus));
            }
            TuiEvent::CursorLeft => state.move_left(form.value(focus)),
            TuiEvent::CursorRight => state.move_right(form.value(focus)),
            TuiEvent::CursorHome => state.move_home(),
            TuiEvent::CursorEnd => state.move_end(form.value(focus)),
            _ => {}
        }
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, form: &ContactForm) {
        let [name_area, email_area, subject_area, message_area, feedback_area, hint_area, _] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);

        for (field, field_area) in [
            (ContactField::Name, name_area),
            (ContactField::Email, email_area),
            (ContactField::Subject, subject_area),
        ] {
            self.fields[slot(field)].render_single(
                frame,
                field_area,
                field.label(),
                form.value(field),
                self.focus == field,
            );
        }
        self.fields[slot(ContactField::Message)].render_multi(
            frame,
            message_area,
            ContactField::Message.label(),
            form.value(ContactField::Message),
            self.focus == ContactField::Message,
        );

        if let Some(feedback) = &form.feedback {
            let (symbol, color) = if feedback.ok {
                ("✓", Color::Green)
            } else {
                ("✕", Color::Red)
            };
            frame.render_widget(
                Paragraph::new(format!(" {symbol} {}", feedback.text))
                    .style(Style::default().fg(color)),
                feedback_area,
            );
        }

        frame.render_widget(
            Paragraph::new(" Enter send · Tab next field · Ctrl+J newline")
                .style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }
}

impl Default for ContactPanel {
    fn default() -> Self {
        Self::new()
    }
}

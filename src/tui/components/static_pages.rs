//! The three template-driven pages: home, about, and not-found.
//!
//! Each is a markdown template rendered to styled text once per frame.
//! Re-rendering a template is pure, which is what keeps revisiting a route
//! idempotent: same template in, same container content out.

use ratatui::style::Color;
use ratatui::text::Text;

use crate::tui::markdown;

const BODY_FG: Color = Color::Gray;

const HOME: &str = r#"# Placard

A small hash-routed multi-page app, driven by a public demo REST API.

## Highlights

### Fragment routing
Every page lives behind a URL-style fragment path. Navigation,
keyboard shortcuts and history all go through the same dispatch.

### Live REST data
The [Users](#/users) page fetches real records from the demo
service and lays them out as cards, with a retry if the network
lets you down.

### Form handling
The [Contact](#/contact) page validates required fields locally
before anything touches the wire, then posts your message as a
new article.

### Notifications
Transient toasts confirm successes and surface failures in the
corner of the screen, then get out of the way.

## Getting started

Jump between pages with `Ctrl+1` through `Ctrl+4`, or click the
links in the bar above. [About](#/about) describes how the pieces
fit together.
"#;

const ABOUT: &str = r#"# About

Placard demonstrates the classic single-page-app shape — a route
table, page views sharing one container, a REST client with a
loading indicator — rendered in a terminal instead of a browser.

## Built with

- A fragment router with back/forward history (`Alt+Left` / `Alt+Right`)
- A JSON client for the [demo API](https://jsonplaceholder.typicode.com)
- Markdown page templates, styled at render time

## Pages

1. [Home](#/) — the overview
2. [About](#/about) — what you are reading
3. [Users](#/users) — live data, refresh with `r`
4. [Contact](#/contact) — a validated form submission

## Layout

```text
src/
  api/    REST client, endpoint bindings, gateway seam
  core/   routes, router, state, reducer
  tui/    terminal adapter and page components
```
"#;

/// Home page template, rendered fresh.
pub fn home() -> Text<'static> {
    markdown::render(HOME, BODY_FG)
}

/// About page template, rendered fresh.
pub fn about() -> Text<'static> {
    markdown::render(ABOUT, BODY_FG)
}

/// The not-found view. A display state for unregistered paths, shown in the
/// container like any other page.
pub fn not_found(path: &str) -> Text<'static> {
    let template = format!(
        "# 404\n\nNothing is registered at `{path}`.\n\n> Check the address, \
         or head back [Home](#/).\n"
    );
    markdown::render(&template, BODY_FG)
}

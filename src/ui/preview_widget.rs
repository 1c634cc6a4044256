//! # Preview Widget
//!
//! Draws the shared [`PreviewSurface`] into the TUI. Each
//! [`PreviewRun`] becomes a styled span; line breaks typed by a `newline`
//! segment start a new line. A block cursor trails the text.

use crate::ui::preview::{PreviewRun, PreviewSurface};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use std::sync::{Arc, Mutex};

const CURSOR: &str = "▋";

/// Style a run the way the terminal would show the generated prompt.
pub fn run_style(run: &PreviewRun) -> Style {
    let mut style = Style::default();
    if let Some((r, g, b)) = run.color.rgb() {
        style = style.fg(Color::Rgb(r, g, b));
    }
    if run.styles.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.styles.dim {
        style = style.add_modifier(Modifier::DIM);
    }
    if run.styles.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if run.styles.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Split runs into display lines at every `\n`.
pub fn runs_to_lines(runs: &[PreviewRun]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for run in runs {
        let style = run_style(run);
        let mut parts = run.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

pub struct PreviewView<'a> {
    surface: &'a Arc<Mutex<PreviewSurface>>,
    cursor_style: Style,
    show_cursor: bool,
}

impl<'a> PreviewView<'a> {
    pub fn new(surface: &'a Arc<Mutex<PreviewSurface>>) -> Self {
        Self {
            surface,
            cursor_style: Style::default(),
            show_cursor: true,
        }
    }

    pub fn cursor(mut self, show: bool, style: Style) -> Self {
        self.show_cursor = show;
        self.cursor_style = style;
        self
    }
}

impl Widget for PreviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = match self.surface.lock() {
            Ok(surface) => runs_to_lines(surface.runs()),
            Err(_) => return,
        };

        if self.show_cursor {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(CURSOR, self.cursor_style));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

use crate::prompt::catalog;
use crate::prompt::segment::{SegmentColor, SegmentInstance, StyleAttr};
use crate::ui::app::{App, FocusPane, InputMode, PaletteRow};
use crate::ui::preview_widget::PreviewView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub palette: Rect,
    pub selection: Rect,
    pub preview: Rect,
    pub output: Rect,
    pub footer: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // Palette on the left, composition on the right
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[1]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Selection list
            Constraint::Length(6), // Preview
            Constraint::Length(5), // Generated string + copy
        ])
        .split(body_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        palette: body_chunks[0],
        selection: right_chunks[0],
        preview: right_chunks[1],
        output: right_chunks[2],
        footer: main_chunks[2],
    }
}

/// First visible row of a list of `height` rows so that `cursor` is shown.
pub fn list_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}

pub fn render(frame: &mut Frame, app: &App) {
    let layout = compute_layout(frame.area());

    render_header(frame, app, layout.header);
    render_palette(frame, app, layout.palette);
    render_selection(frame, app, layout.selection);
    render_preview(frame, app, layout.preview);
    render_output(frame, app, layout.output);
    render_footer(frame, app, layout.footer);

    if let InputMode::CustomColor { buffer, invalid } = &app.mode {
        render_custom_color_input(frame, app, buffer, *invalid);
    }
    if app.show_help {
        render_help(frame, app);
    }
}

fn border_style(app: &App, pane: FocusPane) -> Style {
    if app.focus == pane {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.fg_dim)
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header_text = vec![Line::from(vec![
        Span::styled(
            "  PS1 STUDIO  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("compose your bash prompt · theme: {}", theme.name),
            Style::default().fg(theme.fg_dim),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_palette(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let height = area.height.saturating_sub(2) as usize;
    let cursor_row = app.palette_cursor_row();
    let offset = list_offset(cursor_row, height);

    let items: Vec<ListItem> = app
        .palette_rows()
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(row, item)| match item {
            PaletteRow::Header(category) => ListItem::new(Line::from(Span::styled(
                format!("▼ {category}"),
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ))),
            PaletteRow::Entry(definition) => {
                let is_cursor = row == cursor_row && app.focus == FocusPane::Palette;
                let style = if is_cursor {
                    Style::default()
                        .fg(theme.bg)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg)
                };
                let example = if definition.example == "\n" {
                    "⏎"
                } else {
                    definition.example
                };
                let mut spans = vec![
                    Span::styled(format!("   {}", definition.label), style),
                    Span::styled(format!("  {example}"), Style::default().fg(theme.fg_dim)),
                ];
                // Command substitutions run every time the prompt is drawn.
                if definition.is_command {
                    spans.push(Span::styled(" $()", Style::default().fg(theme.secondary)));
                }
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🧩 Segments")
            .border_style(border_style(app, FocusPane::Palette)),
    );

    frame.render_widget(list, area);
}

/// How a segment's own label looks in the selection list.
fn instance_style(instance: &SegmentInstance, app: &App) -> Style {
    let mut style = Style::default().fg(app.theme.fg);
    if let Some((r, g, b)) = instance.color.rgb() {
        style = style.fg(Color::Rgb(r, g, b));
    }
    if instance.styles.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if instance.styles.dim {
        style = style.add_modifier(Modifier::DIM);
    }
    if instance.styles.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if instance.styles.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn color_name(color: &SegmentColor) -> String {
    match color {
        SegmentColor::Default => "default".to_string(),
        SegmentColor::Preset { code, .. } => catalog::color_presets()
            .iter()
            .find(|p| p.code == Some(*code))
            .map(|p| p.name.to_lowercase())
            .unwrap_or_else(|| code.to_string()),
        SegmentColor::Custom { hex } => hex.clone(),
    }
}

fn render_selection(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let height = area.height.saturating_sub(2) as usize;
    let highlighted = match &app.drag {
        Some(drag) => drag.dragging_index(),
        None => app.selected_index,
    };
    let offset = app.selection_offset(height);
    let focused = app.focus == FocusPane::Selection;

    let items: Vec<ListItem> = app
        .visual_order()
        .into_iter()
        .enumerate()
        .skip(offset)
        .map(|(i, instance)| {
            let mut spans = vec![
                Span::styled(
                    if app.drag.is_some() && i == highlighted {
                        "⇅ "
                    } else {
                        "≡ "
                    },
                    Style::default().fg(theme.fg_dim),
                ),
                Span::styled(format!("{:<16}", instance.label()), instance_style(instance, app)),
            ];

            for attr in StyleAttr::ALL {
                let active = instance.styles.get(attr);
                let style = if active {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg_dim)
                };
                spans.push(Span::styled(format!("[{}]", attr.letter()), style));
            }

            let swatch = match instance.color.rgb() {
                Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
                None => Style::default().fg(theme.fg_dim),
            };
            spans.push(Span::styled("  ●", swatch));
            spans.push(Span::styled(
                format!(" {}", color_name(&instance.color)),
                Style::default().fg(theme.fg_dim),
            ));

            let mut item = ListItem::new(Line::from(spans));
            if focused && i == highlighted {
                item = item.style(Style::default().bg(theme.selection_bg));
            }
            item
        })
        .collect();

    let title = format!("📋 Your prompt ({} segments)", app.selection.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(app, FocusPane::Selection)),
    );

    frame.render_widget(list, area);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("🖥️  Preview")
        .border_style(Style::default().fg(theme.fg_dim))
        .style(Style::default().bg(theme.bg).fg(theme.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = PreviewView::new(app.animator.surface())
        .cursor(true, Style::default().fg(theme.fg_dim));
    frame.render_widget(view, inner);
}

fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let button_style = if app.copy_active() {
        Style::default()
            .fg(theme.bg)
            .bg(theme.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };

    let text = vec![
        Line::from(Span::styled(
            app.export_line(),
            Style::default().fg(theme.secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", app.copy_label()), button_style)),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("💬 Generated PS1")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (&app.mode, app.focus) {
        (InputMode::CustomColor { .. }, _) => "[#rrggbb] Type color  [Enter] Apply  [Esc] Cancel",
        (InputMode::Normal, FocusPane::Palette) => {
            "[↑↓/jk] Navigate  [Enter/a] Add  [Tab] Switch  [y] Copy  [t] Theme  [?] Help  [q] Quit"
        }
        (InputMode::Normal, FocusPane::Selection) => {
            "[jk] Navigate  [JK] Move  [b/d/i/u] Style  [0-7] Color  [c] Custom  [x] Remove  [y] Copy  [q] Quit"
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

/// A rectangle of `width` x `height` centred in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_custom_color_input(frame: &mut Frame, app: &App, buffer: &str, invalid: bool) {
    let theme = &app.theme;
    let area = centered_rect(40, 5, frame.area());

    let mut lines = vec![Line::from(vec![
        Span::styled("Color: ", Style::default().fg(theme.fg_dim)),
        Span::styled(buffer.to_string(), Style::default().fg(theme.fg)),
        Span::styled("▋", Style::default().fg(theme.accent)),
    ])];
    if invalid {
        lines.push(Line::from(Span::styled(
            "Expected #rrggbb",
            Style::default().fg(theme.error),
        )));
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🎨 Custom color")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_help(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(56, 20, frame.area());
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), Style::default().fg(theme.accent)),
            Span::styled(what, Style::default().fg(theme.fg)),
        ])
    };

    let mut lines = vec![
        key("Tab", "switch between segments and your prompt"),
        key("j / k", "move the cursor"),
        key("Enter / a", "add the highlighted segment"),
        key("J / K", "move the selected entry down / up"),
        key("b d i u", "toggle bold, dim, italic, underline"),
        key("c", "custom #rrggbb color"),
        key("x / Del", "remove the selected entry"),
        key("y", "copy the PS1 line"),
        key("t", "next theme"),
        key("q", "quit"),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        "  Colors:",
        Style::default().fg(theme.secondary),
    )));
    for (i, preset) in catalog::color_presets().iter().enumerate() {
        let swatch = match preset.to_color().rgb() {
            Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
            None => Style::default().fg(theme.fg_dim),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {i:<12}"), Style::default().fg(theme.accent)),
            Span::styled("● ", swatch),
            Span::styled(preset.name, Style::default().fg(theme.fg)),
        ]));
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("❔ Keys")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

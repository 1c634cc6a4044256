use crate::prompt::catalog::{self, PaletteGroup};
use crate::prompt::display::preview_segments;
use crate::prompt::generator::{export_line, generate};
use crate::prompt::segment::{
    Category, SegmentColor, SegmentDefinition, SegmentInstance, StyleAttr,
};
use crate::prompt::Selection;
use crate::ui::clipboard::{self, CopyFeedback};
use crate::ui::config::Config;
use crate::ui::preview::PreviewAnimator;
use crate::ui::render::{compute_layout, list_offset};
use crate::ui::reorder::DragSession;
use crate::ui::theme::Theme;
use chrono::Local;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPane {
    Palette,
    Selection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing a `#rrggbb` value for the selected segment.
    CustomColor { buffer: String, invalid: bool },
}

/// A line of the palette tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteRow {
    Header(Category),
    Entry(&'static SegmentDefinition),
}

pub struct App {
    pub selection: Selection,
    pub animator: PreviewAnimator,
    pub focus: FocusPane,
    /// Cursor over palette entries (headers are skipped).
    pub palette_index: usize,
    /// Cursor over the selection list.
    pub selected_index: usize,
    pub mode: InputMode,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub copy_feedback: CopyFeedback,
    pub drag: Option<DragSession>,
    ps1: String,
    palette: Vec<PaletteGroup>,
}

impl App {
    pub fn new(selection: Selection, config: Config) -> Self {
        let theme = Theme::by_name(&config.theme)
            .unwrap_or_else(Theme::default_theme)
            .clone();
        let mut app = Self {
            selection,
            animator: PreviewAnimator::new(config.timing()),
            focus: FocusPane::Palette,
            palette_index: 0,
            selected_index: 0,
            mode: InputMode::Normal,
            show_help: false,
            should_quit: false,
            theme,
            copy_feedback: CopyFeedback::new(config.copy_feedback()),
            config,
            config_path: None,
            drag: None,
            ps1: String::new(),
            palette: catalog::palette_groups(),
        };
        app.refresh();
        app
    }

    /// Re-derive the generated string and kick the preview. Called after
    /// every mutation of the selection.
    pub fn refresh(&mut self) {
        self.ps1 = generate(self.selection.segments());
        let now = Local::now();
        self.animator.update(preview_segments(self.selection.segments(), &now));
        self.clamp_selected();
    }

    fn clamp_selected(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.selection.len().saturating_sub(1));
    }

    pub fn ps1(&self) -> &str {
        &self.ps1
    }

    /// The `PS1="..."` line shown in the readout.
    pub fn export_line(&self) -> String {
        export_line(&self.ps1)
    }

    // -- Palette --

    pub fn palette_rows(&self) -> Vec<PaletteRow> {
        let mut rows = Vec::new();
        for group in &self.palette {
            rows.push(PaletteRow::Header(group.category));
            rows.extend(group.entries.iter().map(|d| PaletteRow::Entry(*d)));
        }
        rows
    }

    pub fn palette_entries(&self) -> Vec<&'static SegmentDefinition> {
        self.palette
            .iter()
            .flat_map(|g| g.entries.iter().copied())
            .collect()
    }

    pub fn selected_palette_entry(&self) -> Option<&'static SegmentDefinition> {
        self.palette_entries().get(self.palette_index).copied()
    }

    /// Row of the palette cursor within [`App::palette_rows`].
    pub fn palette_cursor_row(&self) -> usize {
        let target = self.selected_palette_entry().map(|d| d.id);
        self.palette_rows()
            .iter()
            .position(|row| matches!(row, PaletteRow::Entry(d) if Some(d.id) == target))
            .unwrap_or(0)
    }

    pub fn add_selected_palette_entry(&mut self) {
        if let Some(definition) = self.selected_palette_entry() {
            self.add(definition.id);
        }
    }

    pub fn add(&mut self, definition_id: &str) {
        if self.selection.add(definition_id).is_some() {
            self.selected_index = self.selection.len() - 1;
            self.refresh();
        }
    }

    // -- Selection list --

    pub fn selected_instance(&self) -> Option<&SegmentInstance> {
        self.selection.segments().get(self.selected_index)
    }

    /// Entries in the order they are drawn: the drag's visual order while a
    /// drag is in progress.
    pub fn visual_order(&self) -> Vec<&SegmentInstance> {
        match &self.drag {
            Some(drag) => drag
                .visual_order()
                .iter()
                .filter_map(|id| self.selection.get(*id))
                .collect(),
            None => self.selection.segments().iter().collect(),
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_instance().map(|i| i.instance_id) {
            self.selection.remove(id);
            self.refresh();
        }
    }

    pub fn toggle_style_selected(&mut self, attr: StyleAttr) {
        if let Some(id) = self.selected_instance().map(|i| i.instance_id) {
            self.selection.toggle_style(id, attr);
            self.refresh();
        }
    }

    /// Apply swatch `index` (0 = Default) to the selected entry.
    pub fn set_preset_color_selected(&mut self, index: usize) {
        let Some(preset) = catalog::color_presets().get(index) else {
            return;
        };
        if let Some(id) = self.selected_instance().map(|i| i.instance_id) {
            self.selection.set_color(id, preset.to_color());
            self.refresh();
        }
    }

    /// Move the selected entry by `delta` rows through a drag session.
    pub fn move_selected(&mut self, delta: isize) {
        let Some(mut drag) = DragSession::begin(self.selection.ids(), self.selected_index) else {
            return;
        };
        let target = self.selected_index.saturating_add_signed(delta);
        drag.drag_to(target);
        let index = drag.dragging_index();
        if self.selection.reorder(&drag.finish()) {
            self.selected_index = index;
            self.refresh();
        }
    }

    /// Start dragging the entry at `index`. `scroll_offset` is the first
    /// visible row at press time and stays fixed for the whole drag.
    pub fn begin_drag(&mut self, index: usize, scroll_offset: usize) {
        if let Some(drag) = DragSession::begin(self.selection.ids(), index) {
            self.selected_index = index;
            self.drag = Some(drag.with_scroll_offset(scroll_offset));
        }
    }

    /// First visible row of the selection list for a panel of `height` rows.
    pub fn selection_offset(&self, height: usize) -> usize {
        match &self.drag {
            Some(drag) => drag.scroll_offset(),
            None => list_offset(self.selected_index, height),
        }
    }

    pub fn drag_over(&mut self, index: usize) {
        if let Some(drag) = self.drag.as_mut() {
            drag.drag_to(index);
        }
    }

    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            let index = drag.dragging_index();
            if let Some(id) = drag.dragged_id() {
                log::debug!("drop {id} at row {index}");
            }
            if self.selection.reorder(&drag.finish()) {
                self.selected_index = index;
                self.refresh();
            }
        }
    }

    // -- Custom color input --

    pub fn begin_custom_color(&mut self) {
        let Some(current) = self.selected_instance() else {
            return;
        };
        let buffer = match &current.color {
            SegmentColor::Custom { hex } => hex.clone(),
            _ => "#".to_string(),
        };
        self.mode = InputMode::CustomColor {
            buffer,
            invalid: false,
        };
    }

    pub fn apply_custom_color(&mut self) {
        let InputMode::CustomColor { buffer, .. } = &self.mode else {
            return;
        };
        match SegmentColor::custom(buffer) {
            Some(color) => {
                if let Some(id) = self.selected_instance().map(|i| i.instance_id) {
                    self.selection.set_color(id, color);
                }
                self.mode = InputMode::Normal;
                self.refresh();
            }
            None => {
                log::debug!("custom color rejected: {buffer:?}");
                if let InputMode::CustomColor { invalid, .. } = &mut self.mode {
                    *invalid = true;
                }
            }
        }
    }

    fn handle_custom_color_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mode = InputMode::Normal;
            }
            KeyCode::Enter => self.apply_custom_color(),
            code => {
                let InputMode::CustomColor { buffer, invalid } = &mut self.mode else {
                    return;
                };
                match code {
                    KeyCode::Backspace => {
                        buffer.pop();
                        *invalid = false;
                    }
                    KeyCode::Char(c) if buffer.chars().count() < 7 => {
                        buffer.push(c);
                        *invalid = false;
                    }
                    _ => {}
                }
            }
        }
    }

    // -- Navigation --

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Palette => FocusPane::Selection,
            FocusPane::Selection => FocusPane::Palette,
        };
    }

    pub fn next(&mut self) {
        let count = match self.focus {
            FocusPane::Palette => self.palette_entries().len(),
            FocusPane::Selection => self.selection.len(),
        };
        if count == 0 {
            return;
        }
        let index = self.cursor_mut();
        *index = (*index + 1) % count;
    }

    pub fn previous(&mut self) {
        let count = match self.focus {
            FocusPane::Palette => self.palette_entries().len(),
            FocusPane::Selection => self.selection.len(),
        };
        if count == 0 {
            return;
        }
        let index = self.cursor_mut();
        *index = if *index > 0 { *index - 1 } else { count - 1 };
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            FocusPane::Palette => &mut self.palette_index,
            FocusPane::Selection => &mut self.selected_index,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // -- Theme / clipboard --

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        self.config.theme = self.theme.name.to_string();
        let saved = match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => self.config.save(),
        };
        if let Err(e) = saved {
            log::warn!("Failed to save theme: {e:#}");
        }
    }

    /// Copy the `PS1="..."` line to the clipboard through `out`.
    pub fn copy(&mut self, out: &mut dyn Write) {
        match clipboard::copy_to(out, &self.export_line()) {
            Ok(()) => self.copy_feedback.trigger(Instant::now()),
            Err(e) => log::warn!("Clipboard copy failed: {e:#}"),
        }
    }

    pub fn copy_label(&self) -> &'static str {
        self.copy_feedback.label(Instant::now())
    }

    pub fn copy_active(&self) -> bool {
        self.copy_feedback.is_active(Instant::now())
    }

    // -- Input handling --

    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Write) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.toggle_help();
            }
            return;
        }

        if self.mode != InputMode::Normal {
            self.handle_custom_color_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('y') => self.copy(clipboard),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Down | KeyCode::Char('j') if !key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.next();
            }
            KeyCode::Up | KeyCode::Char('k') if !key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.previous();
            }
            _ => match self.focus {
                FocusPane::Palette => self.handle_palette_key(key),
                FocusPane::Selection => self.handle_selection_key(key),
            },
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char(' ')
        ) {
            self.add_selected_palette_entry();
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('J') | KeyCode::Down => self.move_selected(1),
            KeyCode::Char('K') | KeyCode::Up => self.move_selected(-1),
            KeyCode::Char('b') => self.toggle_style_selected(StyleAttr::Bold),
            KeyCode::Char('d') => self.toggle_style_selected(StyleAttr::Dim),
            KeyCode::Char('i') => self.toggle_style_selected(StyleAttr::Italic),
            KeyCode::Char('u') => self.toggle_style_selected(StyleAttr::Underline),
            KeyCode::Char('c') => self.begin_custom_color(),
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => self.remove_selected(),
            KeyCode::Char(c @ '0'..='7') => {
                let index = c as usize - '0' as usize;
                self.set_preset_color_selected(index);
            }
            _ => {}
        }
    }

    /// Mouse handling against the layout of a frame of size `area`.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect, clipboard: &mut dyn Write) {
        if self.show_help || self.mode != InputMode::Normal {
            return;
        }
        let layout = compute_layout(area);
        let pos = Position::new(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = inner_row(layout.palette, pos) {
                    self.focus = FocusPane::Palette;
                    self.click_palette_row(row, inner_height(layout.palette));
                } else if let Some(row) = inner_row(layout.selection, pos) {
                    self.focus = FocusPane::Selection;
                    let offset = self.selection_offset(inner_height(layout.selection));
                    let index = row + offset;
                    if index < self.selection.len() {
                        self.begin_drag(index, offset);
                    }
                } else if layout.output.contains(pos) {
                    self.copy(clipboard);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.drag.is_some() {
                    if let Some(row) = inner_row(layout.selection, pos) {
                        let offset = self.selection_offset(inner_height(layout.selection));
                        self.drag_over(row + offset);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.end_drag(),
            MouseEventKind::ScrollDown => self.next(),
            MouseEventKind::ScrollUp => self.previous(),
            _ => {}
        }
    }

    fn click_palette_row(&mut self, row: usize, height: usize) {
        let offset = list_offset(self.palette_cursor_row(), height);
        let rows = self.palette_rows();
        let Some(PaletteRow::Entry(definition)) = rows.get(row + offset) else {
            return;
        };
        if let Some(index) = self
            .palette_entries()
            .iter()
            .position(|d| d.id == definition.id)
        {
            self.palette_index = index;
            self.add(definition.id);
        }
    }
}

/// Row within a bordered block, or `None` if `pos` is outside its interior.
fn inner_row(block: Rect, pos: Position) -> Option<usize> {
    let inner = Rect {
        x: block.x.saturating_add(1),
        y: block.y.saturating_add(1),
        width: block.width.saturating_sub(2),
        height: block.height.saturating_sub(2),
    };
    inner
        .contains(pos)
        .then(|| (pos.y - inner.y) as usize)
}

fn inner_height(block: Rect) -> usize {
    block.height.saturating_sub(2) as usize
}

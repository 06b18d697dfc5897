// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive board shell (ratatui + crossterm) over an [`Editor`]. The
//! board image itself cannot be shown in a terminal; the shell paints the
//! board plane, markers, links and labels on a fixed 800x500 logical pixel
//! surface and maps every mouse event back into that surface, so the editor
//! sees the same geometry a graphical host would feed it.

use std::{
    error::Error,
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::editor::{Editor, EditorSnapshot, ExitDecision, UiRequest};
use crate::geom::{to_pixel, BoardRect, PercentPoint, PixelPoint};
use crate::input::{InputEvent, Key, Modifiers, PointerButton};
use crate::model::{BoardGraph, EditorMode, NameGenerator, Viewport};
use crate::store::{write_steps_file, WriteDurability, DEFAULT_EXPORT_FILENAME};

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅾 🆁 🅴 🅰 🅳 ";

const MARKER_COLOR: Color = Color::Red;
const SELECTED_COLOR: Color = Color::LightGreen;
const LINK_SOURCE_COLOR: Color = Color::Yellow;
const LINK_COLOR: Color = Color::Yellow;
const LABEL_COLOR: Color = Color::White;
const SURFACE_COLOR: Color = Color::DarkGray;
const PREVIEW_COLOR: Color = Color::DarkGray;
const HANDLE_COLOR: Color = Color::LightBlue;

/// Logical board surface, in the pixel space the editor works in. The
/// rendered widget is stretched over this plane regardless of cell count.
const BOARD_WIDTH_PX: f64 = 800.0;
const BOARD_HEIGHT_PX: f64 = 500.0;

/// Runs the interactive terminal UI on the built-in demo board.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_editor(
        demo_board(),
        PathBuf::from(DEFAULT_EXPORT_FILENAME),
        WriteDurability::default(),
    )
}

/// Runs the interactive terminal UI over a prepared editor. Exports go to
/// `export_path` with the given durability.
pub fn run_with_editor(
    editor: Editor,
    export_path: PathBuf,
    durability: WriteDurability,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(editor, export_path, durability);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::FocusLost => app.handle_focus_lost(),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let (board_area, steps_area) = if app.steps_visible {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(main_area);
        (panes[0], Some(panes[1]))
    } else {
        (main_area, None)
    };

    let snapshot = app.editor.snapshot();

    let board_block = Block::default()
        .borders(Borders::ALL)
        .title(board_title(&snapshot))
        .border_style(panel_border_style(app.focus, Focus::Board));
    let board_inner = board_block.inner(board_area);
    frame.render_widget(board_block, board_area);
    app.board_area = Some(board_inner);
    if board_inner.width > 0 && board_inner.height > 0 {
        frame.render_widget(Paragraph::new(render_board(&snapshot, board_inner)), board_inner);
    }

    if let Some(steps_area) = steps_area {
        let items = snapshot
            .steps
            .iter()
            .map(|step| {
                let is_selected = snapshot.selected_step == Some(step.name());
                let marker = if is_selected { "◼" } else { "◻" };
                let marker_style = if is_selected {
                    Style::default().fg(SELECTED_COLOR)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let targets = step
                    .linked_to()
                    .iter()
                    .map(|name| name.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                let detail = if targets.is_empty() {
                    format!("  {:.0}/{:.0} {:.0}px", step.x(), step.y(), step.size())
                } else {
                    format!("  {:.0}/{:.0} {:.0}px → {targets}", step.x(), step.y(), step.size())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker.to_owned(), marker_style),
                    Span::raw(" "),
                    Span::styled(step.name().to_string(), Style::default().fg(LABEL_COLOR)),
                    Span::styled(detail, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect::<Vec<_>>();
        let cursor = snapshot
            .selected_step
            .and_then(|name| snapshot.steps.iter().position(|step| step.name() == name));
        app.steps_state.select(cursor);

        let title = format!("─[2]─ Steps [{}] ", snapshot.steps.len());
        let steps_list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(panel_border_style(app.focus, Focus::Steps)),
            )
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)));
        frame.render_stateful_widget(steps_list, steps_area, &mut app.steps_state);
    }

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    let compact = status_area.width < 90;
    let status = Paragraph::new(footer_line(&snapshot, &toast_suffix, compact));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    match &app.overlay {
        Overlay::None => {}
        Overlay::Help => render_help(frame, main_area),
        Overlay::JsonPreview { payload, scroll } => {
            render_json_preview(frame, main_area, payload, *scroll)
        }
        Overlay::ConfirmQuit => render_confirm(
            frame,
            main_area,
            "─ Unsaved changes ",
            "The board has unexported changes.\n\nQuit and discard them?",
        ),
        Overlay::ConfirmClear => render_confirm(
            frame,
            main_area,
            "─ Clear board ",
            "Delete every step on the board?\n\nThis cannot be undone.",
        ),
    }
}

fn board_title(snapshot: &EditorSnapshot<'_>) -> String {
    let dirty = if snapshot.has_unsaved_changes { "*" } else { "" };
    format!(
        "─[1]─ Board {}{dirty} — {} — zoom {:.1} ",
        snapshot.image_ref,
        snapshot.mode.label(),
        snapshot.viewport.zoom()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Board,
    Steps,
}

fn panel_border_style(active: Focus, panel: Focus) -> Style {
    if active == panel {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Overlay {
    None,
    Help,
    JsonPreview { payload: String, scroll: u16 },
    ConfirmQuit,
    ConfirmClear,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    editor: Editor,
    export_path: PathBuf,
    durability: WriteDurability,
    should_quit: bool,
    focus: Focus,
    steps_visible: bool,
    steps_state: ListState,
    overlay: Overlay,
    toast: Option<Toast>,
    /// Inner board widget area from the last draw; mouse events are mapped
    /// through it.
    board_area: Option<Rect>,
}

impl App {
    fn new(editor: Editor, export_path: PathBuf, durability: WriteDurability) -> Self {
        Self {
            editor,
            export_path,
            durability,
            should_quit: false,
            focus: Focus::Board,
            steps_visible: false,
            steps_state: ListState::default(),
            overlay: Overlay::None,
            toast: None,
            board_area: None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_overlay_key(&key) {
            return;
        }
        if self.focus == Focus::Steps && self.handle_steps_key(&key) {
            return;
        }
        if self.handle_chrome_key(&key) {
            return;
        }
        self.forward_key_to_editor(&key);
    }

    /// An open overlay owns the keyboard until it is dismissed.
    fn handle_overlay_key(&mut self, key: &KeyEvent) -> bool {
        match &self.overlay {
            Overlay::None => false,
            Overlay::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.overlay = Overlay::None;
                }
                true
            }
            Overlay::JsonPreview { .. } => {
                self.handle_json_preview_key(key.code);
                true
            }
            Overlay::ConfirmQuit => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => self.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Esc => self.overlay = Overlay::None,
                    _ => {}
                }
                true
            }
            Overlay::ConfirmClear => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        let count = self.editor.board().len();
                        self.editor.clear_all();
                        self.set_toast(format!("Cleared {count} {}", step_noun(count)));
                        self.overlay = Overlay::None;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => self.overlay = Overlay::None,
                    _ => {}
                }
                true
            }
        }
    }

    fn handle_json_preview_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('q') => {
                self.overlay = Overlay::None;
            }
            KeyCode::Char('y') => {
                let Overlay::JsonPreview { payload, .. } = &self.overlay else {
                    return;
                };
                let text = payload.clone();
                match copy_to_clipboard(&text) {
                    Ok(backend) => self.set_toast(format!("Yanked export JSON ({backend})")),
                    Err(err) => self.set_toast(format!("Clipboard error: {err}")),
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Overlay::JsonPreview { scroll, .. } = &mut self.overlay {
                    *scroll = scroll.saturating_add(1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Overlay::JsonPreview { scroll, .. } = &mut self.overlay {
                    *scroll = scroll.saturating_sub(1);
                }
            }
            _ => {}
        }
    }

    /// Keys that act on the steps panel while it has focus. Unhandled keys
    /// fall through to the chrome and the editor.
    fn handle_steps_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_steps_cursor(1);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_steps_cursor(-1);
                true
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                self.delete_steps_cursor();
                true
            }
            _ => false,
        }
    }

    fn handle_chrome_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.request_quit();
                true
            }
            KeyCode::Char('e') => {
                self.export();
                true
            }
            KeyCode::Char('p') => {
                self.overlay = Overlay::JsonPreview {
                    payload: self.editor.export_payload(),
                    scroll: 0,
                };
                true
            }
            KeyCode::Char('x') => {
                self.request_clear();
                true
            }
            KeyCode::Char('1') => {
                self.focus = Focus::Board;
                true
            }
            KeyCode::Char('2') => {
                self.toggle_steps_panel();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                true
            }
            _ => false,
        }
    }

    fn forward_key_to_editor(&mut self, key: &KeyEvent) {
        let Some((translated, modifiers)) = translate_key(key) else {
            return;
        };
        self.dispatch_to_editor(InputEvent::KeyPress { key: translated, modifiers });
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.overlay != Overlay::None {
            return;
        }
        let Some(area) = self.board_area else {
            return;
        };
        let modifiers = translate_mouse_modifiers(mouse.modifiers);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                if !cell_in_rect(area, mouse.column, mouse.row) {
                    return;
                }
                self.focus = Focus::Board;
                let button = translate_mouse_button(button);
                let position = pointer_position(area, mouse.column, mouse.row);
                self.dispatch_to_editor(InputEvent::PointerDown { position, button, modifiers });
            }
            // Motion is forwarded even outside the board so in-flight
            // gestures keep tracking the pointer.
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                let position = pointer_position(area, mouse.column, mouse.row);
                self.dispatch_to_editor(InputEvent::PointerMove { position, modifiers });
            }
            MouseEventKind::Up(_) => self.dispatch_to_editor(InputEvent::PointerUp),
            MouseEventKind::ScrollDown => {
                self.dispatch_to_editor(InputEvent::Wheel { delta_y: 1.0, modifiers });
            }
            MouseEventKind::ScrollUp => {
                self.dispatch_to_editor(InputEvent::Wheel { delta_y: -1.0, modifiers });
            }
            _ => {}
        }
    }

    fn handle_focus_lost(&mut self) {
        self.dispatch_to_editor(InputEvent::PointerLeave);
    }

    fn dispatch_to_editor(&mut self, event: InputEvent) {
        let rect = board_rect(self.editor.viewport());
        let outcome = self.editor.handle_event(event, rect);
        if outcome.request == Some(UiRequest::ShowShortcuts) {
            self.overlay = Overlay::Help;
        }
    }

    fn request_quit(&mut self) {
        match self.editor.request_exit() {
            ExitDecision::Proceed => self.should_quit = true,
            ExitDecision::ConfirmDiscard => self.overlay = Overlay::ConfirmQuit,
        }
    }

    fn request_clear(&mut self) {
        if self.editor.board().is_empty() {
            self.set_toast("Board is empty");
        } else {
            self.overlay = Overlay::ConfirmClear;
        }
    }

    fn export(&mut self) {
        let payload = self.editor.export_payload();
        let count = self.editor.board().len();
        match write_steps_file(&self.export_path, &payload, self.durability) {
            Ok(()) => {
                self.editor.mark_exported(payload);
                self.set_toast(format!(
                    "Exported {count} {} to {}",
                    step_noun(count),
                    self.export_path.display()
                ));
            }
            Err(err) => self.set_toast(format!("Export failed: {err}")),
        }
    }

    fn toggle_steps_panel(&mut self) {
        self.steps_visible = !self.steps_visible;
        if self.steps_visible {
            self.focus = Focus::Steps;
            self.set_toast("Steps shown");
        } else {
            self.focus = Focus::Board;
            self.set_toast("Steps hidden");
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board if self.steps_visible => Focus::Steps,
            _ => Focus::Board,
        };
    }

    fn move_steps_cursor(&mut self, delta: i32) {
        let steps = self.editor.board().steps();
        if steps.is_empty() {
            return;
        }
        let current = self
            .editor
            .session()
            .selected_step()
            .and_then(|name| steps.iter().position(|step| step.name() == name));
        let last = steps.len() - 1;
        let next = match current {
            Some(index) => (index as i32 + delta).clamp(0, last as i32) as usize,
            None if delta >= 0 => 0,
            None => last,
        };
        let name = steps[next].name().clone();
        self.editor.select_step(Some(name));
    }

    fn delete_steps_cursor(&mut self) {
        let Some(name) = self.editor.session().selected_step().cloned() else {
            self.set_toast("No step selected");
            return;
        };
        if self.editor.delete_step(&name) {
            self.set_toast(format!("Deleted {name}"));
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }
}

fn step_noun(count: usize) -> &'static str {
    if count == 1 {
        "step"
    } else {
        "steps"
    }
}

/// The rendered board rect in surface pixels: pan shifts in board pixels,
/// zoom scales the result.
fn board_rect(viewport: Viewport) -> BoardRect {
    let zoom = viewport.zoom();
    BoardRect::new(
        viewport.pan_x() * zoom,
        viewport.pan_y() * zoom,
        BOARD_WIDTH_PX * zoom,
        BOARD_HEIGHT_PX * zoom,
    )
}

/// Maps a terminal cell to the center of its patch of the board surface.
/// Positions left or above the widget come out negative on purpose; gesture
/// motion is not clipped to the widget.
fn pointer_position(area: Rect, column: u16, row: u16) -> PixelPoint {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1));
    let dx = i32::from(column) - i32::from(area.x);
    let dy = i32::from(row) - i32::from(area.y);
    PixelPoint::new(
        (f64::from(dx) + 0.5) * (BOARD_WIDTH_PX / width),
        (f64::from(dy) + 0.5) * (BOARD_HEIGHT_PX / height),
    )
}

fn cell_in_rect(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn translate_key(key: &KeyEvent) -> Option<(Key, Modifiers)> {
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    };
    let translated = match key.code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Delete => Key::Delete,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => return None,
    };
    Some((translated, modifiers))
}

fn translate_mouse_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        shift: modifiers.contains(KeyModifiers::SHIFT),
    }
}

fn translate_mouse_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Secondary,
    }
}

/// Character-cell painter for the board surface.
struct BoardCanvas {
    width: usize,
    height: usize,
    cell_w: f64,
    cell_h: f64,
    cells: Vec<(char, Color)>,
}

impl BoardCanvas {
    fn new(area: Rect) -> Self {
        let width = usize::from(area.width);
        let height = usize::from(area.height);
        Self {
            width,
            height,
            cell_w: BOARD_WIDTH_PX / f64::from(area.width.max(1)),
            cell_h: BOARD_HEIGHT_PX / f64::from(area.height.max(1)),
            cells: vec![(' ', Color::Reset); width * height],
        }
    }

    fn set(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row * self.width + col] = (ch, color);
    }

    fn cell_center(&self, col: usize, row: usize) -> PixelPoint {
        PixelPoint::new((col as f64 + 0.5) * self.cell_w, (row as f64 + 0.5) * self.cell_h)
    }

    fn cell_of(&self, point: PixelPoint) -> (i32, i32) {
        ((point.x() / self.cell_w).floor() as i32, (point.y() / self.cell_h).floor() as i32)
    }

    /// Dots every cell whose center lies on the (pan/zoom-transformed)
    /// board, so the board's position stays visible while panning.
    fn paint_surface(&mut self, rect: BoardRect) {
        for row in 0..self.height {
            for col in 0..self.width {
                if rect.contains(self.cell_center(col, row)) {
                    self.cells[row * self.width + col] = ('·', SURFACE_COLOR);
                }
            }
        }
    }

    fn paint_line(&mut self, from: PixelPoint, to: PixelPoint, ch: char, color: Color) {
        let (from_col, from_row) = self.cell_of(from);
        let (to_col, to_row) = self.cell_of(to);
        let steps = (to_col - from_col).abs().max((to_row - from_row).abs());
        if steps == 0 {
            self.set(from_col, from_row, ch, color);
            return;
        }
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let x = from.x() + (to.x() - from.x()) * t;
            let y = from.y() + (to.y() - from.y()) * t;
            let (col, row) = self.cell_of(PixelPoint::new(x, y));
            self.set(col, row, ch, color);
        }
    }

    /// Arrowhead one cell short of the target marker's rim, pointed along
    /// the dominant axis. Links too short to clear the rim go headless.
    fn paint_arrow_head(&mut self, from: PixelPoint, to: PixelPoint, to_radius: f64) {
        let length = from.distance_to(to);
        let pull_back = to_radius + self.cell_w.max(self.cell_h);
        if length <= pull_back {
            return;
        }
        let t = (length - pull_back) / length;
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();
        let tip = PixelPoint::new(from.x() + dx * t, from.y() + dy * t);
        let head = if dx.abs() >= dy.abs() {
            if dx >= 0.0 {
                '▶'
            } else {
                '◀'
            }
        } else if dy >= 0.0 {
            '▼'
        } else {
            '▲'
        };
        let (col, row) = self.cell_of(tip);
        self.set(col, row, head, LINK_COLOR);
    }

    fn paint_disc(&mut self, center: PixelPoint, radius: f64, ch: char, color: Color) {
        let min_col = ((center.x() - radius) / self.cell_w).floor() as i32;
        let max_col = ((center.x() + radius) / self.cell_w).ceil() as i32;
        let min_row = ((center.y() - radius) / self.cell_h).floor() as i32;
        let max_row = ((center.y() + radius) / self.cell_h).ceil() as i32;
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height
                {
                    continue;
                }
                let cell = self.cell_center(col as usize, row as usize);
                if cell.distance_to(center) <= radius {
                    self.set(col, row, ch, color);
                }
            }
        }
        // A marker smaller than one cell still gets its center cell.
        let (col, row) = self.cell_of(center);
        self.set(col, row, ch, color);
    }

    fn paint_label(&mut self, center: PixelPoint, text: &str, color: Color) {
        let (col, row) = self.cell_of(center);
        let start = col - text.chars().count() as i32 / 2;
        for (offset, ch) in text.chars().enumerate() {
            self.set(start + offset as i32, row, ch, color);
        }
    }

    fn into_text(self) -> Text<'static> {
        let mut lines = Vec::with_capacity(self.height);
        for row in 0..self.height {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_color = Color::Reset;
            for col in 0..self.width {
                let (ch, color) = self.cells[row * self.width + col];
                if color != run_color && !run.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut run),
                        Style::default().fg(run_color),
                    ));
                }
                run_color = color;
                run.push(ch);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, Style::default().fg(run_color)));
            }
            lines.push(Line::from(spans));
        }
        Text::from(lines)
    }
}

fn render_board(snapshot: &EditorSnapshot<'_>, area: Rect) -> Text<'static> {
    if area.width == 0 || area.height == 0 {
        return Text::default();
    }
    let rect = board_rect(snapshot.viewport);
    let zoom = snapshot.viewport.zoom();
    let mut canvas = BoardCanvas::new(area);

    canvas.paint_surface(rect);

    for (from, to) in snapshot.links() {
        let Some(from_step) = snapshot.steps.iter().find(|step| step.name() == from) else {
            continue;
        };
        let Some(to_step) = snapshot.steps.iter().find(|step| step.name() == to) else {
            continue;
        };
        let from_px = to_pixel(rect, PercentPoint::new(from_step.x(), from_step.y()));
        let to_px = to_pixel(rect, PercentPoint::new(to_step.x(), to_step.y()));
        canvas.paint_line(from_px, to_px, '•', LINK_COLOR);
        canvas.paint_arrow_head(from_px, to_px, to_step.size() / 2.0 * zoom);
    }

    // Selected marker last so it paints on top of overlaps.
    let (plain, selected): (Vec<_>, Vec<_>) = snapshot
        .steps
        .iter()
        .partition(|step| snapshot.selected_step != Some(step.name()));
    for step in plain.iter().chain(selected.iter()) {
        let center = to_pixel(rect, PercentPoint::new(step.x(), step.y()));
        let color = if snapshot.selected_step == Some(step.name()) {
            SELECTED_COLOR
        } else if snapshot.linking_from == Some(step.name()) {
            LINK_SOURCE_COLOR
        } else {
            MARKER_COLOR
        };
        canvas.paint_disc(center, step.size() / 2.0 * zoom, '●', color);
    }

    if snapshot.mode == EditorMode::Drag {
        if let Some(selected) = selected.first() {
            let center = to_pixel(rect, PercentPoint::new(selected.x(), selected.y()));
            let radius = selected.size() / 2.0 * zoom;
            let (col, row) = canvas.cell_of(center.offset(radius, radius));
            canvas.set(col, row, '◆', HANDLE_COLOR);
        }
    }

    if let Some(preview) = snapshot.preview_position {
        let center = to_pixel(rect, preview);
        canvas.paint_disc(center, snapshot.preview_size / 2.0 * zoom, '◌', PREVIEW_COLOR);
        let caption = format!("{:.0}", snapshot.preview_size);
        canvas.paint_label(center.offset(0.0, canvas.cell_h), &caption, PREVIEW_COLOR);
    }

    if snapshot.show_labels {
        for step in snapshot.steps {
            let center = to_pixel(rect, PercentPoint::new(step.x(), step.y()));
            let above = center.offset(0.0, -canvas.cell_h);
            canvas.paint_label(above, step.name().as_str(), LABEL_COLOR);
        }
    }

    canvas.into_text()
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, keys: &str) {
    spans.push(Span::styled(
        format!("{label} "),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        format!("{keys}  "),
        Style::default().fg(FOOTER_KEY_COLOR),
    ));
}

fn footer_line(snapshot: &EditorSnapshot<'_>, toast_suffix: &str, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    push_footer_entry(&mut spans, "MODE", snapshot.mode.label());
    if compact {
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    } else {
        push_footer_entry(&mut spans, "TOOLS", "d/l/v");
        if snapshot.mode == EditorMode::Draw {
            push_footer_entry(&mut spans, "SIZE", "+/-");
        }
        push_footer_entry(&mut spans, "ZOOM", "alt+=/-");
        push_footer_entry(&mut spans, "EXPORT", "e");
        push_footer_entry(&mut spans, "JSON", "p");
        push_footer_entry(&mut spans, "CLEAR", "x");
        push_footer_entry(&mut spans, "STEPS", "2");
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    }
    if let Some(from) = snapshot.linking_from {
        spans.push(Span::styled(
            format!("linking {from} → pick target  "),
            Style::default().fg(LINK_SOURCE_COLOR),
        ));
    }
    if snapshot.has_unsaved_changes {
        spans.push(Span::styled("unsaved*", Style::default().fg(Color::LightRed)));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::raw(toast_suffix.to_owned()));
    }
    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{key:>width$}", width = key_width),
            Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn render_help(frame: &mut Frame<'_>, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let header_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let key_width = "alt+drag / shift+drag".len();

    let mut lines = Vec::<Line<'static>>::new();
    lines.push(Line::from(Span::styled("--- Tools ---", header_style)));
    lines.push(help_kv("d", "Draw: click places a step, click a step deletes it", key_width));
    lines.push(help_kv("l", "Link: click source, then target", key_width));
    lines.push(help_kv("v", "Drag: move steps, corner handle resizes", key_width));
    lines.push(help_kv("Esc", "Neutral mode, clear selection", key_width));
    lines.push(help_kv("Delete", "Delete the selected step", key_width));
    lines.push(help_kv("ctrl+c / ctrl+v", "Copy / paste the selected step", key_width));
    lines.push(help_kv("+/- or wheel", "Pending marker size (draw mode)", key_width));
    lines.push(help_kv("h", "Toggle step labels", key_width));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("--- View ---", header_style)));
    lines.push(help_kv("alt+wheel", "Zoom in / out", key_width));
    lines.push(help_kv("alt+= / alt+-", "Zoom in / out", key_width));
    lines.push(help_kv("0", "Reset zoom and pan", key_width));
    lines.push(help_kv("alt+drag / shift+drag", "Pan (middle button too)", key_width));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("--- Board ---", header_style)));
    lines.push(help_kv("e", "Export steps to the steps file", key_width));
    lines.push(help_kv("p", "Preview export JSON (y yanks)", key_width));
    lines.push(help_kv("x", "Clear the board", key_width));
    lines.push(help_kv("q", "Quit (asks when unsaved)", key_width));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("--- Panels ---", header_style)));
    lines.push(help_kv("1 / 2", "Focus board / toggle steps panel", key_width));
    lines.push(help_kv("Tab", "Cycle focus", key_width));
    lines.push(help_kv("j/k, x", "Steps panel: move cursor, delete", key_width));

    let help = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("─ Keyboard shortcuts — Esc closes ")
            .border_style(Style::default().fg(FOCUS_COLOR)),
    );
    frame.render_widget(help, area);
}

fn render_json_preview(frame: &mut Frame<'_>, main_area: Rect, payload: &str, scroll: u16) {
    let area = centered_rect(80, 85, main_area);
    frame.render_widget(Clear, area);
    let preview = Paragraph::new(payload.to_owned()).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("─ Export preview — y yank, j/k scroll, Esc closes ")
            .border_style(Style::default().fg(FOCUS_COLOR)),
    );
    frame.render_widget(preview, area);
}

fn render_confirm(frame: &mut Frame<'_>, main_area: Rect, title: &str, body: &str) {
    let area = centered_rect(46, 28, main_area);
    frame.render_widget(Clear, area);
    let text = format!("{body}\n\n[y] yes    [n] no");
    let confirm = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(Color::LightRed)),
    );
    frame.render_widget(confirm, area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange).map_err(
            |err| {
                teardown_terminal();
                err
            },
        )?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, DisableFocusChange, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// A small bouldering problem to poke at without any files.
pub fn demo_board() -> Editor {
    let mut names = NameGenerator::with_seed(0x0EAD);
    let mut board = BoardGraph::new();
    let sit_start = board.add_step(&mut names, 16.0, 82.0, 52.0);
    let undercling = board.add_step(&mut names, 30.0, 64.0, 44.0);
    let crimp = board.add_step(&mut names, 42.0, 48.0, 36.0);
    let sloper = board.add_step(&mut names, 58.0, 38.0, 48.0);
    let pinch = board.add_step(&mut names, 70.0, 26.0, 40.0);
    let finish = board.add_step(&mut names, 82.0, 12.0, 56.0);
    board.link(&sit_start, &undercling);
    board.link(&undercling, &crimp);
    board.link(&crimp, &sloper);
    board.link(&sloper, &pinch);
    board.link(&pinch, &finish);
    Editor::with_board("demo-wall.jpg", board).with_names(names)
}

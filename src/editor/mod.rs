// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The interaction state machine.
//!
//! One [`Editor`] owns the graph, the viewport, and the session, and is the
//! single writer for all three. Hosts feed it [`InputEvent`]s together with
//! the current board rect, read back an [`EditorSnapshot`] after each event,
//! and perform the file I/O themselves (`export_payload` hands out bytes,
//! `mark_exported` confirms they were persisted). Every graph mutation ends
//! by recomputing the dirty flag, so "unsaved changes" is never stale.

use crate::geom::{to_percent, to_pixel, BoardRect, PercentPoint, PixelPoint};
use crate::input::{InputEvent, Key, Modifiers, PointerButton};
use crate::model::{
    BoardGraph, EditorMode, EditorSession, Gesture, NameGenerator, Step, StepName, StepPatch,
    Viewport, SIZE_STEP,
};
use crate::store::{serialize_steps, ExportTracker};

/// Pointer slack around the resize handle, in board pixels at zoom 1.
const RESIZE_HANDLE_HIT_RADIUS: f64 = 8.0;

/// What one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Snapshot-visible state changed (and `rev` was bumped).
    pub changed: bool,
    /// Something the host should present; the editor itself has no UI.
    pub request: Option<UiRequest>,
}

/// Presentation work the editor asks of its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRequest {
    ShowShortcuts,
}

/// Answer to "may I leave now?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Proceed,
    /// Unsaved changes exist; the host must offer exactly
    /// confirm-and-discard or cancel.
    ConfirmDiscard,
}

/// What the pointer landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Hit {
    /// The selected marker's resize handle (drag mode only).
    ResizeHandle(StepName),
    Marker(StepName),
}

/// Read-only view for presentation layers, borrowed from the editor.
#[derive(Debug, Clone, Copy)]
pub struct EditorSnapshot<'a> {
    pub steps: &'a [Step],
    pub mode: EditorMode,
    pub selected_step: Option<&'a StepName>,
    pub linking_from: Option<&'a StepName>,
    pub copied_step: Option<&'a Step>,
    pub viewport: Viewport,
    pub preview_size: f64,
    pub preview_position: Option<PercentPoint>,
    pub show_labels: bool,
    pub has_unsaved_changes: bool,
    pub rev: u64,
    pub image_ref: &'a str,
}

impl<'a> EditorSnapshot<'a> {
    /// All directed edges, one item per rendered line, in paint order.
    pub fn links(&self) -> impl Iterator<Item = (&'a StepName, &'a StepName)> {
        let steps = self.steps;
        steps
            .iter()
            .flat_map(|step| step.linked_to().iter().map(move |to| (step.name(), to)))
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    image_ref: String,
    board: BoardGraph,
    session: EditorSession,
    viewport: Viewport,
    names: NameGenerator,
    exports: ExportTracker,
    rev: u64,
}

impl Editor {
    /// An editor over an empty board for the given image reference. The
    /// reference is opaque; it is displayed, never opened.
    pub fn new(image_ref: impl Into<String>) -> Self {
        Self::with_board(image_ref, BoardGraph::new())
    }

    /// An editor over a loaded board. The board counts as exported as-is,
    /// so opening a file does not start with unsaved changes.
    pub fn with_board(image_ref: impl Into<String>, board: BoardGraph) -> Self {
        let mut exports = ExportTracker::new();
        exports.mark_exported(serialize_steps(&board));
        Self {
            image_ref: image_ref.into(),
            board,
            session: EditorSession::new(),
            viewport: Viewport::new(),
            names: NameGenerator::new(),
            exports,
            rev: 0,
        }
    }

    /// Replaces the name source, mainly to seed tests and fixtures.
    pub fn with_names(mut self, names: NameGenerator) -> Self {
        self.names = names;
        self
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Single dispatch entry point. `board_rect` is the rendered board's
    /// bounding rect in the same pixel space as pointer positions, with
    /// pan/zoom already applied by the host.
    pub fn handle_event(&mut self, event: InputEvent, board_rect: BoardRect) -> Outcome {
        let (changed, request) = match event {
            InputEvent::PointerDown { position, button, modifiers } => {
                (self.handle_pointer_down(position, button, modifiers, board_rect), None)
            }
            InputEvent::PointerMove { position, modifiers: _ } => {
                (self.handle_pointer_move(position, board_rect), None)
            }
            InputEvent::PointerUp => (self.handle_pointer_up(), None),
            InputEvent::PointerLeave => (self.handle_pointer_leave(), None),
            InputEvent::Wheel { delta_y, modifiers } => {
                (self.handle_wheel(delta_y, modifiers), None)
            }
            InputEvent::KeyPress { key, modifiers } => self.handle_key(key, modifiers),
        };
        if changed {
            self.touch();
        }
        Outcome { changed, request }
    }

    pub fn snapshot(&self) -> EditorSnapshot<'_> {
        EditorSnapshot {
            steps: self.board.steps(),
            mode: self.session.mode(),
            selected_step: self.session.selected_step(),
            linking_from: self.session.linking_from(),
            copied_step: self.session.copied_step(),
            viewport: self.viewport,
            preview_size: self.session.preview_size(),
            preview_position: self.session.preview_position(),
            show_labels: self.session.show_labels(),
            has_unsaved_changes: self.exports.has_unsaved_changes(),
            rev: self.rev,
            image_ref: &self.image_ref,
        }
    }

    /// Selects a step on behalf of a host widget (for example a list
    /// panel). Selecting a name not on the board is a no-op.
    pub fn select_step(&mut self, name: Option<StepName>) -> bool {
        if let Some(name) = &name {
            if !self.board.contains(name) {
                return false;
            }
        }
        let changed = self.session.select(name);
        if changed {
            self.touch();
        }
        changed
    }

    /// Deletes a step by name, pruning inbound edges and any session
    /// reference to it. No-op when absent.
    pub fn delete_step(&mut self, name: &StepName) -> bool {
        let changed = self.delete_step_impl(name);
        if changed {
            self.touch();
        }
        changed
    }

    /// Empties the board. Destructive; hosts confirm with the user first.
    pub fn clear_all(&mut self) -> bool {
        if self.board.is_empty() {
            return false;
        }
        self.board.clear();
        self.session.select(None);
        self.session.set_linking_from(None);
        self.session.end_gesture();
        self.recompute_dirty();
        self.touch();
        true
    }

    /// The canonical steps-file text for the current graph. The host
    /// persists it and calls [`Editor::mark_exported`] on success.
    pub fn export_payload(&self) -> String {
        serialize_steps(&self.board)
    }

    /// Confirms that `payload` reached storage; clears unsaved changes.
    pub fn mark_exported(&mut self, payload: impl Into<String>) {
        self.exports.mark_exported(payload);
        self.recompute_dirty();
        self.touch();
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.exports.has_unsaved_changes()
    }

    /// Exit guard: leaving with unsaved changes needs a confirmation.
    pub fn request_exit(&self) -> ExitDecision {
        if self.exports.has_unsaved_changes() {
            ExitDecision::ConfirmDiscard
        } else {
            ExitDecision::Proceed
        }
    }

    fn delete_step_impl(&mut self, name: &StepName) -> bool {
        if !self.board.delete_step(name) {
            return false;
        }
        self.session.forget_step(name);
        self.recompute_dirty();
        true
    }

    /// The one definition of dirty, applied after every graph mutation.
    fn recompute_dirty(&mut self) {
        let current = serialize_steps(&self.board);
        self.exports.recompute(&current, self.board.len());
    }

    fn touch(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}

// Pointer/key/wheel dispatch implementation.
include!("dispatch.rs");

#[cfg(test)]
mod tests;

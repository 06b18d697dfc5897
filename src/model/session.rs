// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interaction-session state: mode, selection, pending link, copy buffer,
//! draw preview, and the in-flight pointer gesture.

use crate::geom::{PercentPoint, PixelPoint};

use super::ids::StepName;
use super::step::{clamp_size, Step, DEFAULT_SIZE};

/// The armed board tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Place new steps; clicking an existing step deletes it.
    #[default]
    Draw,
    /// Pick two steps to connect with a directed edge.
    Link,
    /// Move and resize steps.
    Drag,
    /// Nothing armed; clicks still select.
    None,
}

impl EditorMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Link => "link",
            Self::Drag => "drag",
            Self::None => "none",
        }
    }
}

/// Pointer gesture between a press and its release.
///
/// Anchors are captured at press time so motion math never re-derives state
/// from the pointer's absolute position alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    None,
    /// Moving a step; `anchor` is the press offset from the step's pixel
    /// origin, keeping the grab point under the pointer.
    DragStep { name: StepName, anchor: PixelPoint },
    /// Resizing a step from its handle; only horizontal travel counts.
    ResizeStep { name: StepName, start_size: f64, start_x: f64 },
    /// Panning the viewport; `last` is the previous pointer position.
    Pan { last: PixelPoint },
}

impl Gesture {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The step this gesture holds, if any.
    pub fn step(&self) -> Option<&StepName> {
        match self {
            Self::DragStep { name, .. } | Self::ResizeStep { name, .. } => Some(name),
            Self::None | Self::Pan { .. } => None,
        }
    }
}

/// Everything about the user's current interaction that is not the graph
/// or the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    mode: EditorMode,
    selected_step: Option<StepName>,
    linking_from: Option<StepName>,
    copied_step: Option<Step>,
    preview_size: f64,
    preview_position: Option<PercentPoint>,
    show_labels: bool,
    gesture: Gesture,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::default(),
            selected_step: None,
            linking_from: None,
            copied_step: None,
            preview_size: DEFAULT_SIZE,
            preview_position: None,
            show_labels: true,
            gesture: Gesture::None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches the armed tool. A switch ends any in-flight gesture, drops
    /// the draw preview, and, off link mode, the pending link source
    /// (`linking_from` only ever names a step while link mode is armed).
    pub fn set_mode(&mut self, mode: EditorMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.gesture = Gesture::None;
        self.preview_position = None;
        if mode != EditorMode::Link {
            self.linking_from = None;
        }
        true
    }

    pub fn selected_step(&self) -> Option<&StepName> {
        self.selected_step.as_ref()
    }

    pub fn select(&mut self, step: Option<StepName>) -> bool {
        if self.selected_step == step {
            return false;
        }
        self.selected_step = step;
        true
    }

    pub fn linking_from(&self) -> Option<&StepName> {
        self.linking_from.as_ref()
    }

    pub fn set_linking_from(&mut self, step: Option<StepName>) -> bool {
        if self.linking_from == step {
            return false;
        }
        self.linking_from = step;
        true
    }

    pub fn copied_step(&self) -> Option<&Step> {
        self.copied_step.as_ref()
    }

    pub fn set_copied_step(&mut self, step: Option<Step>) {
        self.copied_step = step;
    }

    pub fn preview_size(&self) -> f64 {
        self.preview_size
    }

    /// Nudges the pending marker size, clamped to the size domain.
    pub fn adjust_preview_size(&mut self, delta: f64) -> bool {
        let next = clamp_size(self.preview_size + delta);
        if next == self.preview_size {
            return false;
        }
        self.preview_size = next;
        true
    }

    pub fn preview_position(&self) -> Option<PercentPoint> {
        self.preview_position
    }

    pub fn set_preview_position(&mut self, position: Option<PercentPoint>) -> bool {
        if self.preview_position == position {
            return false;
        }
        self.preview_position = position;
        true
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn toggle_labels(&mut self) -> bool {
        self.show_labels = !self.show_labels;
        true
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    /// Releases any in-flight gesture. Committed motion stays committed;
    /// there is no rollback.
    pub fn end_gesture(&mut self) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        self.gesture = Gesture::None;
        true
    }

    /// Escape: back to the neutral mode with nothing selected, no pending
    /// link, no preview, no gesture. The copy buffer and label toggle stay.
    pub fn clear_interaction(&mut self) -> bool {
        let mut changed = self.set_mode(EditorMode::None);
        changed |= self.select(None);
        changed |= self.set_linking_from(None);
        changed |= self.set_preview_position(None);
        changed |= self.end_gesture();
        changed
    }

    /// Drops every reference this session holds to a deleted step. The copy
    /// buffer is a snapshot and deliberately survives.
    pub fn forget_step(&mut self, name: &StepName) -> bool {
        let mut changed = false;
        if self.selected_step.as_ref() == Some(name) {
            self.selected_step = None;
            changed = true;
        }
        if self.linking_from.as_ref() == Some(name) {
            self.linking_from = None;
            changed = true;
        }
        if self.gesture.step() == Some(name) {
            self.gesture = Gesture::None;
            changed = true;
        }
        changed
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::ids::StepName;

/// Smallest marker diameter in board pixels.
pub const SIZE_MIN: f64 = 20.0;
/// Largest marker diameter in board pixels.
pub const SIZE_MAX: f64 = 100.0;
/// Diameter of a marker placed without an explicit size.
pub const DEFAULT_SIZE: f64 = 40.0;
/// Increment applied by the size shortcuts and the draw-mode wheel.
pub const SIZE_STEP: f64 = 5.0;

/// Clamps a position component to the `0..=100` percent domain.
///
/// Non-finite input falls to the lower bound; it can only arise from
/// degenerate board rects, never from a committed step.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Clamps a marker diameter to `SIZE_MIN..=SIZE_MAX`.
pub fn clamp_size(value: f64) -> f64 {
    if value.is_nan() {
        return SIZE_MIN;
    }
    value.clamp(SIZE_MIN, SIZE_MAX)
}

/// One marker on the board.
///
/// `x`/`y` are percentages of the board extents, `size` is the marker
/// diameter in board pixels, `linked_to` holds the ordered outgoing edges.
/// Every mutator clamps, so a `Step` is always in-domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    name: StepName,
    x: f64,
    y: f64,
    size: f64,
    linked_to: SmallVec<[StepName; 4]>,
}

impl Step {
    pub fn new(name: StepName, x: f64, y: f64, size: f64) -> Self {
        Self {
            name,
            x: clamp_percent(x),
            y: clamp_percent(y),
            size: clamp_size(size),
            linked_to: SmallVec::new(),
        }
    }

    pub fn name(&self) -> &StepName {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = clamp_percent(x);
        self.y = clamp_percent(y);
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = clamp_size(size);
    }

    pub fn linked_to(&self) -> &[StepName] {
        &self.linked_to
    }

    pub fn has_link(&self, to: &StepName) -> bool {
        self.linked_to.contains(to)
    }

    /// Appends an outgoing edge unless it would self-link or duplicate.
    /// Returns whether the list changed.
    pub fn push_link(&mut self, to: StepName) -> bool {
        if to == self.name || self.has_link(&to) {
            return false;
        }
        self.linked_to.push(to);
        true
    }

    /// Removes the edge to `to` if present. Returns whether the list changed.
    pub fn remove_link(&mut self, to: &StepName) -> bool {
        let before = self.linked_to.len();
        self.linked_to.retain(|name| name != to);
        self.linked_to.len() != before
    }

    /// Replaces the edge list, dropping self-links and duplicates in order.
    /// Dangling targets are the graph's concern; it filters before calling.
    pub fn set_links(&mut self, links: impl IntoIterator<Item = StepName>) {
        self.linked_to.clear();
        for to in links {
            self.push_link(to);
        }
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Smallest zoom factor.
pub const ZOOM_MIN: f64 = 0.5;
/// Largest zoom factor.
pub const ZOOM_MAX: f64 = 3.0;
/// Zoom change per step.
pub const ZOOM_STEP: f64 = 0.1;

/// Pan/zoom state of the board surface.
///
/// `pan` is kept in unscaled board pixels and every pointer delta is divided
/// by the current zoom before it accumulates. Hosts apply zoom after pan, so
/// one pixel of pointer travel moves the board one screen pixel at any zoom
/// level. Pan is unclamped; the board may be pushed fully out of view and
/// recovered with [`Viewport::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Raises zoom one step, saturating at [`ZOOM_MAX`].
    /// Returns whether the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Lowers zoom one step, saturating at [`ZOOM_MIN`].
    /// Returns whether the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Back to zoom `1.0` with the board centered.
    /// Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::new();
        *self = Self::new();
        changed
    }

    /// Accumulates a pointer-space delta, divided by the current zoom.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.pan_x += dx / self.zoom;
        self.pan_y += dy / self.zoom;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

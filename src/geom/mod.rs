// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board-space geometry.
//!
//! Step positions are stored as percentages of the board extents so they
//! survive resizes of the rendered surface. The host hands every call the
//! current bounding rectangle of the board in its own pixel space (already
//! pan/zoom transformed); the conversions here are the only bridge between
//! the two spaces.

/// Bounding rectangle of the rendered board surface, in host pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl BoardRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }
}

/// A point in host pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    x: f64,
    y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn distance_to(self, other: PixelPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A point in percentage space, `0..=100` per axis when committed.
///
/// Values produced by [`to_percent`] are deliberately unclamped; the commit
/// sites in the model clamp, so transient pointer math stays lossless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentPoint {
    x: f64,
    y: f64,
}

impl PercentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Maps a percentage position onto the rect: `pct / 100 * extent + origin`.
pub fn to_pixel(rect: BoardRect, point: PercentPoint) -> PixelPoint {
    PixelPoint {
        x: point.x / 100.0 * rect.width + rect.left,
        y: point.y / 100.0 * rect.height + rect.top,
    }
}

/// Inverse of [`to_pixel`]: `(px - origin) / extent * 100`.
///
/// A degenerate rect (zero extent) yields non-finite values; the model's
/// clamps normalize those before anything is committed.
pub fn to_percent(rect: BoardRect, point: PixelPoint) -> PercentPoint {
    PercentPoint {
        x: (point.x - rect.left) / rect.width * 100.0,
        y: (point.y - rect.top) / rect.height * 100.0,
    }
}

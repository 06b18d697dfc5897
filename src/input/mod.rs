// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-agnostic input events.
//!
//! The editor core never sees a terminal or DOM event type; hosts translate
//! their native input into this vocabulary and hand it to
//! [`crate::editor::Editor::handle_event`] together with the board rect.
//! Pointer positions arrive in the same pixel space as that rect.

use crate::geom::PixelPoint;

/// Which pointer button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    /// Context button; the editor ignores it.
    Secondary,
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, alt: false, shift: false };

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::NONE }
    }

    pub fn alt() -> Self {
        Self { alt: true, ..Self::NONE }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::NONE }
    }
}

/// A key the editor reacts to. Everything else stays with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Delete,
}

/// One input event, already translated out of the host's native types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { position: PixelPoint, button: PointerButton, modifiers: Modifiers },
    PointerMove { position: PixelPoint, modifiers: Modifiers },
    PointerUp,
    /// The pointer left the board surface entirely (or the host lost
    /// focus). Ends gestures and drops the draw preview.
    PointerLeave,
    /// Vertical wheel travel; positive `delta_y` scrolls down, matching
    /// pointer-wheel conventions.
    Wheel { delta_y: f64, modifiers: Modifiers },
    KeyPress { key: Key, modifiers: Modifiers },
}

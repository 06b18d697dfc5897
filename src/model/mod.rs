// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A board is a step graph plus the viewport and the interaction session
//! the editor drives over it.

pub mod board;
pub mod ids;
pub mod session;
pub mod step;
pub mod viewport;

pub use board::{BoardGraph, StepPatch, PASTE_MAX, PASTE_OFFSET};
pub use ids::{NameError, NameGenerator, StepName, GENERATED_NAME_LEN};
pub use session::{EditorMode, EditorSession, Gesture};
pub use step::{
    clamp_percent, clamp_size, Step, DEFAULT_SIZE, SIZE_MAX, SIZE_MIN, SIZE_STEP,
};
pub use viewport::{Viewport, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Oread — terminal step board editor for image-backed climbing and
//! training boards.
//!
//! The [`editor`] state machine is host-agnostic; [`tui`] is the bundled
//! terminal host. Everything below the editor (geometry, graph, storage)
//! has no UI dependencies.

pub mod editor;
pub mod geom;
pub mod input;
pub mod model;
pub mod store;
pub mod tui;

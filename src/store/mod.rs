// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the steps file.
//!
//! The store module owns the export artifact format (a JSON array of steps),
//! load-time normalization of foreign files, and the dirty tracking that
//! compares the live graph against the last export.

pub mod steps_file;

pub use steps_file::{
    parse_steps, read_steps_file, serialize_steps, write_steps_file, ExportTracker,
    NormalizeReport, StepRecord, StoreError, WriteDurability, DEFAULT_EXPORT_FILENAME,
};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The steps file: serialization, loading, and export tracking.
//!
//! The export artifact is a pretty-printed JSON array, one object per step,
//! in creation order. Serialization is canonical: a file produced here,
//! parsed, and serialized again is byte-identical, which is what makes the
//! string comparison in [`ExportTracker`] a faithful change detector.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{clamp_percent, clamp_size, BoardGraph, Step, StepName, DEFAULT_SIZE};

/// Name of the export artifact when the user does not choose one.
pub const DEFAULT_EXPORT_FILENAME: &str = "board-steps.json";

/// Wire form of one step. Field order here is the field order in the file.
///
/// `size` and `linkedTo` are optional on input for files written by other
/// tools; the serializer always emits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(rename = "linkedTo", default)]
    pub linked_to: Option<Vec<String>>,
}

impl StepRecord {
    pub fn from_step(step: &Step) -> Self {
        Self {
            name: step.name().to_string(),
            x: step.x(),
            y: step.y(),
            size: Some(step.size()),
            linked_to: Some(step.linked_to().iter().map(|name| name.to_string()).collect()),
        }
    }
}

/// Serializes the graph into the canonical steps-file text.
pub fn serialize_steps(graph: &BoardGraph) -> String {
    let records: Vec<StepRecord> = graph.steps().iter().map(StepRecord::from_step).collect();
    serde_json::to_string_pretty(&records).expect("step records serialize")
}

/// What loading had to repair to make a foreign file hold the graph
/// invariants. All counts zero means the file was already canonical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Records dropped for an empty or duplicate name.
    pub dropped_steps: usize,
    /// Edges dropped: self-links, duplicates, or targets not in the file.
    pub pruned_links: usize,
    /// Positions or sizes pulled back into their domain.
    pub clamped_values: usize,
}

impl NormalizeReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("no repairs");
        }
        let mut first = true;
        for (count, noun, verb) in [
            (self.dropped_steps, "step", "dropped"),
            (self.pruned_links, "link", "pruned"),
            (self.clamped_values, "value", "clamped"),
        ] {
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            let plural = if count == 1 { "" } else { "s" };
            write!(f, "{count} {noun}{plural} {verb}")?;
        }
        Ok(())
    }
}

/// Parses steps-file text into a normalized graph.
///
/// Structural JSON errors are the caller's problem; everything else is
/// repaired in place and tallied in the report.
pub fn parse_steps(text: &str) -> Result<(BoardGraph, NormalizeReport), serde_json::Error> {
    let records: Vec<StepRecord> = serde_json::from_str(text)?;
    Ok(build_graph(records))
}

fn build_graph(records: Vec<StepRecord>) -> (BoardGraph, NormalizeReport) {
    let mut graph = BoardGraph::new();
    let mut report = NormalizeReport::default();
    let mut declared_edges = 0;

    for record in records {
        let Ok(name) = StepName::new(&record.name) else {
            report.dropped_steps += 1;
            continue;
        };

        let size = record.size.unwrap_or(DEFAULT_SIZE);
        if record.x != clamp_percent(record.x) {
            report.clamped_values += 1;
        }
        if record.y != clamp_percent(record.y) {
            report.clamped_values += 1;
        }
        if size != clamp_size(size) {
            report.clamped_values += 1;
        }

        let mut step = Step::new(name, record.x, record.y, size);
        let declared = record.linked_to.as_ref().map_or(0, |links| links.len());
        if let Some(links) = record.linked_to {
            step.set_links(links.into_iter().filter_map(|raw| StepName::new(raw).ok()));
        }

        if graph.insert(step) {
            declared_edges += declared;
        } else {
            report.dropped_steps += 1;
        }
    }

    // Dangling targets can only be judged once every surviving step is in.
    graph.normalize_links();
    report.pruned_links = declared_edges - graph.links().count();

    (graph, report)
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    SymlinkRefused { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to
    /// stable storage where possible. Exact guarantees are
    /// platform/filesystem-dependent.
    Durable,
}

/// Reads and parses a steps file.
pub fn read_steps_file(path: &Path) -> Result<(BoardGraph, NormalizeReport), StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    parse_steps(&text).map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

/// Writes the steps file atomically: temp file beside the target, then a
/// rename over it. Never writes through a symlink.
pub fn write_steps_file(
    path: &Path,
    contents: &str,
    durability: WriteDurability,
) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused { path: path.to_path_buf() });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .map_err(|source| StoreError::Io { path: parent.clone(), source })?;

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "path has no file name"),
        });
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(".oread.tmp.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    file.write_all(contents.as_bytes())
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(&parent)
                .map_err(|source| StoreError::Io { path: parent.clone(), source })?;
            dir.sync_all().map_err(|source| StoreError::Io { path: parent.clone(), source })?;
        }
    }

    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

/// Dirty tracking relative to the last successful export.
///
/// The flag is recomputed explicitly after every graph mutation rather than
/// observed reactively, so there is exactly one place where "unsaved
/// changes" is defined: a non-empty graph whose serialization differs from
/// the text captured at the last export. An empty graph is never dirty,
/// including right after clear-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTracker {
    last_exported: String,
    dirty: bool,
}

impl ExportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn last_exported(&self) -> &str {
        &self.last_exported
    }

    /// Re-derives the dirty flag from the current serialization.
    pub fn recompute(&mut self, current: &str, step_count: usize) -> bool {
        self.dirty = step_count > 0 && current != self.last_exported;
        self.dirty
    }

    /// Captures a successful export and clears the flag.
    pub fn mark_exported(&mut self, payload: impl Into<String>) {
        self.last_exported = payload.into();
        self.dirty = false;
    }
}

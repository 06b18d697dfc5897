// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (seeded name generators).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use oread::model::{BoardGraph, NameGenerator};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("oread_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A short route, the common interactive size.
    Small,
    /// A dense training board.
    Medium,
    /// Far past anything a person would place by hand.
    Large,
}

impl Case {
    fn step_count(self) -> usize {
        match self {
            Case::Small => 12,
            Case::Medium => 120,
            Case::Large => 600,
        }
    }

    fn fanout(self) -> usize {
        match self {
            Case::Small => 1,
            Case::Medium => 2,
            Case::Large => 3,
        }
    }
}

/// Builds a board with `step_count` markers spread deterministically over
/// the surface and `fanout` outgoing links per step. The generator is
/// seeded from the case, so every run sees identical names.
pub fn board(case: Case) -> (BoardGraph, NameGenerator) {
    let count = case.step_count();
    let mut names = NameGenerator::with_seed(count as u64);
    let mut graph = BoardGraph::new();

    let mut created = Vec::with_capacity(count);
    for idx in 0..count {
        // Coprime strides keep all positions distinct up to 97 * 89 steps.
        let x = (idx * 37 % 97) as f64;
        let y = (idx * 61 % 89) as f64;
        let size = 20.0 + (idx % 17) as f64 * 5.0;
        created.push(graph.add_step(&mut names, x, y, size));
    }

    for (idx, from) in created.iter().enumerate() {
        for hop in 1..=case.fanout() {
            let to = &created[(idx + hop * 7) % created.len()];
            graph.link(from, to);
        }
    }

    (graph, names)
}

pub fn checksum_board(graph: &BoardGraph) -> u64 {
    let mut acc = 0u64;
    for step in graph.steps() {
        acc = acc.wrapping_mul(131).wrapping_add(step.name().as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(step.x() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(step.y() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(step.size() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(step.linked_to().len() as u64);
    }
    acc
}

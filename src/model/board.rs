// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The step graph.
//!
//! Steps live in a `Vec` in creation order; that order is the export order
//! and the paint order (later steps draw above earlier ones). Mutations are
//! tolerant: operations referencing a missing step are silent no-ops, and
//! out-of-range numerics are clamped at the edge. The interactive loop
//! races keyboard deletes against in-flight gestures, so nothing here may
//! panic on a stale name.

use super::ids::{NameGenerator, StepName};
use super::step::Step;

/// Offset applied to a pasted step, in percent per axis.
pub const PASTE_OFFSET: f64 = 5.0;
/// Upper bound for a pasted step's position, keeping it visibly on-board.
pub const PASTE_MAX: f64 = 95.0;

/// Partial update for one step. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub size: Option<f64>,
    pub linked_to: Option<Vec<StepName>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardGraph {
    steps: Vec<Step>,
}

impl BoardGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, name: &StepName) -> Option<&Step> {
        self.steps.iter().find(|step| step.name() == name)
    }

    pub fn contains(&self, name: &StepName) -> bool {
        self.step(name).is_some()
    }

    fn step_mut(&mut self, name: &StepName) -> Option<&mut Step> {
        self.steps.iter_mut().find(|step| step.name() == name)
    }

    /// Adds a step with a fresh generated name. Position and size are
    /// clamped by [`Step::new`]. Returns the new name.
    pub fn add_step(&mut self, names: &mut NameGenerator, x: f64, y: f64, size: f64) -> StepName {
        let name = names.generate_unique(|candidate| self.contains(candidate));
        self.steps.push(Step::new(name.clone(), x, y, size));
        name
    }

    /// Inserts a prebuilt step, used by loaders and fixtures. Rejects a
    /// duplicate name and reports whether the step was taken.
    pub fn insert(&mut self, step: Step) -> bool {
        if self.contains(step.name()) {
            return false;
        }
        self.steps.push(step);
        true
    }

    /// Merges `patch` into the named step, clamping numerics and
    /// normalizing a replaced edge list (self-links and targets not in the
    /// graph are dropped, duplicates collapse keeping the first).
    ///
    /// Returns whether anything observable changed; a missing name is a
    /// silent no-op.
    pub fn update_step(&mut self, name: &StepName, patch: StepPatch) -> bool {
        let filtered_links = patch.linked_to.map(|links| {
            links
                .into_iter()
                .filter(|to| to != name && self.contains(to))
                .collect::<Vec<_>>()
        });

        let Some(step) = self.step_mut(name) else {
            return false;
        };

        let before = step.clone();
        if patch.x.is_some() || patch.y.is_some() {
            step.set_position(patch.x.unwrap_or(before.x()), patch.y.unwrap_or(before.y()));
        }
        if let Some(size) = patch.size {
            step.set_size(size);
        }
        if let Some(links) = filtered_links {
            step.set_links(links);
        }
        *step != before
    }

    /// Removes the named step and prunes every edge pointing at it.
    /// Returns false (no-op) when the name is absent.
    pub fn delete_step(&mut self, name: &StepName) -> bool {
        let Some(index) = self.steps.iter().position(|step| step.name() == name) else {
            return false;
        };
        self.steps.remove(index);
        for step in &mut self.steps {
            step.remove_link(name);
        }
        true
    }

    /// Appends one directed edge. Self-links, duplicate edges, and missing
    /// endpoints are silent no-ops. Returns whether an edge was added.
    pub fn link(&mut self, from: &StepName, to: &StepName) -> bool {
        if from == to || !self.contains(to) {
            return false;
        }
        match self.step_mut(from) {
            Some(step) => step.push_link(to.clone()),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Snapshot of the named step for the copy buffer.
    pub fn copy(&self, name: &StepName) -> Option<Step> {
        self.step(name).cloned()
    }

    /// Inserts a copy of `snapshot` under a fresh name, nudged `+5`/`+5`
    /// percent capped at `95` so the paste lands visibly beside the source.
    /// Outgoing edges are not copied.
    pub fn paste(&mut self, names: &mut NameGenerator, snapshot: &Step) -> StepName {
        let x = (snapshot.x() + PASTE_OFFSET).min(PASTE_MAX);
        let y = (snapshot.y() + PASTE_OFFSET).min(PASTE_MAX);
        self.add_step(names, x, y, snapshot.size())
    }

    /// All directed edges in paint order: steps in creation order, each
    /// step's outgoing edges in insertion order. Targets are always present
    /// (deletes prune and loads normalize).
    pub fn links(&self) -> impl Iterator<Item = (&StepName, &StepName)> {
        self.steps
            .iter()
            .flat_map(|step| step.linked_to().iter().map(move |to| (step.name(), to)))
    }

    /// Drops every edge whose target is not in the graph, plus self-links
    /// and duplicates. Loaders run this once after inserting the raw steps.
    /// Returns how many edges were pruned.
    pub fn normalize_links(&mut self) -> usize {
        let names: Vec<StepName> = self.steps.iter().map(|step| step.name().clone()).collect();
        let mut pruned = 0;
        for step in &mut self.steps {
            let before = step.linked_to().len();
            let kept: Vec<StepName> = step
                .linked_to()
                .iter()
                .filter(|to| names.iter().any(|name| &name == to))
                .cloned()
                .collect();
            step.set_links(kept);
            pruned += before - step.linked_to().len();
        }
        pruned
    }
}

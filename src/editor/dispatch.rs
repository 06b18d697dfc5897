// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Included by mod.rs. Event handlers return true when snapshot-visible
// state changed; gesture bookkeeping alone does not count.

impl Editor {
    fn handle_pointer_down(
        &mut self,
        position: PixelPoint,
        button: PointerButton,
        modifiers: Modifiers,
        rect: BoardRect,
    ) -> bool {
        // Pan wins over everything underneath the pointer.
        let pans = modifiers.alt
            || button == PointerButton::Middle
            || (button == PointerButton::Primary && modifiers.shift);
        if pans {
            self.session.set_gesture(Gesture::Pan { last: position });
            return false;
        }
        if button != PointerButton::Primary {
            return false;
        }
        match self.hit_test(rect, position) {
            Some(Hit::ResizeHandle(name)) => {
                let Some(step) = self.board.step(&name) else {
                    return false;
                };
                let start_size = step.size();
                self.session.set_gesture(Gesture::ResizeStep {
                    name,
                    start_size,
                    start_x: position.x(),
                });
                false
            }
            Some(Hit::Marker(name)) => match self.session.mode() {
                // Clicking a marker with the draw tool removes it.
                EditorMode::Draw => self.delete_step_impl(&name),
                EditorMode::Link => self.handle_link_click(name),
                EditorMode::Drag => {
                    let changed = self.session.select(Some(name.clone()));
                    let Some(step) = self.board.step(&name) else {
                        return changed;
                    };
                    let center = to_pixel(rect, PercentPoint::new(step.x(), step.y()));
                    let anchor =
                        PixelPoint::new(position.x() - center.x(), position.y() - center.y());
                    self.session.set_gesture(Gesture::DragStep { name, anchor });
                    changed
                }
                EditorMode::None => self.session.select(Some(name)),
            },
            None => match self.session.mode() {
                EditorMode::Draw if rect.contains(position) => {
                    let at = to_percent(rect, position);
                    let name = self.board.add_step(
                        &mut self.names,
                        at.x(),
                        at.y(),
                        self.session.preview_size(),
                    );
                    self.session.select(Some(name));
                    self.session.set_preview_position(None);
                    self.recompute_dirty();
                    true
                }
                _ => false,
            },
        }
    }

    /// Second half of the two-click link flow. The pending endpoint is
    /// consumed even when the edge is refused (duplicate), so a stray
    /// click never leaves the session armed.
    fn handle_link_click(&mut self, name: StepName) -> bool {
        match self.session.linking_from().cloned() {
            None => self.session.set_linking_from(Some(name)),
            Some(from) if from == name => false,
            Some(from) => {
                if self.board.link(&from, &name) {
                    self.recompute_dirty();
                }
                self.session.set_linking_from(None);
                true
            }
        }
    }

    fn handle_pointer_move(&mut self, position: PixelPoint, rect: BoardRect) -> bool {
        let gesture_changed = match self.session.gesture().clone() {
            Gesture::Pan { last } => {
                let moved = self
                    .viewport
                    .pan_by(position.x() - last.x(), position.y() - last.y());
                self.session.set_gesture(Gesture::Pan { last: position });
                moved
            }
            Gesture::DragStep { name, anchor } => {
                let center = position.offset(-anchor.x(), -anchor.y());
                let at = to_percent(rect, center);
                let patch = StepPatch {
                    x: Some(at.x()),
                    y: Some(at.y()),
                    ..StepPatch::default()
                };
                // The step may have been deleted mid-gesture; then this
                // is a no-op and the gesture dies on pointer-up.
                let moved = self.board.update_step(&name, patch);
                if moved {
                    self.recompute_dirty();
                }
                moved
            }
            Gesture::ResizeStep { name, start_size, start_x } => {
                let patch = StepPatch {
                    size: Some(start_size + (position.x() - start_x)),
                    ..StepPatch::default()
                };
                let resized = self.board.update_step(&name, patch);
                if resized {
                    self.recompute_dirty();
                }
                resized
            }
            Gesture::None => false,
        };
        // The draw preview tracks the pointer even while panning.
        let preview_changed = if self.session.mode() == EditorMode::Draw {
            let target = if rect.contains(position) {
                Some(to_percent(rect, position))
            } else {
                None
            };
            self.session.set_preview_position(target)
        } else {
            false
        };
        gesture_changed || preview_changed
    }

    fn handle_pointer_up(&mut self) -> bool {
        self.session.end_gesture();
        false
    }

    fn handle_pointer_leave(&mut self) -> bool {
        self.session.end_gesture();
        self.session.set_preview_position(None)
    }

    fn handle_wheel(&mut self, delta_y: f64, modifiers: Modifiers) -> bool {
        if modifiers.alt {
            if delta_y > 0.0 {
                self.viewport.zoom_out()
            } else if delta_y < 0.0 {
                self.viewport.zoom_in()
            } else {
                false
            }
        } else if self.session.mode() == EditorMode::Draw {
            if delta_y > 0.0 {
                self.session.adjust_preview_size(-SIZE_STEP)
            } else if delta_y < 0.0 {
                self.session.adjust_preview_size(SIZE_STEP)
            } else {
                false
            }
        } else {
            false
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> (bool, Option<UiRequest>) {
        if modifiers.ctrl {
            return match key {
                Key::Char('c') => (self.copy_selected(), None),
                Key::Char('v') => (self.paste_copied(), None),
                _ => (false, None),
            };
        }
        if modifiers.alt {
            return match key {
                Key::Char('=') | Key::Char('+') => (self.viewport.zoom_in(), None),
                Key::Char('-') | Key::Char('_') => (self.viewport.zoom_out(), None),
                _ => (false, None),
            };
        }
        match key {
            Key::Escape => (self.session.clear_interaction(), None),
            Key::Delete => match self.session.selected_step().cloned() {
                Some(name) => (self.delete_step_impl(&name), None),
                None => (false, None),
            },
            Key::Char('d') => (self.session.set_mode(EditorMode::Draw), None),
            Key::Char('l') => (self.session.set_mode(EditorMode::Link), None),
            Key::Char('v') => (self.session.set_mode(EditorMode::Drag), None),
            Key::Char('h') => (self.session.toggle_labels(), None),
            Key::Char('0') => (self.viewport.reset(), None),
            Key::Char('?') => (false, Some(UiRequest::ShowShortcuts)),
            Key::Char('+') | Key::Char('=')
                if self.session.mode() == EditorMode::Draw =>
            {
                (self.session.adjust_preview_size(SIZE_STEP), None)
            }
            Key::Char('-') | Key::Char('_')
                if self.session.mode() == EditorMode::Draw =>
            {
                (self.session.adjust_preview_size(-SIZE_STEP), None)
            }
            _ => (false, None),
        }
    }

    fn copy_selected(&mut self) -> bool {
        let Some(name) = self.session.selected_step() else {
            return false;
        };
        let Some(snapshot) = self.board.copy(name) else {
            return false;
        };
        self.session.set_copied_step(Some(snapshot));
        true
    }

    fn paste_copied(&mut self) -> bool {
        let Some(snapshot) = self.session.copied_step().cloned() else {
            return false;
        };
        let name = self.board.paste(&mut self.names, &snapshot);
        self.session.select(Some(name));
        self.recompute_dirty();
        true
    }

    /// Resolves a pointer position against the rendered stack, topmost
    /// first: the resize handle of the selected marker (drag mode only),
    /// then the selected marker itself, then the rest in reverse creation
    /// order. Hit radii scale with zoom because the markers do.
    fn hit_test(&self, rect: BoardRect, position: PixelPoint) -> Option<Hit> {
        let zoom = self.viewport.zoom();
        if self.session.mode() == EditorMode::Drag {
            if let Some(selected) = self.session.selected_step() {
                if let Some(step) = self.board.step(selected) {
                    let center = to_pixel(rect, PercentPoint::new(step.x(), step.y()));
                    let radius = step.size() / 2.0 * zoom;
                    let handle = center.offset(radius, radius);
                    if position.distance_to(handle) <= RESIZE_HANDLE_HIT_RADIUS * zoom {
                        return Some(Hit::ResizeHandle(selected.clone()));
                    }
                }
            }
        }
        let selected = self.session.selected_step();
        let later_first = self
            .board
            .steps()
            .iter()
            .rev()
            .map(Step::name)
            .filter(|name| Some(*name) != selected);
        for name in selected.into_iter().chain(later_first) {
            let Some(step) = self.board.step(name) else {
                continue;
            };
            let center = to_pixel(rect, PercentPoint::new(step.x(), step.y()));
            if position.distance_to(center) <= step.size() / 2.0 * zoom {
                return Some(Hit::Marker(name.clone()));
            }
        }
        None
    }
}

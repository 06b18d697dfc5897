// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::*;

// An 800x500 board at the origin. Percent coordinates in these tests stick
// to {12.5, 25, 50, 75} so pixel/percent conversions stay exact in f64.
fn rect() -> BoardRect {
    BoardRect::new(0.0, 0.0, 800.0, 500.0)
}

fn editor() -> Editor {
    Editor::new("wall.jpg").with_names(NameGenerator::with_seed(7))
}

fn press_with(
    editor: &mut Editor,
    x: f64,
    y: f64,
    button: PointerButton,
    modifiers: Modifiers,
) -> Outcome {
    editor.handle_event(
        InputEvent::PointerDown {
            position: PixelPoint::new(x, y),
            button,
            modifiers,
        },
        rect(),
    )
}

fn press(editor: &mut Editor, x: f64, y: f64) -> Outcome {
    press_with(editor, x, y, PointerButton::Primary, Modifiers::NONE)
}

fn move_to(editor: &mut Editor, x: f64, y: f64) -> Outcome {
    editor.handle_event(
        InputEvent::PointerMove {
            position: PixelPoint::new(x, y),
            modifiers: Modifiers::NONE,
        },
        rect(),
    )
}

fn release(editor: &mut Editor) -> Outcome {
    editor.handle_event(InputEvent::PointerUp, rect())
}

fn leave(editor: &mut Editor) -> Outcome {
    editor.handle_event(InputEvent::PointerLeave, rect())
}

fn wheel(editor: &mut Editor, delta_y: f64, modifiers: Modifiers) -> Outcome {
    editor.handle_event(InputEvent::Wheel { delta_y, modifiers }, rect())
}

fn key_with(editor: &mut Editor, key: Key, modifiers: Modifiers) -> Outcome {
    editor.handle_event(InputEvent::KeyPress { key, modifiers }, rect())
}

fn key(editor: &mut Editor, pressed: Key) -> Outcome {
    key_with(editor, pressed, Modifiers::NONE)
}

/// Draw-mode click on an empty spot; returns the new step's name.
fn draw_step(editor: &mut Editor, x_pct: f64, y_pct: f64) -> StepName {
    let position = to_pixel(rect(), PercentPoint::new(x_pct, y_pct));
    press(editor, position.x(), position.y());
    release(editor);
    editor
        .session()
        .selected_step()
        .cloned()
        .expect("draw click adds and selects a step")
}

#[test]
fn starts_clean_in_draw_mode() {
    let editor = editor();
    let snapshot = editor.snapshot();
    assert!(snapshot.steps.is_empty());
    assert_eq!(snapshot.mode, EditorMode::Draw);
    assert_eq!(snapshot.selected_step, None);
    assert_eq!(snapshot.preview_size, 40.0);
    assert!(snapshot.show_labels);
    assert!(!snapshot.has_unsaved_changes);
    assert_eq!(snapshot.rev, 0);
    assert_eq!(snapshot.image_ref, "wall.jpg");
    assert_eq!(editor.request_exit(), ExitDecision::Proceed);
}

#[test]
fn draw_click_adds_a_selected_step() {
    let mut editor = editor();
    let outcome = press(&mut editor, 200.0, 125.0);
    assert!(outcome.changed);
    assert_eq!(editor.board().len(), 1);
    let step = &editor.board().steps()[0];
    assert_eq!(step.x(), 25.0);
    assert_eq!(step.y(), 25.0);
    assert_eq!(step.size(), 40.0);
    assert_eq!(editor.session().selected_step(), Some(step.name()));
    assert!(editor.has_unsaved_changes());
    assert_eq!(editor.request_exit(), ExitDecision::ConfirmDiscard);
}

#[test]
fn draw_click_on_marker_deletes_it() {
    let mut editor = editor();
    draw_step(&mut editor, 25.0, 25.0);
    assert!(editor.has_unsaved_changes());
    let outcome = press(&mut editor, 200.0, 125.0);
    assert!(outcome.changed);
    assert!(editor.board().is_empty());
    assert_eq!(editor.session().selected_step(), None);
    // An empty board is never dirty.
    assert!(!editor.has_unsaved_changes());
}

#[test]
fn draw_click_outside_board_does_nothing() {
    let mut editor = editor();
    let outcome = press(&mut editor, 900.0, 250.0);
    assert!(!outcome.changed);
    assert!(editor.board().is_empty());
    assert_eq!(editor.rev(), 0);
}

#[test]
fn draw_preview_tracks_pointer() {
    let mut editor = editor();
    assert!(move_to(&mut editor, 400.0, 250.0).changed);
    assert_eq!(
        editor.session().preview_position(),
        Some(PercentPoint::new(50.0, 50.0))
    );
    assert!(!move_to(&mut editor, 400.0, 250.0).changed);
    assert!(move_to(&mut editor, 900.0, 250.0).changed);
    assert_eq!(editor.session().preview_position(), None);

    move_to(&mut editor, 400.0, 250.0);
    assert!(leave(&mut editor).changed);
    assert_eq!(editor.session().preview_position(), None);

    key(&mut editor, Key::Char('v'));
    move_to(&mut editor, 400.0, 250.0);
    assert_eq!(editor.session().preview_position(), None);
}

#[test]
fn wheel_adjusts_preview_size_in_draw_mode() {
    let mut editor = editor();
    assert!(wheel(&mut editor, -1.0, Modifiers::NONE).changed);
    assert_eq!(editor.session().preview_size(), 45.0);
    draw_step(&mut editor, 25.0, 25.0);
    assert_eq!(editor.board().steps()[0].size(), 45.0);

    wheel(&mut editor, 1.0, Modifiers::NONE);
    wheel(&mut editor, 1.0, Modifiers::NONE);
    assert_eq!(editor.session().preview_size(), 35.0);

    key(&mut editor, Key::Char('v'));
    assert!(!wheel(&mut editor, -1.0, Modifiers::NONE).changed);
    assert_eq!(editor.session().preview_size(), 35.0);
}

#[test]
fn alt_wheel_zooms_in_any_mode() {
    let mut editor = editor();
    assert!(wheel(&mut editor, -1.0, Modifiers::alt()).changed);
    assert_eq!(editor.viewport().zoom(), 1.1);
    key(&mut editor, Key::Char('v'));
    assert!(wheel(&mut editor, 1.0, Modifiers::alt()).changed);
    assert_eq!(editor.viewport().zoom(), 1.0);
}

#[test]
fn keyboard_switches_modes() {
    let mut editor = editor();
    assert!(!key(&mut editor, Key::Char('d')).changed);
    assert!(key(&mut editor, Key::Char('l')).changed);
    assert_eq!(editor.session().mode(), EditorMode::Link);
    assert!(key(&mut editor, Key::Char('v')).changed);
    assert_eq!(editor.session().mode(), EditorMode::Drag);
    assert!(key(&mut editor, Key::Char('d')).changed);
    assert_eq!(editor.session().mode(), EditorMode::Draw);
}

#[test]
fn link_needs_two_clicks() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    let b = draw_step(&mut editor, 75.0, 25.0);
    key(&mut editor, Key::Char('l'));

    assert!(press(&mut editor, 200.0, 125.0).changed);
    assert_eq!(editor.session().linking_from(), Some(&a));
    assert_eq!(editor.board().links().count(), 0);

    assert!(press(&mut editor, 600.0, 125.0).changed);
    assert_eq!(editor.session().linking_from(), None);
    let links: Vec<_> = editor.board().links().collect();
    assert_eq!(links, vec![(&a, &b)]);
    assert!(editor.has_unsaved_changes());
}

#[test]
fn duplicate_link_still_consumes_the_pending_source() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    draw_step(&mut editor, 75.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    press(&mut editor, 600.0, 125.0);

    press(&mut editor, 200.0, 125.0);
    assert_eq!(editor.session().linking_from(), Some(&a));
    let outcome = press(&mut editor, 600.0, 125.0);
    assert!(outcome.changed);
    assert_eq!(editor.session().linking_from(), None);
    assert_eq!(editor.board().links().count(), 1);
}

#[test]
fn clicking_the_pending_source_again_keeps_it_armed() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    let outcome = press(&mut editor, 200.0, 125.0);
    assert!(!outcome.changed);
    assert_eq!(editor.session().linking_from(), Some(&a));
}

#[test]
fn link_click_on_empty_board_keeps_the_pending_source() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    let outcome = press(&mut editor, 700.0, 450.0);
    assert!(!outcome.changed);
    assert_eq!(editor.session().linking_from(), Some(&a));
}

#[test]
fn leaving_link_mode_disarms_the_pending_source() {
    let mut editor = editor();
    draw_step(&mut editor, 25.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    key(&mut editor, Key::Char('v'));
    assert_eq!(editor.session().linking_from(), None);
}

#[test]
fn drag_keeps_the_grab_point_under_the_pointer() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 50.0);
    key(&mut editor, Key::Char('v'));

    // Grab 10px right and 5px below the center.
    press(&mut editor, 210.0, 255.0);
    assert!(move_to(&mut editor, 410.0, 380.0).changed);
    release(&mut editor);
    let step = editor.board().step(&a).unwrap();
    assert_eq!(step.x(), 50.0);
    assert_eq!(step.y(), 75.0);
}

#[test]
fn drag_clamps_to_the_board_edges() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 50.0, 75.0);
    key(&mut editor, Key::Char('v'));
    press(&mut editor, 400.0, 375.0);

    move_to(&mut editor, -40.0, 375.0);
    assert_eq!(editor.board().step(&a).unwrap().x(), 0.0);
    move_to(&mut editor, 1000.0, 375.0);
    assert_eq!(editor.board().step(&a).unwrap().x(), 100.0);
    assert_eq!(editor.board().step(&a).unwrap().y(), 75.0);
    release(&mut editor);
}

#[test]
fn resize_handle_drags_horizontally_from_the_start_size() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 50.0, 50.0);
    key(&mut editor, Key::Char('v'));

    // Handle sits at center + (radius, radius) = (420, 270) for size 40.
    press(&mut editor, 420.0, 270.0);
    assert!(move_to(&mut editor, 450.0, 270.0).changed);
    assert_eq!(editor.board().step(&a).unwrap().size(), 70.0);
    move_to(&mut editor, 510.0, 270.0);
    assert_eq!(editor.board().step(&a).unwrap().size(), 100.0);
    move_to(&mut editor, 395.0, 270.0);
    assert_eq!(editor.board().step(&a).unwrap().size(), 20.0);
    release(&mut editor);
}

#[test]
fn resize_handle_is_inert_outside_drag_mode() {
    let mut editor = editor();
    draw_step(&mut editor, 50.0, 50.0);
    // Still in draw mode: the handle position is just empty board.
    press(&mut editor, 420.0, 270.0);
    assert_eq!(editor.board().len(), 2);
}

#[test]
fn alt_press_pans_even_over_a_marker() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 50.0);

    // Draw mode would delete the marker; panning must win.
    press_with(&mut editor, 200.0, 250.0, PointerButton::Primary, Modifiers::alt());
    assert_eq!(editor.board().len(), 1);
    move_to(&mut editor, 230.0, 260.0);
    release(&mut editor);
    assert_eq!(editor.viewport().pan_x(), 30.0);
    assert_eq!(editor.viewport().pan_y(), 10.0);
    assert_eq!(editor.board().step(&a).unwrap().x(), 25.0);
}

#[test]
fn shift_primary_pans_instead_of_dragging() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 50.0);
    key(&mut editor, Key::Char('v'));
    press_with(&mut editor, 200.0, 250.0, PointerButton::Primary, Modifiers::shift());
    move_to(&mut editor, 210.0, 250.0);
    release(&mut editor);
    assert_eq!(editor.viewport().pan_x(), 10.0);
    assert_eq!(editor.board().step(&a).unwrap().x(), 25.0);
}

#[test]
fn middle_button_pans() {
    let mut editor = editor();
    press_with(&mut editor, 100.0, 100.0, PointerButton::Middle, Modifiers::NONE);
    move_to(&mut editor, 100.0, 90.0);
    release(&mut editor);
    assert_eq!(editor.viewport().pan_y(), -10.0);
}

#[test]
fn pan_distance_shrinks_as_zoom_grows() {
    let mut editor = editor();
    press_with(&mut editor, 100.0, 100.0, PointerButton::Primary, Modifiers::alt());
    move_to(&mut editor, 130.0, 100.0);
    release(&mut editor);
    assert_eq!(editor.viewport().pan_x(), 30.0);

    wheel(&mut editor, -1.0, Modifiers::alt());
    press_with(&mut editor, 100.0, 100.0, PointerButton::Primary, Modifiers::alt());
    move_to(&mut editor, 111.0, 100.0);
    release(&mut editor);
    // 30 + 11 / 1.1 lands exactly on 40 in f64.
    assert_eq!(editor.viewport().pan_x(), 40.0);
}

#[test]
fn escape_resets_the_interaction() {
    let mut editor = editor();
    draw_step(&mut editor, 25.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);

    let outcome = key(&mut editor, Key::Escape);
    assert!(outcome.changed);
    assert_eq!(editor.session().mode(), EditorMode::None);
    assert_eq!(editor.session().selected_step(), None);
    assert_eq!(editor.session().linking_from(), None);
    assert_eq!(editor.board().len(), 1);
}

#[test]
fn delete_key_removes_the_selected_step_and_inbound_links() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    let b = draw_step(&mut editor, 75.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    press(&mut editor, 600.0, 125.0);

    // b is still selected from drawing it.
    assert_eq!(editor.session().selected_step(), Some(&b));
    assert!(key(&mut editor, Key::Delete).changed);
    assert!(editor.board().step(&b).is_none());
    assert_eq!(editor.session().selected_step(), None);
    assert!(!editor.board().step(&a).unwrap().has_link(&b));
    assert!(!key(&mut editor, Key::Delete).changed);
}

#[test]
fn copy_paste_offsets_and_drops_links() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    let b = draw_step(&mut editor, 50.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    press(&mut editor, 400.0, 125.0);
    key(&mut editor, Key::Char('v'));
    press(&mut editor, 200.0, 125.0);
    release(&mut editor);

    assert!(key_with(&mut editor, Key::Char('c'), Modifiers::ctrl()).changed);
    assert!(key_with(&mut editor, Key::Char('v'), Modifiers::ctrl()).changed);
    assert_eq!(editor.board().len(), 3);
    let pasted = editor.session().selected_step().cloned().unwrap();
    assert_ne!(pasted, a);
    let step = editor.board().step(&pasted).unwrap();
    assert_eq!(step.x(), 30.0);
    assert_eq!(step.y(), 30.0);
    assert!(step.linked_to().is_empty());
    assert!(editor.board().step(&a).unwrap().has_link(&b));

    key_with(&mut editor, Key::Char('v'), Modifiers::ctrl());
    assert_eq!(editor.board().len(), 4);
}

#[test]
fn paste_caps_at_the_board_margin() {
    let mut editor = editor();
    draw_step(&mut editor, 75.0, 75.0);
    key_with(&mut editor, Key::Char('c'), Modifiers::ctrl());
    for _ in 0..5 {
        key_with(&mut editor, Key::Char('v'), Modifiers::ctrl());
        key_with(&mut editor, Key::Char('c'), Modifiers::ctrl());
    }
    let steps = editor.board().steps();
    assert_eq!(steps.len(), 6);
    assert_eq!((steps[3].x(), steps[3].y()), (90.0, 90.0));
    assert_eq!((steps[4].x(), steps[4].y()), (95.0, 95.0));
    assert_eq!((steps[5].x(), steps[5].y()), (95.0, 95.0));
}

#[test]
fn copy_buffer_survives_deleting_the_source() {
    let mut editor = editor();
    draw_step(&mut editor, 25.0, 25.0);
    key_with(&mut editor, Key::Char('c'), Modifiers::ctrl());
    key(&mut editor, Key::Delete);
    assert!(editor.board().is_empty());

    assert!(key_with(&mut editor, Key::Char('v'), Modifiers::ctrl()).changed);
    assert_eq!(editor.board().len(), 1);
    assert_eq!(editor.board().steps()[0].x(), 30.0);
}

#[test]
fn copy_without_selection_and_paste_without_buffer_are_noops() {
    let mut editor = editor();
    assert!(!key_with(&mut editor, Key::Char('v'), Modifiers::ctrl()).changed);
    draw_step(&mut editor, 25.0, 25.0);
    key(&mut editor, Key::Escape);
    assert!(!key_with(&mut editor, Key::Char('c'), Modifiers::ctrl()).changed);
}

#[test]
fn deleting_mid_drag_leaves_no_ghost() {
    let mut editor = editor();
    draw_step(&mut editor, 25.0, 50.0);
    key(&mut editor, Key::Char('v'));
    press(&mut editor, 200.0, 250.0);
    key(&mut editor, Key::Delete);
    assert!(editor.board().is_empty());

    let outcome = move_to(&mut editor, 300.0, 250.0);
    assert!(!outcome.changed);
    assert!(editor.board().is_empty());
}

#[test]
fn dirty_tracks_content_not_event_history() {
    let mut editor = editor();
    assert!(!editor.has_unsaved_changes());
    let a = draw_step(&mut editor, 25.0, 50.0);
    assert!(editor.has_unsaved_changes());

    let payload = editor.export_payload();
    editor.mark_exported(payload);
    assert!(!editor.has_unsaved_changes());
    assert_eq!(editor.request_exit(), ExitDecision::Proceed);

    key(&mut editor, Key::Char('v'));
    press(&mut editor, 200.0, 250.0);
    move_to(&mut editor, 280.0, 250.0);
    assert!(editor.has_unsaved_changes());
    assert_eq!(editor.request_exit(), ExitDecision::ConfirmDiscard);

    // Moving back to the exported position makes the board clean again.
    move_to(&mut editor, 200.0, 250.0);
    release(&mut editor);
    assert_eq!(editor.board().step(&a).unwrap().x(), 25.0);
    assert!(!editor.has_unsaved_changes());
}

#[test]
fn clear_all_empties_board_and_session() {
    let mut editor = editor();
    draw_step(&mut editor, 25.0, 25.0);
    draw_step(&mut editor, 75.0, 25.0);
    assert!(editor.clear_all());
    assert!(editor.board().is_empty());
    assert_eq!(editor.session().selected_step(), None);
    assert!(!editor.has_unsaved_changes());
    assert!(!editor.clear_all());
}

#[test]
fn loading_a_board_starts_without_unsaved_changes() {
    let mut board = BoardGraph::new();
    let mut names = NameGenerator::with_seed(3);
    board.add_step(&mut names, 10.0, 20.0, 40.0);
    let mut editor = Editor::with_board("wall.jpg", board);
    assert!(!editor.has_unsaved_changes());

    let name = editor.board().steps()[0].name().clone();
    editor.delete_step(&name);
    assert!(!editor.board().contains(&name));
    // One step was loaded and deleted; the empty board is clean.
    assert!(!editor.has_unsaved_changes());
}

#[test]
fn rev_increments_only_on_visible_change() {
    let mut editor = editor();
    assert_eq!(editor.rev(), 0);
    key(&mut editor, Key::Char('d'));
    assert_eq!(editor.rev(), 0);
    key(&mut editor, Key::Char('l'));
    assert_eq!(editor.rev(), 1);
    key(&mut editor, Key::Escape);
    assert_eq!(editor.rev(), 2);
    move_to(&mut editor, 400.0, 250.0);
    assert_eq!(editor.rev(), 2);
}

#[test]
fn hit_radius_scales_with_zoom() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 50.0, 50.0);
    key(&mut editor, Key::Escape);

    // 30px off-center misses a size-40 marker at zoom 1.
    press(&mut editor, 430.0, 250.0);
    assert_eq!(editor.session().selected_step(), None);

    for _ in 0..10 {
        wheel(&mut editor, -1.0, Modifiers::alt());
    }
    press(&mut editor, 430.0, 250.0);
    assert_eq!(editor.session().selected_step(), Some(&a));
}

#[test]
fn topmost_marker_wins_and_selection_floats_above() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 50.0);
    let b = draw_step(&mut editor, 75.0, 50.0);

    // Drag b on top of a, slightly to the right.
    key(&mut editor, Key::Char('v'));
    press(&mut editor, 600.0, 250.0);
    move_to(&mut editor, 208.0, 250.0);
    release(&mut editor);
    key(&mut editor, Key::Escape);

    // Both markers cover this point; the later one paints on top.
    press(&mut editor, 204.0, 250.0);
    assert_eq!(editor.session().selected_step(), Some(&b));

    editor.select_step(Some(a.clone()));
    press(&mut editor, 204.0, 250.0);
    assert_eq!(editor.session().selected_step(), Some(&a));
}

#[test]
fn select_step_checks_the_board() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    let ghost = StepName::new("zzzzzzz").unwrap();
    assert!(!editor.select_step(Some(ghost)));
    assert_eq!(editor.session().selected_step(), Some(&a));
    assert!(editor.select_step(None));
    assert_eq!(editor.session().selected_step(), None);
}

#[test]
fn snapshot_links_come_in_paint_order() {
    let mut editor = editor();
    let a = draw_step(&mut editor, 25.0, 25.0);
    let b = draw_step(&mut editor, 50.0, 25.0);
    let c = draw_step(&mut editor, 75.0, 25.0);
    key(&mut editor, Key::Char('l'));
    press(&mut editor, 200.0, 125.0);
    press(&mut editor, 400.0, 125.0);
    press(&mut editor, 200.0, 125.0);
    press(&mut editor, 600.0, 125.0);

    let snapshot = editor.snapshot();
    let links: Vec<_> = snapshot.links().collect();
    assert_eq!(links, vec![(&a, &b), (&a, &c)]);
}

#[test]
fn zoom_reset_key_restores_the_viewport() {
    let mut editor = editor();
    for _ in 0..3 {
        wheel(&mut editor, -1.0, Modifiers::alt());
    }
    press_with(&mut editor, 100.0, 100.0, PointerButton::Primary, Modifiers::alt());
    move_to(&mut editor, 150.0, 120.0);
    release(&mut editor);
    assert_ne!(editor.viewport().zoom(), 1.0);

    assert!(key(&mut editor, Key::Char('0')).changed);
    assert_eq!(editor.viewport().zoom(), 1.0);
    assert_eq!(editor.viewport().pan_x(), 0.0);
    assert_eq!(editor.viewport().pan_y(), 0.0);
    assert!(!key(&mut editor, Key::Char('0')).changed);
}

#[test]
fn plus_minus_adjust_preview_only_in_draw_mode() {
    let mut editor = editor();
    assert!(key(&mut editor, Key::Char('+')).changed);
    assert_eq!(editor.session().preview_size(), 45.0);
    assert!(key(&mut editor, Key::Char('-')).changed);
    assert_eq!(editor.session().preview_size(), 40.0);

    key(&mut editor, Key::Char('v'));
    assert!(!key(&mut editor, Key::Char('+')).changed);
    assert_eq!(editor.session().preview_size(), 40.0);
    // Alt+= still zooms outside draw mode.
    assert!(key_with(&mut editor, Key::Char('='), Modifiers::alt()).changed);
    assert_eq!(editor.viewport().zoom(), 1.1);
}

#[test]
fn label_toggle_flips() {
    let mut editor = editor();
    assert!(key(&mut editor, Key::Char('h')).changed);
    assert!(!editor.session().show_labels());
    assert!(key(&mut editor, Key::Char('h')).changed);
    assert!(editor.session().show_labels());
}

#[test]
fn shortcuts_key_raises_a_ui_request() {
    let mut editor = editor();
    let outcome = key(&mut editor, Key::Char('?'));
    assert!(!outcome.changed);
    assert_eq!(outcome.request, Some(UiRequest::ShowShortcuts));
    assert_eq!(key(&mut editor, Key::Char('d')).request, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut editor = editor();
    assert!(!key(&mut editor, Key::Char('z')).changed);
    assert!(!key_with(&mut editor, Key::Char('x'), Modifiers::ctrl()).changed);
    assert!(!key_with(&mut editor, Key::Char('z'), Modifiers::alt()).changed);
    assert_eq!(editor.rev(), 0);
}

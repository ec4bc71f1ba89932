//! Canvas controller tests: gesture state machine exclusivity, the
//! pan/zoom transform, and the edge-connect gesture.
mod common;

use common::small_model;
use fluxo::canvas::{ZOOM_MAX, ZOOM_MIN};
use fluxo::prelude::*;

fn pos(x: f64, y: f64) -> PointerPos {
    PointerPos::new(x, y)
}

#[test]
fn wheel_zoom_clamps_at_the_limits() {
    // Repeated wheel-up from 1.0 must stop exactly at 2.0, never beyond.
    let mut canvas = CanvasController::new();
    for _ in 0..5 {
        canvas.wheel(WheelDirection::Up);
    }
    assert!(canvas.zoom() <= ZOOM_MAX);
    for _ in 0..20 {
        canvas.wheel(WheelDirection::Up);
    }
    assert_eq!(canvas.zoom(), ZOOM_MAX);

    for _ in 0..40 {
        canvas.wheel(WheelDirection::Down);
    }
    assert_eq!(canvas.zoom(), ZOOM_MIN);
}

#[test]
fn panning_tracks_pointer_deltas_and_ends_on_leave() {
    let (mut model, _, _) = small_model();
    let mut canvas = CanvasController::new();

    canvas.pointer_down(PointerTarget::Background, pos(10.0, 10.0), &model);
    assert_eq!(canvas.mode_kind(), ModeKind::Panning);

    canvas.pointer_move(pos(35.0, -5.0), &mut model);
    assert_eq!(canvas.pan(), (25.0, -15.0));

    canvas.pointer_leave();
    assert_eq!(canvas.mode_kind(), ModeKind::Idle);

    // The pan offset survives the gesture ending.
    assert_eq!(canvas.pan(), (25.0, -15.0));
}

#[test]
fn node_drag_scales_client_deltas_by_zoom() {
    let (mut model, _, text_id) = small_model();
    let mut canvas = CanvasController::new();
    canvas.wheel(WheelDirection::Down);
    canvas.wheel(WheelDirection::Down);
    canvas.wheel(WheelDirection::Down);
    canvas.wheel(WheelDirection::Down);
    canvas.wheel(WheelDirection::Down);
    assert_eq!(canvas.zoom(), 0.5);

    canvas.pointer_down(
        PointerTarget::NodeBody(text_id.clone()),
        pos(100.0, 100.0),
        &model,
    );
    canvas.pointer_move(pos(150.0, 120.0), &mut model);
    canvas.pointer_up(PointerTarget::NodeBody(text_id.clone()), &mut model);

    // Node started at (300, 80); 50/0.5 = 100, 20/0.5 = 40.
    let node = model.node(&text_id).unwrap();
    assert_eq!((node.x, node.y), (400, 120));
    assert_eq!(canvas.mode_kind(), ModeKind::Idle);
}

#[test]
fn click_selects_a_node_and_background_click_clears_it() {
    let (mut model, _, text_id) = small_model();
    let mut canvas = CanvasController::new();

    canvas.pointer_down(
        PointerTarget::NodeBody(text_id.clone()),
        pos(0.0, 0.0),
        &model,
    );
    canvas.pointer_up(PointerTarget::NodeBody(text_id.clone()), &mut model);
    assert_eq!(canvas.selected(), Some(text_id.as_str()));

    canvas.pointer_down(PointerTarget::Background, pos(5.0, 5.0), &model);
    canvas.pointer_up(PointerTarget::Background, &mut model);
    assert_eq!(canvas.selected(), None);
}

#[test]
fn a_drag_is_not_a_select() {
    let (mut model, _, text_id) = small_model();
    let mut canvas = CanvasController::new();

    canvas.pointer_down(
        PointerTarget::NodeBody(text_id.clone()),
        pos(0.0, 0.0),
        &model,
    );
    canvas.pointer_move(pos(30.0, 0.0), &mut model);
    canvas.pointer_up(PointerTarget::NodeBody(text_id), &mut model);
    assert_eq!(canvas.selected(), None);
}

#[test]
fn connect_gesture_commits_on_an_in_connector() {
    let (mut model, _, text_id) = small_model();
    let wait_id = model.add_node(NodeType::Wait, 500, 80).id.clone();
    let mut canvas = CanvasController::new();

    canvas.pointer_down(
        PointerTarget::ConnectorOut(text_id.clone()),
        pos(0.0, 0.0),
        &model,
    );
    assert_eq!(canvas.pending_connection(), Some(text_id.as_str()));

    canvas.pointer_up(PointerTarget::ConnectorIn(wait_id.clone()), &mut model);
    assert_eq!(canvas.mode_kind(), ModeKind::Idle);
    assert!(model
        .edges()
        .iter()
        .any(|e| e.from == text_id && e.to == wait_id));
}

#[test]
fn connect_gesture_cancels_anywhere_else() {
    let (mut model, _, text_id) = small_model();
    let mut canvas = CanvasController::new();
    let edges_before = model.edges().len();

    canvas.pointer_down(
        PointerTarget::ConnectorOut(text_id.clone()),
        pos(0.0, 0.0),
        &model,
    );
    canvas.pointer_up(PointerTarget::Background, &mut model);

    assert_eq!(model.edges().len(), edges_before);
    assert_eq!(canvas.mode_kind(), ModeKind::Idle);
}

#[test]
fn connecting_a_node_to_itself_is_silently_ignored() {
    let (mut model, _, text_id) = small_model();
    let mut canvas = CanvasController::new();
    let edges_before = model.edges().len();

    canvas.pointer_down(
        PointerTarget::ConnectorOut(text_id.clone()),
        pos(0.0, 0.0),
        &model,
    );
    canvas.pointer_up(PointerTarget::ConnectorIn(text_id), &mut model);
    assert_eq!(model.edges().len(), edges_before);
}

#[test]
fn gestures_do_not_stack() {
    let (mut model, _, text_id) = small_model();
    let mut canvas = CanvasController::new();

    canvas.pointer_down(
        PointerTarget::ConnectorOut(text_id.clone()),
        pos(0.0, 0.0),
        &model,
    );
    // A second pointer-down mid-gesture is ignored outright.
    canvas.pointer_down(PointerTarget::Background, pos(1.0, 1.0), &model);
    assert_eq!(canvas.mode_kind(), ModeKind::Connecting);
    assert_eq!(canvas.pending_connection(), Some(text_id.as_str()));
}

#[test]
fn to_canvas_applies_pan_then_zoom() {
    let (mut model, _, _) = small_model();
    let mut canvas = CanvasController::new();

    canvas.pointer_down(PointerTarget::Background, pos(0.0, 0.0), &model);
    canvas.pointer_move(pos(50.0, 30.0), &mut model);
    canvas.pointer_up(PointerTarget::Background, &mut model);
    canvas.wheel(WheelDirection::Up);
    canvas.wheel(WheelDirection::Up);
    canvas.wheel(WheelDirection::Up);
    canvas.wheel(WheelDirection::Up);
    canvas.wheel(WheelDirection::Up);
    assert_eq!(canvas.zoom(), 1.5);

    // canvasX = (clientX - originX - panX) / zoom
    let p = canvas.to_canvas(pos(350.0, 180.0), pos(0.0, 0.0));
    assert_eq!(p.x, (350.0 - 50.0) / 1.5);
    assert_eq!(p.y, (180.0 - 30.0) / 1.5);
}

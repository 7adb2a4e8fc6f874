use glam::DVec2;

use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Modifiers, PointId};

use super::map_intent_to_commands;

fn state_with_two_anchors() -> AppState {
    let mut state = AppState::new();
    state
        .graph
        .append_anchor(DVec2::new(100.0, 100.0))
        .expect("Anchor 1");
    state
        .graph
        .append_anchor(DVec2::new(300.0, 100.0))
        .expect("Anchor 2");
    state
}

#[test]
fn pointer_pressed_on_empty_canvas_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: DVec2::new(10.0, 10.0),
            modifiers: Modifiers::NONE,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_pressed_near_control_begins_control_drag() {
    let state = state_with_two_anchors();

    // next_control des ersten Anchors liegt bei (110, 100)
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: DVec2::new(111.0, 101.0),
            modifiers: Modifiers::NONE,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeginDrag {
            target: PointId::Control(_)
        }
    ));
}

#[test]
fn pointer_moved_without_drag_maps_to_nothing() {
    let state = state_with_two_anchors();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: DVec2::new(200.0, 200.0),
            modifiers: Modifiers::NONE,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn anchor_remove_ignores_controls() {
    let state = state_with_two_anchors();

    let on_control = map_intent_to_commands(
        &state,
        AppIntent::AnchorRemoveRequested {
            pos: DVec2::new(290.0, 100.0),
        },
    );
    // Nur das prev_control liegt im Pick-Radius, der Anchor selbst nicht
    assert!(on_control.is_empty());

    let on_anchor = map_intent_to_commands(
        &state,
        AppIntent::AnchorRemoveRequested {
            pos: DVec2::new(301.0, 99.0),
        },
    );
    assert_eq!(on_anchor.len(), 1);
    assert!(matches!(on_anchor[0], AppCommand::RemoveAnchor { .. }));
}

#[test]
fn frame_tick_maps_to_advance_playback() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FrameTick { delta: 0.016 });

    assert_eq!(commands, vec![AppCommand::AdvancePlayback { delta: 0.016 }]);
}

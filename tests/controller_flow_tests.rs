use curve_path_editor::{AppCommand, AppController, AppIntent, AppState, Easing, EditorOptions};
use glam::DVec2;

fn append(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::AnchorAppendRequested {
                pos: DVec2::new(x, y),
            },
        )
        .expect("AnchorAppendRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_append_requests_build_curve_and_log_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    append(&mut controller, &mut state, 100.0, 300.0);
    append(&mut controller, &mut state, 400.0, 100.0);
    append(&mut controller, &mut state, 700.0, 300.0);

    assert_eq!(state.anchor_count(), 3);
    assert_eq!(state.graph.path_x().len(), 2);
    assert_eq!(state.command_log.len(), 3);

    match state.command_log.last() {
        Some(AppCommand::AppendAnchor { pos }) => assert_eq!(*pos, DVec2::new(700.0, 300.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_frame_tick_without_playback_keeps_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append(&mut controller, &mut state, 100.0, 300.0);
    append(&mut controller, &mut state, 500.0, 300.0);

    controller
        .handle_intent(&mut state, AppIntent::FrameTick { delta: 0.5 })
        .expect("FrameTick sollte ohne Fehler durchlaufen");

    assert_eq!(state.playback.elapsed, 0.0);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::AdvancePlayback { .. })
    ));
}

#[test]
fn test_playback_moves_point_along_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append(&mut controller, &mut state, 100.0, 300.0);
    append(&mut controller, &mut state, 500.0, 300.0);

    controller
        .handle_intent(&mut state, AppIntent::PlaybackToggled)
        .expect("PlaybackToggled");
    assert!(state.playback.playing);
    assert_eq!(state.view.playback_point, DVec2::new(100.0, 300.0));

    let half = state.playback.duration / 2.0;
    controller
        .handle_intent(&mut state, AppIntent::FrameTick { delta: half })
        .expect("FrameTick");

    // Symmetrische Handles: Mitte der Kurve liegt in der Mitte der Strecke
    let p = state.view.playback_point;
    assert!((p.x - 300.0).abs() < 1e-9);
    assert!((p.y - 300.0).abs() < 1e-9);
}

#[test]
fn test_playback_easing_change_updates_options() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaybackEasingChanged {
                easing: Easing::CubicInOut,
            },
        )
        .expect("PlaybackEasingChanged");

    assert_eq!(state.playback.easing, Easing::CubicInOut);
    assert_eq!(state.options.playback_easing, Easing::CubicInOut);
}

#[test]
fn test_canvas_resize_clamps_anchors() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append(&mut controller, &mut state, 700.0, 500.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasResized {
                width: 400.0,
                height: 300.0,
            },
        )
        .expect("CanvasResized");

    assert_eq!(state.view.canvas_size, DVec2::new(400.0, 300.0));
    assert_eq!(state.graph.point_at(0.0), DVec2::new(400.0, 300.0));
}

#[test]
fn test_invalid_canvas_size_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CanvasResized {
            width: f64::NAN,
            height: 300.0,
        },
    );

    assert!(result.is_err());
    assert_eq!(state.view.canvas_size, DVec2::new(800.0, 600.0));
}

#[test]
fn test_toggle_controls_rebuilds_paths() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append(&mut controller, &mut state, 100.0, 300.0);
    let before = state.graph.rebuild_count();

    controller
        .handle_intent(&mut state, AppIntent::ToggleControlsRequested)
        .expect("ToggleControlsRequested");

    assert!(!state.graph.controls_visible());
    assert_eq!(state.graph.rebuild_count(), before + 1);
}

#[test]
fn test_options_hide_controls_at_start() {
    let options = EditorOptions {
        controls_visible: false,
        ..EditorOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    append(&mut controller, &mut state, 100.0, 300.0);
    append(&mut controller, &mut state, 300.0, 300.0);

    assert!(!state.graph.controls_visible());
    assert_eq!(state.pick_index().len(), 2);
}

#[test]
fn test_apply_options_keeps_anchors() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append(&mut controller, &mut state, 100.0, 300.0);
    append(&mut controller, &mut state, 300.0, 300.0);

    let options = EditorOptions {
        strength_enabled: true,
        playback_duration: 5.0,
        ..EditorOptions::default()
    };
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged");

    assert_eq!(state.anchor_count(), 2);
    assert!(state.options.strength_enabled);
    assert_eq!(state.playback.duration, 5.0);
}

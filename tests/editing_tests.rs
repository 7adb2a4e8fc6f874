use curve_path_editor::{
    AnchorId, AppController, AppIntent, AppState, EditorOptions, Modifiers, PointId,
};
use glam::DVec2;

/// Drei Anchors auf einer Linie; der mittlere hat beide Tangenten-Handles.
fn three_anchor_state() -> (AppController, AppState, AnchorId) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for x in [100.0, 400.0, 700.0] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::AnchorAppendRequested {
                    pos: DVec2::new(x, 300.0),
                },
            )
            .expect("Anchor anhängen");
    }
    let middle = state.graph.anchor_ids().nth(1).expect("mittlerer Anchor");
    (controller, state, middle)
}

fn tangent_positions(state: &AppState, id: AnchorId) -> (DVec2, DVec2) {
    let anchor = state.graph.anchor(id).expect("Anchor vorhanden");
    let prev = anchor
        .prev_control
        .and_then(|c| state.graph.position(PointId::Control(c)))
        .expect("prev_control");
    let next = anchor
        .next_control
        .and_then(|c| state.graph.position(PointId::Control(c)))
        .expect("next_control");
    (prev, next)
}

fn drag(
    controller: &mut AppController,
    state: &mut AppState,
    from: DVec2,
    to: DVec2,
    modifiers: Modifiers,
) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { pos: from, modifiers })
        .expect("PointerPressed");
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos: to, modifiers })
        .expect("PointerMoved");
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased");
}

fn assert_near(actual: DVec2, expected: DVec2) {
    assert!(
        actual.distance(expected) < 1e-9,
        "erwartet {expected:?}, erhalten {actual:?}"
    );
}

#[test]
fn test_handle_drag_mirrors_length_and_angle_by_default() {
    let (mut controller, mut state, middle) = three_anchor_state();

    drag(
        &mut controller,
        &mut state,
        DVec2::new(410.0, 300.0),
        DVec2::new(420.0, 300.0),
        Modifiers::NONE,
    );

    let (prev, next) = tangent_positions(&state, middle);
    assert_near(next, DVec2::new(420.0, 300.0));
    assert_near(prev, DVec2::new(420.0, 300.0));
    assert_eq!(state.graph.dragging(), None);
}

#[test]
fn test_handle_drag_with_shift_ctrl_mirrors_direction_only() {
    let (mut controller, mut state, middle) = three_anchor_state();
    let modifiers = Modifiers {
        shift: true,
        ctrl: true,
    };

    drag(
        &mut controller,
        &mut state,
        DVec2::new(410.0, 300.0),
        DVec2::new(400.0, 250.0),
        modifiers,
    );

    let (prev, next) = tangent_positions(&state, middle);
    assert_near(next, DVec2::new(400.0, 250.0));
    assert_near(prev, DVec2::new(400.0, 290.0));
}

#[test]
fn test_handle_drag_with_shift_leaves_partner() {
    let (mut controller, mut state, middle) = three_anchor_state();
    let shift = Modifiers {
        shift: true,
        ctrl: false,
    };

    drag(
        &mut controller,
        &mut state,
        DVec2::new(390.0, 300.0),
        DVec2::new(380.0, 340.0),
        shift,
    );

    let (prev, next) = tangent_positions(&state, middle);
    assert_near(prev, DVec2::new(380.0, 340.0));
    assert_near(next, DVec2::new(410.0, 300.0));
}

#[test]
fn test_anchor_drag_carries_handles_and_moves_curve() {
    let (mut controller, mut state, middle) = three_anchor_state();

    drag(
        &mut controller,
        &mut state,
        DVec2::new(400.0, 300.0),
        DVec2::new(420.0, 200.0),
        Modifiers::NONE,
    );

    let (prev, next) = tangent_positions(&state, middle);
    assert_near(prev, DVec2::new(410.0, 200.0));
    assert_near(next, DVec2::new(430.0, 200.0));
    // Gleich gewichtete Segmente: t = 0.5 liegt genau auf dem mittleren Anchor
    assert_near(state.graph.point_at(0.5), DVec2::new(420.0, 200.0));
}

#[test]
fn test_press_on_empty_canvas_starts_no_drag() {
    let (mut controller, mut state, _) = three_anchor_state();
    let before = state.graph.records();

    drag(
        &mut controller,
        &mut state,
        DVec2::new(250.0, 50.0),
        DVec2::new(260.0, 60.0),
        Modifiers::NONE,
    );

    assert_eq!(state.graph.records(), before);
}

#[test]
fn test_remove_anchor_request_shrinks_curve() {
    let (mut controller, mut state, middle) = three_anchor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorRemoveRequested {
                pos: DVec2::new(402.0, 301.0),
            },
        )
        .expect("AnchorRemoveRequested");

    assert_eq!(state.anchor_count(), 2);
    assert!(state.graph.anchor(middle).is_none());
    assert_eq!(state.graph.path_x().len(), 1);
    assert_eq!(state.graph.control_count(), 2);
}

#[test]
fn test_save_and_open_roundtrip() {
    let (mut controller, mut state, _) = three_anchor_state();
    drag(
        &mut controller,
        &mut state,
        DVec2::new(410.0, 300.0),
        DVec2::new(430.0, 260.0),
        Modifiers::NONE,
    );
    let path = std::env::temp_dir().join(format!(
        "curve_path_editor_roundtrip_{}.json",
        std::process::id()
    ));

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested { path: path.clone() })
        .expect("SaveRequested");
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path.as_path()));

    let mut reopened = AppState::new();
    controller
        .handle_intent(&mut reopened, AppIntent::OpenRequested { path: path.clone() })
        .expect("OpenRequested");

    assert_eq!(reopened.graph.records(), state.graph.records());
    assert_eq!(reopened.graph.path_x(), state.graph.path_x());
    assert_eq!(reopened.graph.path_y(), state.graph.path_y());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_open_missing_file_keeps_graph() {
    let (mut controller, mut state, _) = three_anchor_state();
    let path = std::env::temp_dir().join("curve_path_editor_does_not_exist.json");
    let _ = std::fs::remove_file(&path);

    let result = controller.handle_intent(&mut state, AppIntent::OpenRequested { path });

    assert!(result.is_err());
    assert_eq!(state.anchor_count(), 3);
}

#[test]
fn test_open_adopts_strength_mode_for_later_option_changes() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(EditorOptions {
        strength_enabled: true,
        ..EditorOptions::default()
    });
    for x in [100.0, 400.0, 700.0] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::AnchorAppendRequested {
                    pos: DVec2::new(x, 300.0),
                },
            )
            .expect("Anchor anhängen");
    }
    let middle = state.graph.anchor_ids().nth(1).expect("mittlerer Anchor");
    let handle = state
        .graph
        .anchor(middle)
        .and_then(|a| a.strength_control)
        .and_then(|c| state.graph.position(PointId::Control(c)))
        .expect("Stärke-Handle");
    drag(
        &mut controller,
        &mut state,
        handle,
        DVec2::new(400.0, 260.0),
        Modifiers::NONE,
    );
    assert!((state.graph.path_x().total_weight() - 3.0).abs() < 1e-9);

    let path = std::env::temp_dir().join(format!(
        "curve_path_editor_strength_{}.json",
        std::process::id()
    ));
    controller
        .handle_intent(&mut state, AppIntent::SaveRequested { path: path.clone() })
        .expect("SaveRequested");

    let mut reopened = AppState::new();
    controller
        .handle_intent(&mut reopened, AppIntent::OpenRequested { path: path.clone() })
        .expect("OpenRequested");
    assert!(reopened.options.strength_enabled);

    let options = reopened.options.clone();
    controller
        .handle_intent(&mut reopened, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged");

    assert_eq!(reopened.graph.control_count(), state.graph.control_count());
    assert_eq!(
        reopened.graph.path_x().total_weight(),
        state.graph.path_x().total_weight()
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_invalid_options_are_rejected_without_touching_graph() {
    let (mut controller, mut state, _) = three_anchor_state();
    let before = state.graph.records();
    let options = EditorOptions {
        strength_offset: 0.0,
        ..EditorOptions::default()
    };

    let result = controller.handle_intent(&mut state, AppIntent::OptionsChanged { options });

    assert!(result.is_err());
    assert_eq!(state.graph.records(), before);
    assert_eq!(state.options, EditorOptions::default());
}

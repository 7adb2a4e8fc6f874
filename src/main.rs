//! Curve Path Editor (headless).
//!
//! Lädt die Optionen, baut eine Demo-Kurve (oder öffnet ein Dokument),
//! simuliert einen Handle-Drag und ein paar Wiedergabe-Frames und gibt die
//! abgetasteten Punkte sowie die Wire-Sequenzen beider Achsen aus.

use std::path::PathBuf;

use curve_path_editor::{
    AppController, AppIntent, AppState, EditorOptions, Modifiers, PointId,
};
use glam::DVec2;

/// Frame-Dauer der simulierten Wiedergabe (60 Hz).
const FRAME_DELTA: f64 = 1.0 / 60.0;
/// Anzahl ausgegebener Stützstellen.
const SAMPLE_COUNT: usize = 10;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Curve Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => controller.handle_intent(&mut state, AppIntent::OpenRequested { path })?,
        None => build_demo(&mut controller, &mut state)?,
    }

    controller.handle_intent(&mut state, AppIntent::PlaybackToggled)?;
    let frames = (state.playback.duration / FRAME_DELTA).ceil() as usize;
    for frame in 0..frames {
        controller.handle_intent(&mut state, AppIntent::FrameTick { delta: FRAME_DELTA })?;
        if frame % 30 == 0 {
            let p = state.view.playback_point;
            log::info!("Frame {:>4}: ({:.2}, {:.2})", frame, p.x, p.y);
        }
    }

    println!("t\tx\ty");
    for i in 0..=SAMPLE_COUNT {
        let t = i as f64 / SAMPLE_COUNT as f64;
        let p = state.graph.point_at(t);
        println!("{:.2}\t{:.3}\t{:.3}", t, p.x, p.y);
    }
    if let Some(bounds) = state.graph.bounds() {
        println!(
            "bounds\t({:.3}, {:.3})\t({:.3}, {:.3})",
            bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
        );
    }
    println!("path_x\t{:?}", state.graph.path_x().to_wire());
    println!("path_y\t{:?}", state.graph.path_y().to_wire());

    log::info!(
        "{} Commands ausgeführt, {} Kurven-Neuaufbauten",
        state.command_log.len(),
        state.graph.rebuild_count()
    );
    Ok(())
}

/// Vier Anchors quer über den Canvas, danach ein gespiegelter Handle-Drag.
fn build_demo(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<()> {
    let w = state.options.canvas_width;
    let h = state.options.canvas_height;
    for (fx, fy) in [(0.1, 0.5), (0.35, 0.2), (0.65, 0.8), (0.9, 0.5)] {
        controller.handle_intent(
            state,
            AppIntent::AnchorAppendRequested {
                pos: DVec2::new(w * fx, h * fy),
            },
        )?;
    }

    // next_control des zweiten Anchors greifen und nach oben rechts ziehen
    let handle = state
        .graph
        .anchor_ids()
        .nth(1)
        .and_then(|id| state.graph.anchor(id))
        .and_then(|anchor| anchor.next_control)
        .and_then(|id| state.graph.position(PointId::Control(id)));
    if let Some(start) = handle {
        controller.handle_intent(
            state,
            AppIntent::PointerPressed {
                pos: start,
                modifiers: Modifiers::NONE,
            },
        )?;
        for step in 1..=10 {
            let pos = start + DVec2::new(6.0, -4.0) * step as f64;
            controller.handle_intent(
                state,
                AppIntent::PointerMoved {
                    pos,
                    modifiers: Modifiers::NONE,
                },
            )?;
        }
        controller.handle_intent(state, AppIntent::PointerReleased)?;
    }
    Ok(())
}

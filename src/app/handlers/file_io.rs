//! Handler für Datei-Operationen (Kurven-Dokument öffnen und speichern).

use std::path::PathBuf;

use glam::DVec2;

use crate::app::document::CurveDocument;
use crate::app::AppState;

/// Speichert den Graph als JSON-Dokument.
pub fn save(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    CurveDocument::from_graph(&state.graph).save(&path)?;
    state.ui.status_message = Some(format!("Gespeichert: {}", path.display()));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Lädt ein JSON-Dokument und ersetzt den aktuellen Graph.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let document = CurveDocument::load(&path)?;
    let visible = state.graph.controls_visible();
    state.graph = document
        .build_graph(state.options.to_graph_config())?
        .with_controls_visible(visible);
    // Canvas und Stärke-Modus folgen dem Dokument
    state.options.canvas_width = document.canvas_width;
    state.options.canvas_height = document.canvas_height;
    state.options.strength_enabled = document.strength_enabled;
    state.view.canvas_size = DVec2::new(document.canvas_width, document.canvas_height);
    state.playback.restart();
    state.refresh_playback_point();
    state.ui.status_message = Some(format!(
        "Geladen: {} ({} Anchors)",
        path.display(),
        state.graph.anchor_count()
    ));
    state.ui.current_file_path = Some(path);
    Ok(())
}

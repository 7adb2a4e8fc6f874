//! Handler für Canvas, Handle-Sichtbarkeit und Optionen.

use crate::app::AppState;
use crate::core::ControlPointGraph;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Setzt die Canvas-Größe; Anchors werden in den neuen Canvas geklemmt.
pub fn set_canvas_size(state: &mut AppState, width: f64, height: f64) -> anyhow::Result<()> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        anyhow::bail!("Ungültige Canvas-Größe: {} × {}", width, height);
    }
    state.graph.set_size(width, height)?;
    state.view.canvas_size = DVec2::new(width, height);
    state.refresh_playback_point();
    Ok(())
}

/// Schaltet die Handle-Sichtbarkeit um.
pub fn toggle_controls(state: &mut AppState) -> anyhow::Result<()> {
    state.graph.toggle_controls()?;
    Ok(())
}

/// Übernimmt neue Optionen und baut den Graph mit der neuen Geometrie neu auf.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    options.validate()?;
    let records = state.graph.records();
    let visible = state.graph.controls_visible();
    state.graph = ControlPointGraph::from_records(options.to_graph_config(), &records)?
        .with_controls_visible(visible);
    state.view.canvas_size = DVec2::new(options.canvas_width, options.canvas_height);
    state.playback.apply_options(&options);
    state.options = options;
    state.refresh_playback_point();
    log::info!("Optionen übernommen");
    Ok(())
}

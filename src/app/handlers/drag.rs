//! Handler für Pointer-Drags auf Anchors und Controls.

use glam::DVec2;

use crate::app::AppState;
use crate::core::{Modifiers, PointId};

/// Startet einen Drag auf dem gepickten Punkt.
pub fn begin(state: &mut AppState, target: PointId) -> anyhow::Result<()> {
    state.graph.begin_drag(target)?;
    Ok(())
}

/// Bewegt den gegriffenen Punkt (Spiegel-Modus aus den Modifiern).
pub fn move_to(state: &mut AppState, pos: DVec2, modifiers: Modifiers) -> anyhow::Result<()> {
    if state.graph.drag_to(pos, modifiers)? {
        state.refresh_playback_point();
    }
    Ok(())
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    state.graph.end_drag();
}

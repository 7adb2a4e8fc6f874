//! Handler für Topologie-Änderungen (Anchors anhängen, entfernen, leeren).

use glam::DVec2;

use crate::app::AppState;
use crate::core::AnchorId;

/// Hängt einen Anchor ans Kurvenende an.
pub fn append_anchor(state: &mut AppState, pos: DVec2) -> anyhow::Result<()> {
    state.graph.append_anchor(pos)?;
    state.refresh_playback_point();
    Ok(())
}

/// Entfernt einen Anchor samt Handles.
pub fn remove_anchor(state: &mut AppState, id: AnchorId) -> anyhow::Result<()> {
    state.graph.remove_anchor(id)?;
    state.refresh_playback_point();
    Ok(())
}

/// Entfernt alle Anchors.
pub fn clear(state: &mut AppState) -> anyhow::Result<()> {
    state.graph.clear()?;
    state.refresh_playback_point();
    log::info!("Kurve geleert");
    Ok(())
}

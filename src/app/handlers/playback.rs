//! Handler für die Wiedergabe.

use crate::app::AppState;
use crate::core::Easing;

/// Schreibt die Wiedergabe fort und berechnet den aktuellen Punkt.
pub fn advance(state: &mut AppState, delta: f64) {
    if state.playback.advance(delta) {
        state.refresh_playback_point();
    }
}

/// Startet bzw. pausiert die Wiedergabe.
pub fn toggle(state: &mut AppState) {
    state.playback.toggle();
    state.refresh_playback_point();
    log::info!(
        "Wiedergabe {}",
        if state.playback.playing {
            "gestartet"
        } else {
            "pausiert"
        }
    );
}

pub fn restart(state: &mut AppState) {
    state.playback.restart();
    state.refresh_playback_point();
}

/// Setzt das Zeit-Easing (auch in den Optionen).
pub fn set_easing(state: &mut AppState, easing: Easing) {
    state.playback.easing = easing;
    state.options.playback_easing = easing;
    state.refresh_playback_point();
}

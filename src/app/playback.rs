//! Zeitgesteuertes Abspielen der Kurve.

use glam::DVec2;

use crate::core::{ControlPointGraph, Easing};
use crate::shared::EditorOptions;

/// Wiedergabe-Zustand: verstrichene Zeit, Dauer und Zeit-Easing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Läuft die Wiedergabe gerade
    pub playing: bool,
    /// Verstrichene Zeit im aktuellen Durchlauf (Sekunden)
    pub elapsed: f64,
    /// Dauer eines Durchlaufs (Sekunden)
    pub duration: f64,
    /// Nach dem Ende von vorne beginnen
    pub looping: bool,
    /// Abbildung des Fortschritts auf die Kurvenzeit
    pub easing: Easing,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

impl PlaybackState {
    /// Erstellt einen gestoppten Zustand aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            playing: false,
            elapsed: 0.0,
            duration: options.playback_duration,
            looping: options.playback_looping,
            easing: options.playback_easing,
        }
    }

    /// Übernimmt Dauer, Looping und Easing; die verstrichene Zeit bleibt erhalten.
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.duration = options.playback_duration;
        self.looping = options.playback_looping;
        self.easing = options.playback_easing;
        if self.duration > 0.0 && self.elapsed > self.duration {
            self.elapsed = self.duration;
        }
    }

    /// Startet bzw. pausiert. Ein abgelaufener Durchlauf beginnt von vorne.
    pub fn toggle(&mut self) {
        if !self.playing && !self.looping && self.progress() >= 1.0 {
            self.elapsed = 0.0;
        }
        self.playing = !self.playing;
    }

    /// Springt an den Anfang, ohne den Abspielzustand zu ändern.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Verarbeitet einen Frame-Tick. Gibt `true` zurück, wenn sich die Zeit bewegt hat.
    pub fn advance(&mut self, delta: f64) -> bool {
        if !self.playing || !delta.is_finite() || delta <= 0.0 {
            return false;
        }
        if self.duration <= 0.0 {
            self.elapsed = 0.0;
            self.playing = self.looping;
            return true;
        }

        self.elapsed += delta;
        if self.elapsed >= self.duration {
            if self.looping {
                self.elapsed = self.elapsed.rem_euclid(self.duration);
            } else {
                self.elapsed = self.duration;
                self.playing = false;
                log::debug!("Wiedergabe beendet");
            }
        }
        true
    }

    /// Linearer Fortschritt in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Kurvenzeit nach Anwendung des Easings.
    pub fn curve_time(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    /// Aktueller Punkt auf der Kurve des Graphen.
    pub fn current_point(&self, graph: &ControlPointGraph) -> DVec2 {
        graph.point_at(self.curve_time())
    }
}

//! Application State: zentrale Datenhaltung.

use std::path::PathBuf;

use glam::DVec2;

use super::playback::PlaybackState;
use super::CommandLog;
use crate::core::{ControlPointGraph, PickIndex};
use crate::shared::EditorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe
    pub canvas_size: DVec2,
    /// Zuletzt berechneter Wiedergabe-Punkt
    pub playback_point: DVec2,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad des zuletzt geladenen oder gespeicherten Dokuments
    pub current_file_path: Option<PathBuf>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Anchor/Control-Graph inkl. abgeleiteter Kurven
    pub graph: ControlPointGraph,
    /// Wiedergabe-Zustand
    pub playback: PlaybackState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State aus geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let graph = ControlPointGraph::new(options.to_graph_config())
            .with_controls_visible(options.controls_visible);
        let view = ViewState {
            canvas_size: DVec2::new(options.canvas_width, options.canvas_height),
            playback_point: DVec2::ZERO,
        };
        Self {
            graph,
            playback: PlaybackState::from_options(&options),
            view,
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Pick-Index über alle aktuell greifbaren Punkte.
    pub fn pick_index(&self) -> PickIndex {
        PickIndex::from_graph(&self.graph)
    }

    /// Berechnet den Wiedergabe-Punkt nach einer Änderung neu.
    pub fn refresh_playback_point(&mut self) {
        self.view.playback_point = self.playback.current_point(&self.graph);
    }

    /// Gibt die Anzahl der Anchors zurück (für Anzeige)
    pub fn anchor_count(&self) -> usize {
        self.graph.anchor_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::PathBuf;

use glam::DVec2;

use crate::core::{AnchorId, Easing, Modifiers, PointId};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag auf einem Anchor oder Control starten
    BeginDrag { target: PointId },
    /// Gegriffenen Punkt bewegen
    DragTo { pos: DVec2, modifiers: Modifiers },
    /// Drag beenden
    EndDrag,
    /// Anchor am Kurvenende anhängen
    AppendAnchor { pos: DVec2 },
    /// Anchor samt Handles entfernen
    RemoveAnchor { id: AnchorId },
    /// Graph leeren
    ClearGraph,
    /// Handle-Sichtbarkeit umschalten
    ToggleControls,
    /// Canvas-Größe setzen
    SetCanvasSize { width: f64, height: f64 },
    /// Wiedergabe um `delta` Sekunden fortschreiben
    AdvancePlayback { delta: f64 },
    /// Wiedergabe starten/pausieren
    TogglePlayback,
    /// Wiedergabe zurücksetzen
    RestartPlayback,
    /// Zeit-Easing setzen
    SetPlaybackEasing { easing: Easing },
    /// Dokument speichern
    SaveDocument { path: PathBuf },
    /// Dokument laden
    LoadDocument { path: PathBuf },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}

use std::path::PathBuf;

use glam::DVec2;

use crate::core::{Easing, Modifiers};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer gedrückt (Canvas-Koordinaten + Modifier-Snapshot)
    PointerPressed { pos: DVec2, modifiers: Modifiers },
    /// Pointer bewegt
    PointerMoved { pos: DVec2, modifiers: Modifiers },
    /// Pointer losgelassen
    PointerReleased,
    /// Frame-Tick mit verstrichener Zeit in Sekunden
    FrameTick { delta: f64 },
    /// Editier-Canvas hat eine neue Größe
    CanvasResized { width: f64, height: f64 },
    /// Handles ein-/ausblenden
    ToggleControlsRequested,
    /// Anchor am Kurvenende anhängen
    AnchorAppendRequested { pos: DVec2 },
    /// Anchor unter dem Pointer entfernen
    AnchorRemoveRequested { pos: DVec2 },
    /// Alle Anchors entfernen
    ClearRequested,
    /// Wiedergabe starten/pausieren
    PlaybackToggled,
    /// Wiedergabe an den Anfang setzen
    PlaybackRestartRequested,
    /// Zeit-Easing der Wiedergabe wechseln
    PlaybackEasingChanged { easing: Easing },
    /// Kurve als JSON-Dokument speichern
    SaveRequested { path: PathBuf },
    /// Kurve aus JSON-Dokument laden
    OpenRequested { path: PathBuf },
    /// Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}

//! Zentrale Konfiguration für den Curve-Path-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::bounding_box::BoundingRect;
use crate::core::control_graph::{DEFAULT_HANDLE_OFFSET, DEFAULT_STRENGTH_OFFSET};
use crate::core::{Easing, GraphConfig};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Standard-Canvas-Höhe.
pub const CANVAS_HEIGHT: f64 = 600.0;

// ── Handles ─────────────────────────────────────────────────────────

/// Abstand neuer Tangenten-Handles zum Anchor.
pub const HANDLE_OFFSET: f64 = DEFAULT_HANDLE_OFFSET;
/// Abstand neuer Stärke-Handles über dem Anchor.
pub const STRENGTH_OFFSET: f64 = DEFAULT_STRENGTH_OFFSET;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Canvas-Einheiten.
pub const PICK_RADIUS: f64 = 8.0;

// ── Playback ────────────────────────────────────────────────────────

/// Dauer eines Durchlaufs in Sekunden.
pub const PLAYBACK_DURATION_S: f64 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Breite (Drag-Rechteck der Anchors)
    pub canvas_width: f64,
    /// Canvas-Höhe
    pub canvas_height: f64,

    // ── Handles ─────────────────────────────────────────────────
    /// Horizontaler Abstand neuer Tangenten-Handles
    pub handle_offset: f64,
    /// Vertikaler Abstand neuer Stärke-Handles (Teiler der Stärke)
    pub strength_offset: f64,
    /// Stärke-Handles anlegen und auswerten
    #[serde(default)]
    pub strength_enabled: bool,
    /// Handles beim Start sichtbar
    #[serde(default = "default_controls_visible")]
    pub controls_visible: bool,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Pointer-Down in Canvas-Einheiten
    pub pick_radius: f64,

    // ── Playback ────────────────────────────────────────────────
    /// Dauer eines Durchlaufs in Sekunden
    #[serde(default = "default_playback_duration")]
    pub playback_duration: f64,
    /// Durchlauf wiederholen
    #[serde(default = "default_playback_looping")]
    pub playback_looping: bool,
    /// Zeit-Easing des Durchlaufs
    #[serde(default)]
    pub playback_easing: Easing,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            handle_offset: HANDLE_OFFSET,
            strength_offset: STRENGTH_OFFSET,
            strength_enabled: false,
            controls_visible: true,

            pick_radius: PICK_RADIUS,

            playback_duration: PLAYBACK_DURATION_S,
            playback_looping: true,
            playback_easing: Easing::Linear,
        }
    }
}

/// Serde-Default für `controls_visible` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_controls_visible() -> bool {
    true
}

fn default_playback_duration() -> f64 {
    PLAYBACK_DURATION_S
}

fn default_playback_looping() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => match Self::validate(&opts) {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft Handle-Abstände, Canvas und Pick-Radius.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.to_graph_config().validate()?;
        if !(self.canvas_width.is_finite() && self.canvas_height.is_finite())
            || self.canvas_width < 0.0
            || self.canvas_height < 0.0
        {
            anyhow::bail!(
                "Ungültige Canvas-Größe: {} × {}",
                self.canvas_width,
                self.canvas_height
            );
        }
        if !self.pick_radius.is_finite() || self.pick_radius < 0.0 {
            anyhow::bail!("Ungültiger Pick-Radius: {}", self.pick_radius);
        }
        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_path_editor.toml")
    }

    /// Canvas als Rechteck ab Ursprung.
    pub fn canvas(&self) -> BoundingRect {
        BoundingRect::from_corners(
            DVec2::ZERO,
            DVec2::new(self.canvas_width, self.canvas_height),
        )
    }

    /// Geometrie-Einstellungen für einen neuen `ControlPointGraph`.
    pub fn to_graph_config(&self) -> GraphConfig {
        GraphConfig {
            handle_offset: self.handle_offset,
            strength_offset: self.strength_offset,
            strength_enabled: self.strength_enabled,
            canvas: self.canvas(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_graph_defaults() {
        let options = EditorOptions::default();
        let config = options.to_graph_config();
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let options = EditorOptions {
            strength_enabled: true,
            playback_easing: Easing::QuadInOut,
            ..EditorOptions::default()
        };
        let content = toml::to_string_pretty(&options).expect("TOML serialisieren");
        assert!(content.contains("playback_easing = \"quad_in_out\""));
        let back: EditorOptions = toml::from_str(&content).expect("TOML parsen");
        assert_eq!(back, options);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let content = "canvas_width = 400.0\ncanvas_height = 300.0\nhandle_offset = 5.0\n\
                       strength_offset = 20.0\npick_radius = 6.0\n";
        let options: EditorOptions = toml::from_str(content).expect("TOML parsen");
        assert!(options.controls_visible);
        assert!(options.playback_looping);
        assert_eq!(options.playback_duration, PLAYBACK_DURATION_S);
        assert_eq!(options.playback_easing, Easing::Linear);
        assert_eq!(options.to_graph_config().handle_offset, 5.0);
    }

    #[test]
    fn test_validate_rejects_non_positive_offsets() {
        assert!(EditorOptions::default().validate().is_ok());

        let zero_strength = EditorOptions {
            strength_offset: 0.0,
            ..EditorOptions::default()
        };
        let error = zero_strength.validate().expect_err("Teiler 0 muss abgelehnt werden");
        assert!(error.to_string().contains("strength_offset"));

        let nan_handle = EditorOptions {
            handle_offset: f64::NAN,
            ..EditorOptions::default()
        };
        assert!(nan_handle.validate().is_err());
    }

    #[test]
    fn test_load_invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "curve_path_editor_invalid_options_{}.toml",
            std::process::id()
        ));
        let content = "canvas_width = 400.0\ncanvas_height = 300.0\nhandle_offset = 5.0\n\
                       strength_offset = 0.0\npick_radius = 6.0\n";
        std::fs::write(&path, content).expect("Datei schreiben");

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("curve_path_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}

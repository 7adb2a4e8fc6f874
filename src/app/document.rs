//! JSON-Dokument einer Kurve: Canvas, Anchors mit Handles und die abgeleiteten Wire-Kurven.

use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::{
    AnchorRecord, BoundingRect, ControlPointGraph, CurveError, CurvePath, GraphConfig,
};

fn default_version() -> u32 {
    CurveDocument::VERSION
}

/// Persistierbarer Zustand eines `ControlPointGraph`.
///
/// `path_x`/`path_y` werden im flachen Wire-Format gespeichert und beim Laden
/// gegen den Neuaufbau aus den Anchors geprüft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub strength_enabled: bool,
    pub anchors: Vec<AnchorRecord>,
    pub path_x: CurvePath,
    pub path_y: CurvePath,
}

impl CurveDocument {
    pub const VERSION: u32 = 1;

    /// Momentaufnahme eines Graphen.
    pub fn from_graph(graph: &ControlPointGraph) -> Self {
        let canvas = graph.config().canvas.size();
        Self {
            version: Self::VERSION,
            canvas_width: canvas.x,
            canvas_height: canvas.y,
            strength_enabled: graph.config().strength_enabled,
            anchors: graph.records(),
            path_x: graph.path_x().clone(),
            path_y: graph.path_y().clone(),
        }
    }

    /// Baut den Graph neu auf; Canvas und Stärke-Modus kommen aus dem Dokument,
    /// Handle-Abstände aus `base`.
    pub fn build_graph(&self, base: GraphConfig) -> Result<ControlPointGraph, CurveError> {
        let config = GraphConfig {
            strength_enabled: self.strength_enabled,
            canvas: BoundingRect::from_corners(
                DVec2::ZERO,
                DVec2::new(self.canvas_width, self.canvas_height),
            ),
            ..base
        };
        let graph = ControlPointGraph::from_records(config, &self.anchors)?;
        if graph.path_x() != &self.path_x || graph.path_y() != &self.path_y {
            log::warn!("Gespeicherte Kurven weichen vom Neuaufbau ab, verwende Neuaufbau");
        }
        Ok(graph)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let document: Self =
            serde_json::from_str(content).context("Kurven-Dokument konnte nicht gelesen werden")?;
        if document.version > Self::VERSION {
            log::warn!(
                "Dokument-Version {} ist neuer als unterstützt ({})",
                document.version,
                Self::VERSION
            );
        }
        Ok(document)
    }

    /// Speichert das Dokument als JSON-Datei.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_json()?;
        std::fs::write(path, content)
            .with_context(|| format!("Speichern fehlgeschlagen: {}", path.display()))?;
        log::info!("Kurve gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Lädt ein Dokument aus einer JSON-Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
        let document = Self::from_json(&content)
            .with_context(|| format!("Ungültiges Kurven-Dokument: {}", path.display()))?;
        log::info!(
            "Kurve geladen aus: {} ({} Anchors)",
            path.display(),
            document.anchors.len()
        );
        Ok(document)
    }
}

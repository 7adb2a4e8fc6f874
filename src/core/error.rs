//! Fehlertypen der Kurven-Engine.

use thiserror::Error;

/// Fehler beim Aufbau, Dekodieren oder Editieren einer Kurve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Segment-Gewicht ist nicht positiv (oder nicht endlich).
    #[error("Segment-Gewicht muss positiv und endlich sein, erhalten: {weight}")]
    InvalidWeight {
        /// Übergebenes Gewicht
        weight: f64,
    },

    /// Wire-Sequenz enthält nicht einmal den Startwert.
    #[error("Leere Wire-Sequenz: Startwert fehlt")]
    EmptyWire,

    /// Segment-Tag außerhalb von {1, 2, 3}.
    #[error("Unbekannter Segment-Tag {tag} an Offset {offset}")]
    UnknownSegmentTag {
        /// Gelesener Tag-Wert
        tag: f64,
        /// Position des Tags in der Sequenz
        offset: usize,
    },

    /// Sequenz endet mitten in einem Segment.
    #[error("Wire-Sequenz abgeschnitten an Offset {offset}: {needed} Werte erwartet, {available} vorhanden")]
    TruncatedWire {
        /// Position des angefangenen Segments
        offset: usize,
        /// Anzahl benötigter Werte nach dem Tag
        needed: usize,
        /// Anzahl tatsächlich vorhandener Werte
        available: usize,
    },

    /// Anchor-Handle existiert nicht (mehr) im Graph.
    #[error("Anchor {0} existiert nicht")]
    UnknownAnchor(u64),

    /// Control-Handle existiert nicht (mehr) im Graph.
    #[error("Control {0} existiert nicht")]
    UnknownControl(u64),

    /// Geometrie-Einstellung ist nicht positiv (oder nicht endlich).
    #[error("Ungültige Einstellung {field}: {value}")]
    InvalidConfig {
        /// Name des Feldes
        field: &'static str,
        /// Übergebener Wert
        value: f64,
    },
}

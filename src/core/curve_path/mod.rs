//! Skalare Mehrsegment-Kurve mit gewichteter Aufteilung des Zeitbereichs.
//!
//! Jedes Segment belegt den Anteil `weight / total_weight` von `[0, 1]`,
//! unabhängig von seiner geometrischen Länge. Die Kurve ist ein abgeleiteter
//! Snapshot: sie wird nie direkt editiert, sondern vom `ControlPointGraph`
//! bei jeder Änderung komplett neu aufgebaut.

mod segment;
mod wire;


pub use segment::Segment;

use super::CurveError;
use serde::{Deserialize, Serialize};

/// Ordnete, gewichtete Segmente über einer skalaren Achse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CurvePath {
    start: f64,
    segments: Vec<Segment>,
    total_weight: f64,
}

impl Default for CurvePath {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl CurvePath {
    /// Erstellt eine konstante Kurve ohne Segmente.
    pub fn new(start: f64) -> Self {
        Self {
            start,
            segments: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Startwert der Kurve.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Alle Segmente in Reihenfolge.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Summe aller Segment-Gewichte.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Anzahl der Segmente.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` wenn die Kurve konstant ist (keine Segmente).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Endwert des letzten Segments (oder `start` bei leerer Kurve).
    pub fn end(&self) -> f64 {
        self.segments.last().map_or(self.start, Segment::end)
    }

    /// Startwert jedes Segments (= Endwert des Vorgängers).
    pub fn segment_starts(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(Segment::end))
    }

    /// Hängt ein lineares Segment an.
    pub fn append_linear(&mut self, end: f64, weight: f64) -> Result<(), CurveError> {
        self.append(Segment::Linear { end, weight })
    }

    /// Hängt ein quadratisches Bézier-Segment an.
    pub fn append_quadratic(
        &mut self,
        end: f64,
        weight: f64,
        control: f64,
    ) -> Result<(), CurveError> {
        self.append(Segment::Quadratic {
            end,
            weight,
            control,
        })
    }

    /// Hängt ein kubisches Bézier-Segment an.
    pub fn append_cubic(
        &mut self,
        end: f64,
        weight: f64,
        control1: f64,
        control2: f64,
    ) -> Result<(), CurveError> {
        self.append(Segment::Cubic {
            end,
            weight,
            control1,
            control2,
        })
    }

    /// Hängt ein fertiges Segment an. Nicht-positive Gewichte werden abgelehnt.
    pub fn append(&mut self, segment: Segment) -> Result<(), CurveError> {
        let weight = segment.weight();
        if !(weight.is_finite() && weight > 0.0) {
            return Err(CurveError::InvalidWeight { weight });
        }
        self.segments.push(segment);
        self.recompute_total_weight();
        Ok(())
    }

    /// Entfernt alle Segmente; `start` bleibt erhalten.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.recompute_total_weight();
    }

    fn recompute_total_weight(&mut self) {
        self.total_weight = self.segments.iter().map(Segment::weight).sum();
    }

    /// Evaluiert die Kurve bei normierter Zeit `t`.
    ///
    /// `t` wird nicht geklemmt: Werte außerhalb von `[0, 1]` extrapolieren das
    /// erste bzw. letzte Segment. Für geklemmte Auswertung siehe [`evaluate`].
    pub fn transform(&self, t: f64) -> f64 {
        match self.segments.as_slice() {
            [] => self.start,
            [only] => only.eval(self.start, t),
            segments => {
                let last_index = segments.len() - 1;
                let mut remainder = t * self.total_weight;
                let mut seg_start = self.start;
                for (index, segment) in segments.iter().enumerate() {
                    let weight = segment.weight();
                    // Letztes Segment nimmt auch t > 1 auf (Extrapolation)
                    if remainder <= weight || index == last_index {
                        return segment.eval(seg_start, remainder / weight);
                    }
                    remainder -= weight;
                    seg_start = segment.end();
                }
                self.end()
            }
        }
    }
}

/// Geklemmte Auswertung: `t` wird vor `transform` auf `[0, 1]` begrenzt.
///
/// NaN wird als 0 behandelt.
pub fn evaluate(path: &CurvePath, t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    path.transform(t)
}

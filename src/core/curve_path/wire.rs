//! Flaches Wire-Format: `[start, tag, end, weight, controls..., tag, ...]`.
//!
//! Tags: 1 = linear, 2 = quadratisch (1 Steuerwert), 3 = kubisch (2 Steuerwerte).
//! Unbekannte Tags brechen das Dekodieren mit Fehler ab, es wird nie still
//! abgeschnitten.

use super::{CurvePath, Segment};
use crate::core::CurveError;

impl CurvePath {
    /// Serialisiert die Kurve in die flache Zahlenfolge.
    pub fn to_wire(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(1 + self.segments.len() * 5);
        out.push(self.start);
        for segment in &self.segments {
            segment.write_wire(&mut out);
        }
        out
    }

    /// Baut eine Kurve aus der flachen Zahlenfolge wieder auf.
    pub fn from_wire(values: &[f64]) -> Result<Self, CurveError> {
        let (&start, _) = values.split_first().ok_or(CurveError::EmptyWire)?;
        let mut path = CurvePath::new(start);

        let mut offset = 1;
        while offset < values.len() {
            let raw_tag = values[offset];
            let unknown_tag = CurveError::UnknownSegmentTag {
                tag: raw_tag,
                offset,
            };
            let tag = wire_tag(raw_tag).ok_or_else(|| unknown_tag.clone())?;
            let control_count = Segment::control_count(tag).ok_or_else(|| unknown_tag.clone())?;

            let needed = 2 + control_count;
            let body = values
                .get(offset + 1..offset + 1 + needed)
                .ok_or(CurveError::TruncatedWire {
                    offset,
                    needed,
                    available: values.len() - offset - 1,
                })?;

            let segment = match (tag, body) {
                (Segment::TAG_LINEAR, &[end, weight]) => Segment::Linear { end, weight },
                (Segment::TAG_QUADRATIC, &[end, weight, control]) => Segment::Quadratic {
                    end,
                    weight,
                    control,
                },
                (Segment::TAG_CUBIC, &[end, weight, control1, control2]) => Segment::Cubic {
                    end,
                    weight,
                    control1,
                    control2,
                },
                _ => return Err(unknown_tag),
            };
            path.append(segment)?;
            offset += 1 + needed;
        }

        log::debug!(
            "CurvePath dekodiert: {} Segmente, Gesamtgewicht {:.3}",
            path.len(),
            path.total_weight()
        );
        Ok(path)
    }
}

/// Tag nur akzeptieren, wenn er exakt ganzzahlig in {1, 2, 3} liegt.
fn wire_tag(raw: f64) -> Option<u8> {
    if raw.fract() != 0.0 || !(1.0..=3.0).contains(&raw) {
        return None;
    }
    Some(raw as u8)
}

impl From<CurvePath> for Vec<f64> {
    fn from(path: CurvePath) -> Self {
        path.to_wire()
    }
}

impl TryFrom<Vec<f64>> for CurvePath {
    type Error = CurveError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        CurvePath::from_wire(&values)
    }
}

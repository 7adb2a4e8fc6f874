//! Segment-Varianten einer `CurvePath` (linear, quadratisch, kubisch).

/// Ein Segment einer skalaren Mehrsegment-Kurve.
///
/// Der Startwert gehört nicht zum Segment, sondern ist der Endwert des
/// vorherigen Segments (bzw. `CurvePath::start`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Gerade Interpolation zum Endwert
    Linear { end: f64, weight: f64 },
    /// Bézier 2. Grades mit einem Steuerwert
    Quadratic { end: f64, weight: f64, control: f64 },
    /// Bézier 3. Grades mit zwei Steuerwerten
    Cubic {
        end: f64,
        weight: f64,
        control1: f64,
        control2: f64,
    },
}

impl Segment {
    /// Wire-Tag für lineare Segmente.
    pub const TAG_LINEAR: u8 = 1;
    /// Wire-Tag für quadratische Segmente.
    pub const TAG_QUADRATIC: u8 = 2;
    /// Wire-Tag für kubische Segmente.
    pub const TAG_CUBIC: u8 = 3;

    /// Endwert des Segments.
    pub fn end(&self) -> f64 {
        match *self {
            Segment::Linear { end, .. }
            | Segment::Quadratic { end, .. }
            | Segment::Cubic { end, .. } => end,
        }
    }

    /// Anteil am normierten Zeitbereich (relativ zum Gesamtgewicht).
    pub fn weight(&self) -> f64 {
        match *self {
            Segment::Linear { weight, .. }
            | Segment::Quadratic { weight, .. }
            | Segment::Cubic { weight, .. } => weight,
        }
    }

    /// Wire-Tag dieser Variante.
    pub fn tag(&self) -> u8 {
        match self {
            Segment::Linear { .. } => Self::TAG_LINEAR,
            Segment::Quadratic { .. } => Self::TAG_QUADRATIC,
            Segment::Cubic { .. } => Self::TAG_CUBIC,
        }
    }

    /// Anzahl der Steuerwerte nach `end, weight` im Wire-Format.
    pub fn control_count(tag: u8) -> Option<usize> {
        match tag {
            Self::TAG_LINEAR => Some(0),
            Self::TAG_QUADRATIC => Some(1),
            Self::TAG_CUBIC => Some(2),
            _ => None,
        }
    }

    /// Evaluiert das Segment bei lokalem `ratio` ∈ [0, 1] ab `start`.
    ///
    /// Bernstein-Form, damit `ratio = 0` exakt `start` und `ratio = 1`
    /// exakt `end` liefert.
    pub fn eval(&self, start: f64, ratio: f64) -> f64 {
        let inv = 1.0 - ratio;
        match *self {
            Segment::Linear { end, .. } => inv * start + ratio * end,
            Segment::Quadratic { end, control, .. } => {
                inv * inv * start + 2.0 * inv * ratio * control + ratio * ratio * end
            }
            Segment::Cubic {
                end,
                control1,
                control2,
                ..
            } => {
                let inv2 = inv * inv;
                let r2 = ratio * ratio;
                inv2 * inv * start
                    + 3.0 * inv2 * ratio * control1
                    + 3.0 * inv * r2 * control2
                    + r2 * ratio * end
            }
        }
    }

    /// Steuerwerte in kubischer Form (Grad-Erhöhung für Linear/Quadratisch).
    pub fn cubic_controls(&self, start: f64) -> (f64, f64) {
        match *self {
            Segment::Linear { end, .. } => {
                (start + (end - start) / 3.0, end - (end - start) / 3.0)
            }
            Segment::Quadratic { end, control, .. } => (
                start + 2.0 / 3.0 * (control - start),
                end + 2.0 / 3.0 * (control - end),
            ),
            Segment::Cubic {
                control1, control2, ..
            } => (control1, control2),
        }
    }

    /// Hängt `tag, end, weight, controls...` an eine Wire-Sequenz an.
    pub(crate) fn write_wire(&self, out: &mut Vec<f64>) {
        out.push(f64::from(self.tag()));
        out.push(self.end());
        out.push(self.weight());
        match *self {
            Segment::Linear { .. } => {}
            Segment::Quadratic { control, .. } => out.push(control),
            Segment::Cubic {
                control1, control2, ..
            } => {
                out.push(control1);
                out.push(control2);
            }
        }
    }
}

//! Exakte achsenparallele Bounding-Box kubischer Bézier-Segmente.
//!
//! Pro Achse werden die Nullstellen der Ableitung (quadratisch) im offenen
//! Intervall (0, 1) gesucht. Die Endpunkte t = 0 und t = 1 werden immer
//! explizit mit ausgewertet.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Toleranz für entartete Koeffizienten und Diskriminante.
pub const ROOT_EPSILON: f64 = 1e-12;

/// Achsenparalleles Rechteck (min/max inklusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    /// Linke obere Ecke (kleinste Koordinaten)
    pub min: DVec2,
    /// Rechte untere Ecke (größte Koordinaten)
    pub max: DVec2,
}

impl BoundingRect {
    /// Rechteck, das genau einen Punkt enthält.
    pub fn from_point(point: DVec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Rechteck aus zwei beliebigen Ecken.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Erweitert das Rechteck um einen Punkt.
    pub fn include(&mut self, point: DVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Vereinigung zweier Rechtecke.
    pub fn union(&self, other: &BoundingRect) -> BoundingRect {
        BoundingRect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Breite und Höhe.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Begrenzt einen Punkt auf das Rechteck.
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        point.clamp(self.min, self.max)
    }

    /// Prüft, ob ein Punkt im Rechteck liegt (Rand inklusive).
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Bounding-Box des kubischen Bézier-Segments `p0..p3`.
pub fn bounding_box(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> BoundingRect {
    let mut rect = BoundingRect::from_corners(p0, p3);

    let roots_x = derivative_roots(p0.x, p1.x, p2.x, p3.x);
    let roots_y = derivative_roots(p0.y, p1.y, p2.y, p3.y);
    for t in roots_x.iter().chain(roots_y.iter()) {
        rect.include(cubic_bezier(p0, p1, p2, p3, *t));
    }
    rect
}

/// Nullstellen von B'(t) einer Achse, nur echt innerhalb von (0, 1).
///
/// B'(t)/3 = a·t² + b·t + c mit
/// a = -p0 + 3p1 - 3p2 + p3, b = 2(p0 - 2p1 + p2), c = p1 - p0.
pub fn derivative_roots(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;

    let mut roots = Vec::with_capacity(2);
    let mut keep_interior = |t: f64| {
        if t > 0.0 && t < 1.0 {
            roots.push(t);
        }
    };

    if a.abs() < ROOT_EPSILON {
        // Entartet zu linear
        if b.abs() >= ROOT_EPSILON {
            keep_interior(-c / b);
        }
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant.abs() < ROOT_EPSILON {
        keep_interior(-b / (2.0 * a));
    } else if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        keep_interior((-b + sqrt_d) / (2.0 * a));
        keep_interior((-b - sqrt_d) / (2.0 * a));
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn collinear_segment_spans_its_endpoints() {
        let rect = bounding_box(
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(7.0, 7.0),
            DVec2::new(10.0, 10.0),
        );
        assert_eq!(rect.min, DVec2::new(0.0, 0.0));
        assert_eq!(rect.max, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn arch_includes_interior_maximum() {
        // Symmetrischer Bogen: Scheitel bei t = 0.5, y = 0.75·10
        let rect = bounding_box(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(10.0, 0.0),
        );
        assert_abs_diff_eq!(rect.min.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.max.x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.min.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.max.y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn s_curve_has_two_extrema_on_one_axis() {
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(0.0, 20.0);
        let p2 = DVec2::new(10.0, -20.0);
        let p3 = DVec2::new(10.0, 0.0);

        let roots = derivative_roots(p0.y, p1.y, p2.y, p3.y);
        assert_eq!(roots.len(), 2);

        let rect = bounding_box(p0, p1, p2, p3);
        // Dichte Abtastung darf nie außerhalb liegen und muss die Box fast erreichen
        let mut sampled = BoundingRect::from_point(p0);
        for i in 0..=10_000 {
            let p = cubic_bezier(p0, p1, p2, p3, i as f64 / 10_000.0);
            assert!(p.x >= rect.min.x - 1e-9 && p.x <= rect.max.x + 1e-9);
            assert!(p.y >= rect.min.y - 1e-9 && p.y <= rect.max.y + 1e-9);
            sampled.include(p);
        }
        assert_abs_diff_eq!(sampled.max.y, rect.max.y, epsilon = 1e-6);
        assert_abs_diff_eq!(sampled.min.y, rect.min.y, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_leading_coefficient_uses_linear_root() {
        // a = 0: p0 - 3p1 + 3p2 - p3 = 0 bei Quadratic-in-Cubic-Form
        let roots = derivative_roots(0.0, 10.0, 10.0, 0.0);
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn roots_outside_unit_interval_are_dropped() {
        // Monoton steigend, Extremum läge außerhalb
        assert!(derivative_roots(0.0, 5.0, 8.0, 9.0).is_empty());
        // Konstante Achse: keine Nullstellen (b = 0)
        assert!(derivative_roots(3.0, 3.0, 3.0, 3.0).is_empty());
    }

    #[test]
    fn boundary_extremum_comes_from_endpoint() {
        // Extremum genau bei t = 0 wird durch strikte Ungleichung verworfen,
        // die Box enthält den Endpunkt trotzdem
        let rect = bounding_box(
            DVec2::new(5.0, 0.0),
            DVec2::new(5.0, 4.0),
            DVec2::new(8.0, 8.0),
            DVec2::new(12.0, 9.0),
        );
        assert_eq!(rect.min, DVec2::new(5.0, 0.0));
        assert_eq!(rect.max.x, 12.0);
    }

    #[test]
    fn rect_helpers() {
        let mut rect = BoundingRect::from_point(DVec2::new(1.0, 1.0));
        rect.include(DVec2::new(-2.0, 4.0));
        assert_eq!(rect.size(), DVec2::new(3.0, 3.0));
        assert!(rect.contains(DVec2::new(0.0, 2.0)));
        assert_eq!(rect.clamp(DVec2::new(9.0, -9.0)), DVec2::new(1.0, 1.0));
    }
}

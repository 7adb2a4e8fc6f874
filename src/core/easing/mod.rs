//! Easing-Funktionen `[0, 1] → [0, 1]` und Kombinatoren.
//!
//! Familien: sine, quad, cubic, quint, expo, circ, bounce, back, elastic, jeweils
//! mit In/Out/InOut/OutIn. Alle außer der `warp_*`-Familie erfüllen
//! `f(0) = 0` und `f(1) = 1`.
//!
//! Die `warp_*`-Familie ist absichtlich unstetig und springt zwischen 0, 0.5 und 1.

mod combinators;
mod kind;


pub use combinators::{connect, crossfade, mix, reverse, yoyo};
pub use kind::Easing;

use std::f64::consts::PI;

/// Signatur einer einfachen Easing-Funktion.
pub type EaseFn = fn(f64) -> f64;

/// Standard-Overshoot der Back-Familie.
pub const BACK_OVERSHOOT: f64 = 1.70158;
/// Skalierung des Overshoots für `back_in_out`.
const BACK_IN_OUT_SCALE: f64 = 1.525;
/// Standard-Amplitude der Elastic-Familie.
pub const ELASTIC_AMPLITUDE: f64 = 1.0;
/// Standard-Periode der Elastic-Familie.
pub const ELASTIC_PERIOD: f64 = 0.3;
/// Standard-Abbruchgenauigkeit für [`cubic_bezier`].
pub const CUBIC_BEZIER_RESOLUTION: f64 = 1e-3;
/// Obergrenze der Bisektionsschritte in [`cubic_bezier`].
pub const CUBIC_BEZIER_MAX_STEPS: u32 = 64;

// ── Aufbau-Helfer ───────────────────────────────────────────────────

/// InOut aus einer In-Funktion: erste Hälfte In, zweite Hälfte gespiegelt.
#[inline]
fn in_out_from(t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        ease_in(2.0 * t) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t) / 2.0
    }
}

/// OutIn: erste Hälfte Out auf [0, 0.5], zweite Hälfte In auf [0.5, 1].
#[inline]
fn out_in_from(t: f64, ease_out: impl Fn(f64) -> f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        ease_out(2.0 * t) / 2.0
    } else {
        0.5 + ease_in(2.0 * t - 1.0) / 2.0
    }
}

/// Identität.
pub fn linear(t: f64) -> f64 {
    t
}

// ── Sine ────────────────────────────────────────────────────────────

pub fn sine_in(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

pub fn sine_out(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

pub fn sine_in_out(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

pub fn sine_out_in(t: f64) -> f64 {
    out_in_from(t, sine_out, sine_in)
}

// ── Quad ────────────────────────────────────────────────────────────

pub fn quad_in(t: f64) -> f64 {
    t * t
}

pub fn quad_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn quad_in_out(t: f64) -> f64 {
    in_out_from(t, quad_in)
}

pub fn quad_out_in(t: f64) -> f64 {
    out_in_from(t, quad_out, quad_in)
}

// ── Cubic ───────────────────────────────────────────────────────────

pub fn cubic_in(t: f64) -> f64 {
    t * t * t
}

pub fn cubic_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

pub fn cubic_in_out(t: f64) -> f64 {
    in_out_from(t, cubic_in)
}

pub fn cubic_out_in(t: f64) -> f64 {
    out_in_from(t, cubic_out, cubic_in)
}

// ── Quint ───────────────────────────────────────────────────────────

pub fn quint_in(t: f64) -> f64 {
    t.powi(5)
}

pub fn quint_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

pub fn quint_in_out(t: f64) -> f64 {
    in_out_from(t, quint_in)
}

pub fn quint_out_in(t: f64) -> f64 {
    out_in_from(t, quint_out, quint_in)
}

// ── Exponential ─────────────────────────────────────────────────────

/// 2^(10(t-1)), an t = 0 auf exakt 0 gesetzt.
pub fn expo_in(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * t - 10.0)
    }
}

/// 1 - 2^(-10t), an t = 1 auf exakt 1 gesetzt.
pub fn expo_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

pub fn expo_in_out(t: f64) -> f64 {
    in_out_from(t, expo_in)
}

pub fn expo_out_in(t: f64) -> f64 {
    out_in_from(t, expo_out, expo_in)
}

// ── Circular ────────────────────────────────────────────────────────

pub fn circ_in(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

pub fn circ_out(t: f64) -> f64 {
    let inv = t - 1.0;
    (1.0 - inv * inv).max(0.0).sqrt()
}

pub fn circ_in_out(t: f64) -> f64 {
    in_out_from(t, circ_in)
}

pub fn circ_out_in(t: f64) -> f64 {
    out_in_from(t, circ_out, circ_in)
}

// ── Bounce ──────────────────────────────────────────────────────────

pub fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

pub fn bounce_in(t: f64) -> f64 {
    1.0 - bounce_out(1.0 - t)
}

pub fn bounce_in_out(t: f64) -> f64 {
    in_out_from(t, bounce_in)
}

pub fn bounce_out_in(t: f64) -> f64 {
    out_in_from(t, bounce_out, bounce_in)
}

// ── Back ────────────────────────────────────────────────────────────

/// Back-In mit frei wählbarem Overshoot.
pub fn back_in_with(t: f64, overshoot: f64) -> f64 {
    t * t * ((overshoot + 1.0) * t - overshoot)
}

/// Back-Out mit frei wählbarem Overshoot.
pub fn back_out_with(t: f64, overshoot: f64) -> f64 {
    1.0 - back_in_with(1.0 - t, overshoot)
}

/// Back-InOut; der Overshoot wird wie üblich um 1.525 skaliert.
pub fn back_in_out_with(t: f64, overshoot: f64) -> f64 {
    let s = overshoot * BACK_IN_OUT_SCALE;
    in_out_from(t, |u| back_in_with(u, s))
}

pub fn back_out_in_with(t: f64, overshoot: f64) -> f64 {
    out_in_from(
        t,
        |u| back_out_with(u, overshoot),
        |u| back_in_with(u, overshoot),
    )
}

pub fn back_in(t: f64) -> f64 {
    back_in_with(t, BACK_OVERSHOOT)
}

pub fn back_out(t: f64) -> f64 {
    back_out_with(t, BACK_OVERSHOOT)
}

pub fn back_in_out(t: f64) -> f64 {
    back_in_out_with(t, BACK_OVERSHOOT)
}

pub fn back_out_in(t: f64) -> f64 {
    back_out_in_with(t, BACK_OVERSHOOT)
}

// ── Elastic ─────────────────────────────────────────────────────────

/// Elastic-In mit Amplitude und Periode.
///
/// Amplituden unter 1 werden auf 1 angehoben (Phasenverschiebung `period / 4`).
pub fn elastic_in_with(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let (amplitude, shift) = elastic_shape(amplitude, period);
    let u = t - 1.0;
    -(amplitude * 2f64.powf(10.0 * u) * ((u - shift) * 2.0 * PI / period).sin())
}

/// Elastic-Out mit Amplitude und Periode.
pub fn elastic_out_with(t: f64, amplitude: f64, period: f64) -> f64 {
    1.0 - elastic_in_with(1.0 - t, amplitude, period)
}

pub fn elastic_in_out_with(t: f64, amplitude: f64, period: f64) -> f64 {
    in_out_from(t, |u| elastic_in_with(u, amplitude, period))
}

pub fn elastic_out_in_with(t: f64, amplitude: f64, period: f64) -> f64 {
    out_in_from(
        t,
        |u| elastic_out_with(u, amplitude, period),
        |u| elastic_in_with(u, amplitude, period),
    )
}

fn elastic_shape(amplitude: f64, period: f64) -> (f64, f64) {
    if amplitude < 1.0 {
        (1.0, period / 4.0)
    } else {
        (amplitude, period / (2.0 * PI) * (1.0 / amplitude).asin())
    }
}

pub fn elastic_in(t: f64) -> f64 {
    elastic_in_with(t, ELASTIC_AMPLITUDE, ELASTIC_PERIOD)
}

pub fn elastic_out(t: f64) -> f64 {
    elastic_out_with(t, ELASTIC_AMPLITUDE, ELASTIC_PERIOD)
}

pub fn elastic_in_out(t: f64) -> f64 {
    elastic_in_out_with(t, ELASTIC_AMPLITUDE, ELASTIC_PERIOD)
}

pub fn elastic_out_in(t: f64) -> f64 {
    elastic_out_in_with(t, ELASTIC_AMPLITUDE, ELASTIC_PERIOD)
}

// ── Warp (Stufen) ───────────────────────────────────────────────────

/// Bleibt bei 0 bis zum Ende, springt erst bei t = 1 auf 1.
pub fn warp_in(t: f64) -> f64 {
    if t < 1.0 {
        0.0
    } else {
        1.0
    }
}

/// Springt sofort nach t = 0 auf 1.
pub fn warp_out(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Springt in der Mitte von 0 auf 1.
pub fn warp_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.0
    } else {
        1.0
    }
}

/// 0 bei t = 0, 0.5 im Inneren, 1 bei t = 1.
pub fn warp_out_in(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t < 1.0 {
        0.5
    } else {
        1.0
    }
}

// ── Parametrische Cubic-Bezier-Timing-Kurve ─────────────────────────

/// Cubic-Bezier-Timing-Funktion mit Standard-Auflösung.
///
/// Kontrollpunkte (0,0), (a,b), (c,d), (1,1): `x` läuft über `(a, c)`,
/// `y` über `(b, d)`.
pub fn cubic_bezier(t: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    cubic_bezier_with_resolution(t, a, b, c, d, CUBIC_BEZIER_RESOLUTION)
}

/// Sucht per Bisektion den Parameter `m` mit `|t - x(m)| < resolution`
/// und liefert `y(m)`. Nach [`CUBIC_BEZIER_MAX_STEPS`] Schritten wird
/// der beste bisherige Parameter verwendet.
pub fn cubic_bezier_with_resolution(
    t: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    resolution: f64,
) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut low = 0.0;
    let mut high = 1.0;
    let mut m = 0.5;
    for _ in 0..CUBIC_BEZIER_MAX_STEPS {
        m = (low + high) / 2.0;
        let x = bezier_unit(m, a, c);
        if (t - x).abs() < resolution {
            break;
        }
        if x < t {
            low = m;
        } else {
            high = m;
        }
    }
    bezier_unit(m, b, d)
}

/// Bernstein-Kubik mit festen Endpunkten 0 und 1.
#[inline]
fn bezier_unit(m: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - m;
    3.0 * inv * inv * m * p1 + 3.0 * inv * m * m * p2 + m * m * m
}

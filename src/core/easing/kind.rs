//! Benannte Easing-Varianten (z.B. für die Playback-Konfiguration).

use super::*;
use serde::{Deserialize, Serialize};

/// Alle verfügbaren Easing-Kurven als auswählbarer Wert.
///
/// Back und Elastic verwenden hier die Standard-Parameter
/// ([`BACK_OVERSHOOT`], [`ELASTIC_AMPLITUDE`], [`ELASTIC_PERIOD`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    SineOutIn,
    QuadIn,
    QuadOut,
    QuadInOut,
    QuadOutIn,
    CubicIn,
    CubicOut,
    CubicInOut,
    CubicOutIn,
    QuintIn,
    QuintOut,
    QuintInOut,
    QuintOutIn,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    ExpoOutIn,
    CircIn,
    CircOut,
    CircInOut,
    CircOutIn,
    BounceIn,
    BounceOut,
    BounceInOut,
    BounceOutIn,
    BackIn,
    BackOut,
    BackInOut,
    BackOutIn,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    ElasticOutIn,
    WarpIn,
    WarpOut,
    WarpInOut,
    WarpOutIn,
    /// Parametrische Timing-Kurve wie CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Alle parameterlosen Varianten.
    pub const ALL: [Easing; 41] = [
        Easing::Linear,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::SineOutIn,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::QuadOutIn,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::CubicOutIn,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::QuintOutIn,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::ExpoOutIn,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::CircOutIn,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
        Easing::BounceOutIn,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BackOutIn,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::ElasticOutIn,
        Easing::WarpIn,
        Easing::WarpOut,
        Easing::WarpInOut,
        Easing::WarpOutIn,
    ];

    /// `false` für die unstetige Warp-Familie.
    pub fn is_continuous(&self) -> bool {
        !matches!(
            self,
            Easing::WarpIn | Easing::WarpOut | Easing::WarpInOut | Easing::WarpOutIn
        )
    }

    /// Wertet die Kurve bei `t` aus.
    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(t, x1, y1, x2, y2),
            other => other.function().map_or(t, |f| f(t)),
        }
    }

    /// Zugehörige Funktion als `fn`-Zeiger (`None` für parametrische Varianten).
    pub fn function(&self) -> Option<EaseFn> {
        let f: EaseFn = match self {
            Easing::Linear => linear,
            Easing::SineIn => sine_in,
            Easing::SineOut => sine_out,
            Easing::SineInOut => sine_in_out,
            Easing::SineOutIn => sine_out_in,
            Easing::QuadIn => quad_in,
            Easing::QuadOut => quad_out,
            Easing::QuadInOut => quad_in_out,
            Easing::QuadOutIn => quad_out_in,
            Easing::CubicIn => cubic_in,
            Easing::CubicOut => cubic_out,
            Easing::CubicInOut => cubic_in_out,
            Easing::CubicOutIn => cubic_out_in,
            Easing::QuintIn => quint_in,
            Easing::QuintOut => quint_out,
            Easing::QuintInOut => quint_in_out,
            Easing::QuintOutIn => quint_out_in,
            Easing::ExpoIn => expo_in,
            Easing::ExpoOut => expo_out,
            Easing::ExpoInOut => expo_in_out,
            Easing::ExpoOutIn => expo_out_in,
            Easing::CircIn => circ_in,
            Easing::CircOut => circ_out,
            Easing::CircInOut => circ_in_out,
            Easing::CircOutIn => circ_out_in,
            Easing::BounceIn => bounce_in,
            Easing::BounceOut => bounce_out,
            Easing::BounceInOut => bounce_in_out,
            Easing::BounceOutIn => bounce_out_in,
            Easing::BackIn => back_in,
            Easing::BackOut => back_out,
            Easing::BackInOut => back_in_out,
            Easing::BackOutIn => back_out_in,
            Easing::ElasticIn => elastic_in,
            Easing::ElasticOut => elastic_out,
            Easing::ElasticInOut => elastic_in_out,
            Easing::ElasticOutIn => elastic_out_in,
            Easing::WarpIn => warp_in,
            Easing::WarpOut => warp_out,
            Easing::WarpInOut => warp_in_out,
            Easing::WarpOutIn => warp_out_in,
            Easing::CubicBezier { .. } => return None,
        };
        Some(f)
    }
}

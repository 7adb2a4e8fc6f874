//! Kombinatoren, die Easing-Funktionen als Werte entgegennehmen.

/// Lineare Mischung zweier Easings: `(1 - w)·e1(t) + w·e2(t)`.
pub fn mix(t: f64, e1: impl Fn(f64) -> f64, e2: impl Fn(f64) -> f64, weight: f64) -> f64 {
    e1(t) * (1.0 - weight) + e2(t) * weight
}

/// Wie [`mix`], das Mischgewicht folgt aber selbst einer Easing-Kurve und wird
/// auf `[weight_start, weight_end]` abgebildet.
pub fn crossfade(
    t: f64,
    e1: impl Fn(f64) -> f64,
    e2: impl Fn(f64) -> f64,
    weight_curve: impl Fn(f64) -> f64,
    weight_start: f64,
    weight_end: f64,
) -> f64 {
    let weight = weight_start + (weight_end - weight_start) * weight_curve(t);
    mix(t, e1, e2, weight)
}

/// Teilt `[0, 1]` bei `switch_time`: erster Teil läuft `e1` auf `[0, switch_value]`,
/// zweiter Teil `e2` auf `[switch_value, 1]`. Beide Teilbereiche werden
/// unabhängig auf `[0, 1]` renormiert.
pub fn connect(
    t: f64,
    e1: impl Fn(f64) -> f64,
    e2: impl Fn(f64) -> f64,
    switch_time: f64,
    switch_value: f64,
) -> f64 {
    if t < switch_time {
        switch_value * e1(t / switch_time)
    } else if switch_time >= 1.0 {
        switch_value
    } else {
        let local = (t - switch_time) / (1.0 - switch_time);
        switch_value + (1.0 - switch_value) * e2(local)
    }
}

/// Erste Hälfte spielt `e` vorwärts, zweite Hälfte rückwärts.
pub fn yoyo(t: f64, e: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        e(2.0 * t)
    } else {
        e(2.0 - 2.0 * t)
    }
}

/// Erste Hälfte spielt `e`, zweite Hälfte liefert `1 - e(...)`.
pub fn reverse(t: f64, e: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        e(2.0 * t)
    } else {
        1.0 - e(2.0 * t - 1.0)
    }
}

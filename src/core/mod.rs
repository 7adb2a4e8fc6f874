//! Core-Domänentypen: Kurven, Easing, Control-Graph, Bounding-Box, Pick-Index.

pub mod bounding_box;
pub mod control_graph;
/// Skalare, gewichtete Mehrsegment-Kurven
///
/// - CurvePath: Startwert + geordnete Segmente
/// - Segment: Linear, Quadratic oder Cubic mit Gewicht
/// - Wire-Format: flaches `f64`-Array für Austausch und Persistenz
pub mod curve_path;
pub mod easing;
pub mod error;
pub mod spatial;

pub use bounding_box::{bounding_box, derivative_roots, BoundingRect};
pub use control_graph::{
    Anchor, AnchorId, AnchorRecord, Control, ControlId, ControlPointGraph, ControlRole,
    GraphConfig, MirrorMode, Modifiers, PointId,
};
pub use curve_path::{evaluate, CurvePath, Segment};
pub use easing::Easing;
pub use error::CurveError;
pub use spatial::{PickIndex, PickMatch};

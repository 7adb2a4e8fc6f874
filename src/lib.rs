//! Curve Path Editor Library.
//! Gewichtete Mehrsegment-Kurven, Easing-Bibliothek und Control-Point-Editing
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveDocument, PlaybackState, UiState,
    ViewState,
};
pub use core::{
    bounding_box, evaluate, AnchorId, AnchorRecord, BoundingRect, ControlId, ControlPointGraph,
    CurveError, CurvePath, Easing, GraphConfig, MirrorMode, Modifiers, PickIndex, PointId,
    Segment,
};
pub use shared::EditorOptions;

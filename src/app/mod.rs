//! Application-Layer: Controller, State, Events und Feature-Handler.

pub mod command_log;
pub mod controller;
pub mod document;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod playback;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Graph, Wiedergabe, View).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use document::CurveDocument;
pub use events::{AppCommand, AppIntent};
pub use playback::PlaybackState;
pub use state::{AppState, UiState, ViewState};

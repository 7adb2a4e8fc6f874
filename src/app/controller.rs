//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Feature-Handler auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Drag ===
            AppCommand::BeginDrag { target } => handlers::drag::begin(state, target)?,
            AppCommand::DragTo { pos, modifiers } => handlers::drag::move_to(state, pos, modifiers)?,
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Editing ===
            AppCommand::AppendAnchor { pos } => handlers::editing::append_anchor(state, pos)?,
            AppCommand::RemoveAnchor { id } => handlers::editing::remove_anchor(state, id)?,
            AppCommand::ClearGraph => handlers::editing::clear(state)?,

            // === Canvas & Optionen ===
            AppCommand::ToggleControls => handlers::view::toggle_controls(state)?,
            AppCommand::SetCanvasSize { width, height } => {
                handlers::view::set_canvas_size(state, width, height)?
            }
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options)?,

            // === Wiedergabe ===
            AppCommand::AdvancePlayback { delta } => handlers::playback::advance(state, delta),
            AppCommand::TogglePlayback => handlers::playback::toggle(state),
            AppCommand::RestartPlayback => handlers::playback::restart(state),
            AppCommand::SetPlaybackEasing { easing } => {
                handlers::playback::set_easing(state, easing)
            }

            // === Datei-I/O ===
            AppCommand::SaveDocument { path } => handlers::file_io::save(state, path)?,
            AppCommand::LoadDocument { path } => handlers::file_io::load(state, path)?,
        }

        Ok(())
    }
}

//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::PickIndex;
use crate::core::PointId;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos, .. } => {
            match state.pick_index().pick(pos, state.options.pick_radius) {
                Some(target) => vec![AppCommand::BeginDrag { target }],
                None => Vec::new(),
            }
        }
        AppIntent::PointerMoved { pos, modifiers } => {
            if state.graph.dragging().is_some() {
                vec![AppCommand::DragTo { pos, modifiers }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.graph.dragging().is_some() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::FrameTick { delta } => vec![AppCommand::AdvancePlayback { delta }],
        AppIntent::CanvasResized { width, height } => {
            vec![AppCommand::SetCanvasSize { width, height }]
        }
        AppIntent::ToggleControlsRequested => vec![AppCommand::ToggleControls],
        AppIntent::AnchorAppendRequested { pos } => vec![AppCommand::AppendAnchor { pos }],
        AppIntent::AnchorRemoveRequested { pos } => {
            let anchors: Vec<_> = state
                .graph
                .pickable_points()
                .into_iter()
                .filter(|(point, _)| matches!(point, PointId::Anchor(_)))
                .collect();
            match PickIndex::from_points(&anchors).pick(pos, state.options.pick_radius) {
                Some(PointId::Anchor(id)) => vec![AppCommand::RemoveAnchor { id }],
                _ => Vec::new(),
            }
        }
        AppIntent::ClearRequested => vec![AppCommand::ClearGraph],
        AppIntent::PlaybackToggled => vec![AppCommand::TogglePlayback],
        AppIntent::PlaybackRestartRequested => vec![AppCommand::RestartPlayback],
        AppIntent::PlaybackEasingChanged { easing } => {
            vec![AppCommand::SetPlaybackEasing { easing }]
        }
        AppIntent::SaveRequested { path } => vec![AppCommand::SaveDocument { path }],
        AppIntent::OpenRequested { path } => vec![AppCommand::LoadDocument { path }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;

//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ArcToolRequested => vec![AppCommand::ActivateArcTool],
        AppIntent::CancelRequested => {
            if state.session.is_active() {
                vec![AppCommand::CancelArcSession]
            } else if state.show_options_dialog {
                vec![AppCommand::CloseOptionsDialog]
            } else {
                vec![]
            }
        }
        // Klicks ohne Sitzung haben keine Wirkung und landen nicht im Log
        AppIntent::ViewportPointerPressed { pos } => {
            if state.session.is_active() {
                vec![AppCommand::ArcPointerDown { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::ViewportPointerMoved { pos } => vec![AppCommand::ArcPointerMove { pos }],
        AppIntent::ViewportPointerReleased { pos } => {
            if state.session.is_active() {
                vec![AppCommand::ArcPointerUp { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::ViewportPointerLeft => vec![AppCommand::ClearHover],
        AppIntent::StatusDismissed => vec![AppCommand::DismissStatus],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

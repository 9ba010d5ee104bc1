//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
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
            // === Bogen-Sitzung ===
            AppCommand::ActivateArcTool => handlers::arc_tool::activate(state),
            AppCommand::CancelArcSession => handlers::arc_tool::cancel(state),
            AppCommand::ArcPointerDown { pos } => handlers::arc_tool::pointer_down(state, pos),
            AppCommand::ArcPointerMove { pos } => handlers::arc_tool::pointer_move(state, pos),
            AppCommand::ArcPointerUp { pos } => handlers::arc_tool::pointer_up(state, pos),
            AppCommand::ClearHover => handlers::arc_tool::clear_hover(state),
            AppCommand::DismissStatus => handlers::arc_tool::dismiss_status(state),

            // === Dialoge & Anwendung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

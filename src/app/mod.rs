//! Application-Layer: Controller, State, Events, Sitzung und Werkzeuge.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Bogen-Sitzung: Zeichnung, aktives Werkzeug, ID-Vergabe
pub mod session;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, UI, Optionen).
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use session::{PointerDownOutcome, SessionController, SessionError, SessionSettings};
pub use state::{AppState, UiState};
pub use tools::{ArcTool, ToolAction, ToolPhase, ToolPreview};

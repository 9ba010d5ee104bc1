//! Arc-Sketch Library.
//! Bogen-Geometrie, Sitzungslogik und Rendering als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PointerDownOutcome, SessionController,
    SessionError, ToolPhase, UiState,
};
pub use core::{Circle, Drawing, DrawnArc, ResolvedArc, SnapTarget, ThreePointArc};
pub use shared::{EditorOptions, RenderScene};

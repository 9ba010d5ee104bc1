//! Application State: zentrale Datenhaltung.

use super::session::{SessionController, SessionSettings};
use super::CommandLog;
use crate::core::DrawnArc;
use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;

/// UI-bezogener Zustand (Statusleiste, Cursor).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. abgelehnte Aktivierung)
    pub status_message: Option<String>,
    /// Letzte Cursor-Position im Viewport (Viewport-lokale Pixel)
    pub cursor: Option<DVec2>,
    /// Zuletzt fertiggestellter Bogen
    pub last_completed: Option<DrawnArc>,
}

impl UiState {
    /// Erstellt den Standard-UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichnung und laufende Bogen-Sitzung
    pub session: SessionController,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Farben, Größen, Snapping)
    pub options: EditorOptions,
    /// Ziel beim Speichern geänderter Optionen
    pub config_path: PathBuf,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            session: SessionController::new(SessionSettings::from(&options)),
            ui: UiState::new(),
            options,
            config_path: EditorOptions::config_path(),
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl fertiger Bögen (für UI-Anzeige).
    pub fn arc_count(&self) -> usize {
        self.session.drawing().len()
    }

    /// `true`, wenn Escape bereits gesetzte Punkte verwerfen würde.
    pub fn has_pending_points(&self) -> bool {
        self.session.phase().is_some_and(|phase| phase.is_drawing())
    }

    /// Statustext des aktiven Werkzeugs (`None` ohne Sitzung).
    pub fn tool_status_text(&self) -> Option<&'static str> {
        self.session.active_tool().map(|tool| tool.status_text())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neue Bogen-Sitzung starten
    ActivateArcTool,
    /// Laufende Bogen-Sitzung verwerfen
    CancelArcSession,
    /// Klick an die Sitzung weiterreichen
    ArcPointerDown { pos: DVec2 },
    /// Cursor-Bewegung an die Sitzung weiterreichen
    ArcPointerMove { pos: DVec2 },
    /// Loslassen an die Sitzung weiterreichen
    ArcPointerUp { pos: DVec2 },
    /// Hover-Position verwerfen
    ClearHover,
    /// Statusmeldung entfernen
    DismissStatus,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

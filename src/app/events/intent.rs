use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Bogen-Werkzeug gewählt (Toolbar-Button oder Taste `A`)
    ArcToolRequested,
    /// Escape: laufende Sitzung abbrechen bzw. Dialog schließen
    CancelRequested,
    /// Primäre Maustaste im Viewport gedrückt (Viewport-lokale Pixel)
    ViewportPointerPressed { pos: DVec2 },
    /// Cursor im Viewport bewegt
    ViewportPointerMoved { pos: DVec2 },
    /// Primäre Maustaste im Viewport losgelassen
    ViewportPointerReleased { pos: DVec2 },
    /// Cursor hat den Viewport verlassen
    ViewportPointerLeft,
    /// Statusmeldung ausblenden
    StatusDismissed,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert (Live-Vorschau)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

//! Handler für die Bogen-Sitzung (Aktivieren, Klicks, Abbrechen).

use crate::app::session::PointerDownOutcome;
use crate::app::AppState;
use glam::DVec2;

/// Startet eine Bogen-Sitzung; bei laufender Sitzung nur Statusmeldung.
pub fn activate(state: &mut AppState) {
    match state.session.activate() {
        Ok(()) => {
            state.ui.status_message = None;
            log::info!("Bogen-Werkzeug aktiviert");
        }
        Err(e) => {
            log::warn!("Aktivierung abgelehnt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Bricht die laufende Sitzung ab (Escape).
pub fn cancel(state: &mut AppState) {
    if state.session.deactivate() {
        log::info!("Bogen-Sitzung abgebrochen");
    }
}

/// Verarbeitet einen Viewport-Klick.
pub fn pointer_down(state: &mut AppState, pos: DVec2) {
    state.ui.cursor = Some(pos);
    match state.session.handle_pointer_down(pos) {
        PointerDownOutcome::Completed(drawn) => {
            match drawn.arc.resolve() {
                Some(resolved) => log::info!("Bogen #{} fertig ({})", drawn.id, resolved.label()),
                None => log::info!("Bogen #{} fertig (entartet)", drawn.id),
            }
            state.ui.last_completed = Some(drawn);
        }
        PointerDownOutcome::Advanced(phase) => log::debug!("Bogen-Phase: {:?}", phase),
        PointerDownOutcome::Ignored => {}
    }
}

/// Aktualisiert Cursor und Hover-Snap.
pub fn pointer_move(state: &mut AppState, pos: DVec2) {
    state.ui.cursor = Some(pos);
    state.session.handle_pointer_move(pos);
}

pub fn pointer_up(state: &mut AppState, pos: DVec2) {
    state.session.handle_pointer_up(pos);
}

/// Cursor hat den Viewport verlassen.
pub fn clear_hover(state: &mut AppState) {
    state.ui.cursor = None;
    state.session.pointer_left();
}

/// Entfernt die Statusmeldung.
pub fn dismiss_status(state: &mut AppState) {
    state.ui.status_message = None;
}

//! Keyboard-Shortcuts für den Viewport.
//!
//! Mappt Tastendrücke auf `AppIntent`s. Ob ein Intent wirkt, entscheidet
//! das Intent-Mapping anhand des Zustands.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder (z.B. im Options-Dialog) haben Vorrang
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_a_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    if key_a_pressed && !modifiers.command {
        events.push(AppIntent::ArcToolRequested);
    }

    events
}

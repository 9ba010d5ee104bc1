//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar und gibt erzeugte Events zurück.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.tool_status_text() {
                Some(text) => ui.label(text),
                None => ui.label("Kein Werkzeug aktiv (A = Bogen)"),
            };
            if state.has_pending_points() {
                ui.weak("(Esc verwirft die Punkte)");
            }

            ui.separator();
            ui.label(format!("Bögen: {}", state.arc_count()));

            if let Some(drawn) = &state.ui.last_completed {
                if let Some(resolved) = drawn.arc.resolve() {
                    ui.separator();
                    ui.label(format!("Zuletzt: #{} {}", drawn.id, resolved.label()));
                }
            }

            ui.separator();
            match state.ui.cursor {
                Some(pos) => ui.label(format!("Cursor: ({:.1}, {:.1})", pos.x, pos.y)),
                None => ui.label("Cursor: –"),
            };

            // Statusnachricht (z.B. abgelehnte Aktivierung)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusDismissed);
                }
            }
        });
    });

    events
}

//! Toolbar für Werkzeug und Zeichnung.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let drawing = state.session.is_active();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            // Während einer Sitzung bleibt der Button klickbar: die Ablehnung
            // landet als Hinweis in der Statusleiste.
            if ui
                .add(egui::Button::new("⌒ Bogen (A)").selected(drawing))
                .clicked()
            {
                events.push(AppIntent::ArcToolRequested);
            }


            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
                if ui.button("⚙ Optionen").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                }
            });
        });
    });

    events
}

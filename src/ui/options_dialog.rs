//! Optionen-Dialog für Snapping, Geometrie, Farben und Label.

use crate::app::{AppIntent, AppState};
use crate::render::to_color32;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Snapping ────────────────────────────────────
                    ui.collapsing("Snapping", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.snap_enabled, "Auf Bogenpunkte einrasten")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Snap-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.snap_radius)
                                        .range(1.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Ring-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.snap_ring_radius)
                                        .range(1.0..=20.0)
                                        .speed(0.25),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Ring-Farbe:", &mut opts.snap_ring_color);
                    });

                    // ── Geometrie ───────────────────────────────────
                    ui.collapsing("Geometrie", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Sehnen-Radiusfaktor:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.chord_radius_factor)
                                        .range(0.5..=10.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Segmentlänge (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.arc_segment_length)
                                        .range(0.5..=50.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Punkt-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_radius)
                                        .range(1.0..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.stroke_width)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Bögen:", &mut opts.arc_color);
                        changed |= color_edit(ui, "Vorschau:", &mut opts.preview_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                    });

                    // ── Radius-Label ────────────────────────────────
                    ui.collapsing("Radius-Label", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Schriftgröße:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.label_font_size)
                                        .range(8.0..=48.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Innenabstand:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.label_padding)
                                        .range(0.0..=20.0)
                                        .speed(0.25),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Füllung:", &mut opts.label_fill_color);
                        changed |= color_edit(ui, "Rahmen:", &mut opts.label_border_color);
                        changed |= color_edit(ui, "Text:", &mut opts.label_text_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|v| v as f32 / 255.0);
            changed = true;
        }
    });
    changed
}

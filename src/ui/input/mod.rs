//! Viewport-Input-Handling: Maus-Events und Tastatur → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use glam::DVec2;

/// Merkt sich die letzte gemeldete Zeigerposition im Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    last_local: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen sind Viewport-lokal (Ursprung oben links im `response.rect`).
    /// Bewegungen werden nur bei geänderter Position gemeldet.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);

        let rect = response.rect;
        let hover = response.hover_pos().map(|pos| to_local(pos, rect));

        match hover {
            Some(local) => {
                if self.last_local != Some(local) {
                    events.push(AppIntent::ViewportPointerMoved { pos: local });
                    self.last_local = Some(local);
                }
            }
            None => {
                if self.last_local.take().is_some() {
                    events.push(AppIntent::ViewportPointerLeft);
                }
            }
        }

        let Some(local) = hover else {
            return events;
        };

        let (pressed, released) =
            ui.input(|i| (i.pointer.primary_pressed(), i.pointer.primary_released()));

        if pressed {
            events.push(AppIntent::ViewportPointerPressed { pos: local });
        }
        if released {
            events.push(AppIntent::ViewportPointerReleased { pos: local });
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Viewport-lokale Koordinaten um.
pub(crate) fn to_local(pos: egui::Pos2, rect: egui::Rect) -> DVec2 {
    let local = pos - rect.min;
    DVec2::new(local.x as f64, local.y as f64)
}

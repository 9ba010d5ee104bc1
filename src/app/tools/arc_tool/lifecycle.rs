//! Klick-Verarbeitung und Statustexte des Bogen-Werkzeugs.

use super::super::ToolAction;
use super::state::{advance, ArcTool, ToolPhase};
use glam::DVec2;

impl ArcTool {
    /// Verarbeitet einen bereits gesnappten Klick.
    pub fn on_pointer_down(&mut self, point: DVec2) -> ToolAction {
        let (phase, arc) = advance(self.phase, self.arc, point);
        self.phase = phase;
        self.arc = arc;

        if phase == ToolPhase::Complete {
            ToolAction::Complete
        } else {
            ToolAction::Continue
        }
    }

    /// Loslassen hat keine Wirkung; Punkte werden beim Drücken gesetzt.
    pub fn on_pointer_up(&mut self) {}

    /// Aufforderung für die Statusleiste.
    pub fn status_text(&self) -> &'static str {
        match self.phase {
            ToolPhase::Idle => "Bogen: Startpunkt klicken",
            ToolPhase::FirstPointSet => "Bogen: zweites Bogen-Ende klicken",
            ToolPhase::SecondPointSet => "Bogen: Punkt klicken, durch den der Bogen läuft",
            ToolPhase::Complete => "Bogen fertig",
        }
    }
}
